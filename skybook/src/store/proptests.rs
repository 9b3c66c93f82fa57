//! Property-based tests for the reservation store.

use super::test_util::create_test_store;
use crate::reservation::{ReservationDetails, ReservationId};
use proptest::prelude::*;

// Strategy for free-form text fields
fn text_strategy() -> impl Strategy<Value = String> {
    "\\PC{0,40}"
}

fn details_strategy() -> impl Strategy<Value = ReservationDetails> {
    (
        text_strategy(),
        "[A-Z]{2}[0-9]{1,4}",
        text_strategy(),
        text_strategy(),
        "20[0-9]{2}-(0[1-9]|1[0-2])-(0[1-9]|1[0-9]|2[0-8])",
        "[0-9]{1,2}[A-F]",
    )
        .prop_map(|(name, flight, departure, destination, date, seat)| {
            ReservationDetails::new(name, flight, departure, destination, date, seat)
        })
}

#[derive(Debug, Clone)]
enum Op {
    Create(ReservationDetails),
    // Index into the ids created so far
    Delete(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => details_strategy().prop_map(Op::Create),
        1 => any::<usize>().prop_map(Op::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Whatever the caller stores comes back unchanged
    #[test]
    fn create_then_get_round_trips(details in details_strategy()) {
        let (_dir, store) = create_test_store();

        let id = store.create(&details).unwrap();
        let loaded = store.get_by_id(id).unwrap().unwrap();

        prop_assert_eq!(loaded.id(), id);
        prop_assert_eq!(loaded.details(), &details);
    }

    // Ids strictly increase and are never reused, whatever is deleted in between
    #[test]
    fn ids_strictly_increase_across_deletes(ops in prop::collection::vec(op_strategy(), 1..30)) {
        let (_dir, store) = create_test_store();
        let mut created: Vec<ReservationId> = Vec::new();
        let mut live: Vec<ReservationId> = Vec::new();

        for op in ops {
            match op {
                Op::Create(details) => {
                    let id = store.create(&details).unwrap();
                    if let Some(last) = created.last() {
                        prop_assert!(id > *last);
                    }
                    created.push(id);
                    live.push(id);
                }
                Op::Delete(index) => {
                    if created.is_empty() {
                        continue;
                    }
                    let id = created[index % created.len()];
                    let was_live = live.contains(&id);
                    prop_assert_eq!(store.delete(id).unwrap(), was_live);
                    live.retain(|l| *l != id);
                }
            }
        }

        // Creation times never decrease, so newest-first is descending id order
        let listed: Vec<ReservationId> = store.list_all().unwrap().iter().map(|r| r.id()).collect();
        let mut expected = live.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(listed, expected);
        prop_assert_eq!(store.count().unwrap(), live.len());
    }

    // Update replaces the fields and nothing else
    #[test]
    fn update_keeps_identity(before in details_strategy(), after in details_strategy()) {
        let (_dir, store) = create_test_store();
        let id = store.create(&before).unwrap();
        let original = store.get_by_id(id).unwrap().unwrap();

        prop_assert!(store.update(id, &after).unwrap());

        let loaded = store.get_by_id(id).unwrap().unwrap();
        prop_assert_eq!(loaded.id(), original.id());
        prop_assert_eq!(loaded.created_at(), original.created_at());
        prop_assert_eq!(loaded.details(), &after);
    }
}

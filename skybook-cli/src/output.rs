//! Reservation output formatting.
//!
//! Renders reservations as a human-readable table, JSON, CSV or TSV.

use crate::error::CliError;
use crate::utils::format_timestamp;
use skybook::{OutputFormat, Reservation};
use std::io::Write;

/// Column headers for table, CSV and TSV output.
const COLUMN_HEADERS: [&str; 8] = [
    "id",
    "name",
    "flight_number",
    "departure",
    "destination",
    "date",
    "seat_number",
    "created_at",
];

fn columns(res: &Reservation) -> [String; 8] {
    [
        res.id().to_string(),
        res.name().to_string(),
        res.flight_number().to_string(),
        res.departure().to_string(),
        res.destination().to_string(),
        res.date().to_string(),
        res.seat_number().to_string(),
        format_timestamp(res.created_at()),
    ]
}

/// Escape control characters so a value stays on one table line and in one column.
fn table_cell(value: &str) -> String {
    if !value.chars().any(char::is_control) {
        return value.to_string();
    }
    value
        .chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Write a list of reservations in the given format.
pub fn write_reservations<W: Write>(
    out: &mut W,
    reservations: &[Reservation],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => write_table(out, reservations),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reservations)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => write_delimited(out, reservations, b','),
        OutputFormat::Tsv => write_delimited(out, reservations, b'\t'),
    }
}

/// Write a single reservation in the given format.
///
/// JSON output is a single object rather than an array.
pub fn write_reservation<W: Write>(
    out: &mut W,
    reservation: &Reservation,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            for (header, value) in COLUMN_HEADERS.iter().zip(columns(reservation)) {
                writeln!(out, "{header:<13} {}", table_cell(&value))?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reservation)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            write_reservations(out, std::slice::from_ref(reservation), format)
        }
    }
}

/// Format reservations as a tab-separated table with uppercase headers.
fn write_table<W: Write>(out: &mut W, reservations: &[Reservation]) -> Result<(), CliError> {
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for res in reservations {
        let cells: Vec<String> = columns(res)
            .iter()
            .map(String::as_str)
            .map(table_cell)
            .collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }

    Ok(())
}

/// Format reservations as delimited output (CSV or TSV).
fn write_delimited<W: Write>(
    out: &mut W,
    reservations: &[Reservation],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS)?;
    for res in reservations {
        writer.write_record(columns(res))?;
    }

    writer.flush()?;
    Ok(())
}

//! CSV export of the instrument table
//!
//! Column order is the one externally persisted artifact and must not
//! change: Note/Bond, Interest Rate (%), Due Year, Amount,
//! Related Entity, Currency, Maturity Period.

use super::DebtInstrumentRecord;
use csv::Writer;
use std::error::Error;
use std::io;
use std::path::Path;

/// Fixed export header.
pub const CSV_COLUMNS: [&str; 7] = [
    "Note/Bond",
    "Interest Rate (%)",
    "Due Year",
    "Amount",
    "Related Entity",
    "Currency",
    "Maturity Period",
];

/// Write the instrument table to any writer. The maturity period column
/// is derived from `current_year` at write time.
pub fn write_csv<W: io::Write>(
    records: &[DebtInstrumentRecord],
    current_year: i32,
    writer: W,
) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(CSV_COLUMNS)?;

    for record in records {
        csv_writer.write_record([
            record.name.clone(),
            format!("{:.3}", record.interest_rate_pct),
            record.due_year.to_string(),
            record.amount_display.clone(),
            record.related_entity.clone(),
            record.currency.clone(),
            format!("{} years", record.maturity_period_years(current_year)),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render the instrument table as a CSV string.
pub fn to_csv_string(
    records: &[DebtInstrumentRecord],
    current_year: i32,
) -> Result<String, Box<dyn Error>> {
    let mut buffer = Vec::new();
    write_csv(records, current_year, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write the instrument table to a file path.
pub fn write_csv_file<P: AsRef<Path>>(
    records: &[DebtInstrumentRecord],
    current_year: i32,
    path: P,
) -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::create(path)?;
    write_csv(records, current_year, file)
}

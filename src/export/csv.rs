use super::model::{CSV_HEADERS, event_to_row};
use crate::errors::AppResult;
use crate::models::DelayEvent;
use csv::Writer;
use std::io::Write;
use std::path::Path;

/// Default attachment / output file name.
pub const CSV_FILE_NAME: &str = "delay_data.csv";

/// Write the events as CSV into any writer.
pub fn write_csv<W: Write>(out: W, events: &[DelayEvent]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    wtr.write_record(CSV_HEADERS)?;

    for ev in events {
        wtr.write_record(event_to_row(ev))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render the full CSV document (UTF-8) into memory.
pub fn to_csv(events: &[DelayEvent]) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(&mut buf, events)?;
    Ok(buf)
}

/// Write the CSV document to a file on disk.
pub fn write_csv_file(path: &Path, events: &[DelayEvent]) -> AppResult<()> {
    let file = std::fs::File::create(path)?;
    write_csv(file, events)
}

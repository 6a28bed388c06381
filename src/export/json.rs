use super::model::EventView;
use crate::errors::AppResult;
use crate::models::DelayEvent;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON array, same objects as `GET /data`.
pub fn to_json(events: &[DelayEvent]) -> AppResult<String> {
    let views: Vec<EventView> = events.iter().map(EventView::from).collect();
    Ok(serde_json::to_string_pretty(&views)?)
}

pub fn write_json_file(path: &Path, events: &[DelayEvent]) -> AppResult<()> {
    let json_data = to_json(events)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

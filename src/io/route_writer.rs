use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::Context;

use crate::solution::RouteEvent;

/// Writes the events as a JSON array of
/// `{courier_id, action, order_id, point_id}` records.
pub fn write_route(path: impl Into<String>, events: &[RouteEvent]) -> anyhow::Result<()> {
    let path = path.into();
    let file = File::create(&path).with_context(|| format!("cannot create route {}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, events)?;
    writer.flush()?;
    Ok(())
}

pub fn load_route(path: impl Into<String>) -> anyhow::Result<Vec<RouteEvent>> {
    let path = path.into();
    let file = File::open(&path).with_context(|| format!("cannot open route {}", path))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("malformed route {}", path))
}

#[cfg(test)]
mod tests {
    use crate::solution::Action;

    use super::*;

    #[test]
    fn route_file_keeps_event_order() -> anyhow::Result<()> {
        let events = vec![
            RouteEvent {
                courier_id: 3,
                action: Action::Pickup,
                order_id: 7,
                point_id: 71,
            },
            RouteEvent {
                courier_id: 3,
                action: Action::Dropoff,
                order_id: 7,
                point_id: 72,
            },
        ];
        let path = std::env::temp_dir().join(format!("route_{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();

        write_route(path.clone(), &events)?;
        let written = std::fs::read_to_string(&path)?;
        assert!(written.contains(r#""action":"pickup""#));
        assert!(written.contains(r#""action":"dropoff""#));
        assert_eq!(load_route(path.clone())?, events);

        std::fs::remove_file(&path)?;
        Ok(())
    }
}

use crate::export::event::LogEvent;
use crate::utils::time::format_tanggal;
use std::collections::HashMap;

/// Collapse repeated taps: at most one event per (NIK, day, action),
/// keeping the earliest. First-seen key order is preserved because it
/// drives the row order of the export.
pub fn dedupe_earliest(events: Vec<LogEvent>) -> Vec<LogEvent> {
    let mut kept: Vec<LogEvent> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for event in events {
        let key = format!(
            "{}-{}-{}",
            event.nik,
            format_tanggal(event.waktu),
            event.aksi
        );

        match index.get(&key) {
            Some(&at) => {
                // Strictly earlier replaces; on a tie the first seen stays
                if event.waktu < kept[at].waktu {
                    kept[at] = event;
                }
            }
            None => {
                index.insert(key, kept.len());
                kept.push(event);
            }
        }
    }

    kept
}

//! Background data loading with native file dialogs (rfd).

use std::path::PathBuf;

use crossbeam_channel::Sender;
use tracing::{info, warn};

use benchmap_core::fallback::fallback_benches;
use benchmap_core::geojson::load_benches;

use crate::state::{AppMessage, DataSource, LogEntry};

/// The data file read at startup, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "benches.geojson";

/// Open a file dialog and load the chosen GeoJSON in a background thread.
/// A failed load keeps the current collection.
pub fn open_geojson(tx: Sender<AppMessage>) {
    std::thread::spawn(move || {
        let path = rfd::FileDialog::new()
            .add_filter("GeoJSON", &["geojson", "json"])
            .add_filter("All files", &["*"])
            .set_title("Open Benches")
            .pick_file();

        if let Some(path) = path {
            match load_benches(&path) {
                Ok(benches) => send_loaded(&tx, DataSource::File(path), benches),
                Err(e) => {
                    let _ = tx.send(AppMessage::Error {
                        context: "File open".to_string(),
                        message: format!("Failed to read {}: {}", path.display(), e),
                    });
                    let _ = tx.send(AppMessage::Log(LogEntry::error(format!(
                        "Failed to read {}: {}",
                        path.display(),
                        e
                    ))));
                }
            }
        }
    });
}

/// Load a GeoJSON file in a background thread, degrading to the embedded
/// fallback dataset on any failure. Used for the startup load and reloads.
pub fn load_or_fallback(path: PathBuf, tx: Sender<AppMessage>) {
    std::thread::spawn(move || {
        let _ = tx.send(AppMessage::Log(LogEntry::info(format!(
            "Loading {}...",
            path.display()
        ))));

        match load_benches(&path) {
            Ok(benches) => {
                info!(path = %path.display(), count = benches.len(), "loaded bench data");
                send_loaded(&tx, DataSource::File(path), benches);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "load failed, using fallback dataset");
                let _ = tx.send(AppMessage::Log(LogEntry::warning(format!(
                    "Failed to read {}: {} — using built-in samples",
                    path.display(),
                    e
                ))));
                send_loaded(&tx, DataSource::Fallback, fallback_benches());
            }
        }
    });
}

fn send_loaded(tx: &Sender<AppMessage>, source: DataSource, benches: Vec<benchmap_core::Bench>) {
    let _ = tx.send(AppMessage::Log(LogEntry::success(format!(
        "Loaded {} benches ({})",
        benches.len(),
        source.label()
    ))));
    let _ = tx.send(AppMessage::BenchesLoaded { source, benches });
}

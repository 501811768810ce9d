//! Event emitter that writes catalog events to the log.

use mealmate_core::{CatalogEvent, CatalogEventEmitter};
use tracing::info;

/// Logs each catalog event as JSON at `info` level.
///
/// The CLI has no live listener, so the log is the only sink.
#[derive(Debug, Clone, Default)]
pub struct LogEmitter;

impl CatalogEventEmitter for LogEmitter {
    fn emit(&self, event: CatalogEvent) {
        let payload = serde_json::to_string(&event).unwrap_or_default();
        info!(event = event.event_name(), %payload, "Catalog event");
    }
}

//! Event emitter trait for catalog events.
//!
//! Implementations handle transport details (channels, logs, SSE, etc.).

use crate::events::CatalogEvent;

/// Trait for emitting catalog events.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and contexts without a listener
/// - Adapter-specific implementations (the CLI logs them)
pub trait CatalogEventEmitter: Send + Sync {
    /// Emit a catalog event. Must not block.
    fn emit(&self, event: CatalogEvent);
}

/// A no-op event emitter.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    pub const fn new() -> Self {
        Self
    }
}

impl CatalogEventEmitter for NoopEmitter {
    fn emit(&self, _event: CatalogEvent) {
        // Intentionally do nothing
    }
}

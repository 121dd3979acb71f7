//! Tracing/logging setup shared by the editor's binaries.

pub use crate::tracing::LogFormat;

/// Initialize process-wide tracing with the default `info` filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info", LogFormat::Text);
}

/// Initialize tracing with `default_filter` unless `RUST_LOG` is set.
pub fn init_with(default_filter: &str, format: LogFormat) {
    tracing::init(default_filter, format);
}

/// Tracing configuration (filters, layers).
pub mod tracing;

#[cfg(test)]
mod tests {
    #[test]
    fn default_init_then_custom_init_does_not_panic() {
        super::init();
        super::init_with("debug", super::LogFormat::Json);
    }
}

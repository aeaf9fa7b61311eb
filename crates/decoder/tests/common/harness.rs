//! Test harness helpers.

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber that writes through the test capture.
///
/// Safe to call from every test; only the first call installs anything.
/// The filter comes from `RUST_LOG`, defaulting to `a64dec_core=trace` so
/// that every logging path is exercised.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("a64dec_core=trace"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Serializes `words` as a little-endian byte image.
pub fn image(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

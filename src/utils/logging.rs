//! Logging setup for examples and applications

/// Initialize the logger with default settings for the demo binaries.
/// Defaults to INFO; the RUST_LOG environment variable overrides it.
pub fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{:5}] {}", record.level(), record.args())
        })
        .init();
}

//! Tracing subscriber setup.

use tracing::Level;

/// Install the global subscriber. Output goes to stderr so stdout only carries command
/// feedback. Repeated calls are ignored.
pub fn init(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_ok() {
        tracing::debug!(%level, "logging initialized");
    }
}

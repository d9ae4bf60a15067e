pub mod app;
pub mod domain;
pub mod infra;
pub mod ui;

pub fn init(level: tracing::Level) {
    infra::logging::init(level);
}

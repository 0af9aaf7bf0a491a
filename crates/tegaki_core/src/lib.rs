//! Core ink model for handwritten character capture and export.
//! Input widgets mutate it, renderers read it, exporters serialize it.

pub mod export;
pub mod logging;
pub mod model;

pub use logging::{
    default_log_level, init_logging, init_with_config, logging_status, LoggingConfig,
};
pub use model::character::Character;
pub use model::error::{InvalidStateError, ModelResult};
pub use model::point::Point;
pub use model::stroke::Stroke;
pub use model::writing::Writing;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

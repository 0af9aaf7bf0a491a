//! Text export of the ink model.
//!
//! # Responsibility
//! - Hold the formatting helpers shared by every level of the XML export.
//! - Keep indentation and escaping rules in one place.
//!
//! # Invariants
//! - Export never fails; every model state has a textual form.
//! - Output lines are joined by `\n` without a trailing newline.

pub mod xml;

pub use xml::{element_block, empty_element, escape_text, indent_block, XML_DECLARATION};

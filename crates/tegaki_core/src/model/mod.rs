//! Ink model for one handwritten character.
//!
//! # Responsibility
//! - Define the point → stroke → writing → character hierarchy.
//! - Keep copy semantics explicit: `Point::merge_from` merges present
//!   attributes, every `replace_from` produces an independent deep copy.
//!
//! # Invariants
//! - Each level owns its children by value; no aliasing across characters.
//! - Optional sample attributes are `Option`, so zero is never "absent".
//! - Accessors lend the live containers; callers must not expect snapshots.

pub mod character;
pub mod error;
pub mod point;
pub mod stroke;
pub mod writing;

//! Character model: one writing plus the text it represents.
//!
//! # Responsibility
//! - Own exactly one `Writing` and an optional label.
//! - Produce the full XML document for export.
//!
//! # Invariants
//! - The writing is replaced as a whole; it is never merged.
//! - `replace_from` overwrites the label even when the source has none.
//! - An absent label renders as an empty `<utf8></utf8>` element.

use crate::export::xml::{escape_text, indent_block, XML_DECLARATION};
use crate::model::writing::Writing;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Serialized as `utf8` to match the export element name.
    #[serde(rename = "utf8", default)]
    label: Option<String>,
    writing: Writing,
}

impl Character {
    /// Creates an unlabeled character with an empty writing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            writing: Writing::new(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn writing(&self) -> &Writing {
        &self.writing
    }

    pub fn writing_mut(&mut self) -> &mut Writing {
        &mut self.writing
    }

    pub fn set_writing(&mut self, writing: Writing) {
        self.writing = writing;
    }

    /// Overwrites this character with an independent copy of `other`.
    pub fn replace_from(&mut self, other: &Character) {
        self.set_label(other.label.clone());

        let mut writing = Writing::new();
        writing.replace_from(other.writing.strokes());
        self.set_writing(writing);
    }

    /// Renders the complete export document, declaration included.
    ///
    /// The label is written as-is except for `&`, `<` and `>`, which are
    /// escaped so the label cannot break the element structure. An absent
    /// label yields `<utf8></utf8>`.
    pub fn to_xml(&self) -> String {
        let label = self.label.as_deref().map(escape_text).unwrap_or_default();
        let lines = [
            XML_DECLARATION.to_string(),
            "<character>".to_string(),
            indent_block(&format!("<utf8>{label}</utf8>")),
            indent_block(&self.writing.to_xml()),
            "</character>".to_string(),
        ];

        debug!(
            "event=character_export module=character status=ok labeled={} strokes={} points={}",
            self.label.is_some(),
            self.writing.stroke_count(),
            self.writing.point_count()
        );
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::Character;
    use crate::model::point::Point;

    #[test]
    fn new_character_is_unlabeled_and_empty() {
        let character = Character::new();
        assert_eq!(character.label(), None);
        assert_eq!(character.writing().stroke_count(), 0);
    }

    #[test]
    fn replace_from_clears_label_when_source_has_none() {
        let mut target = Character::with_label("木");
        target.writing_mut().move_to_point(Point::new(1.0, 1.0));

        target.replace_from(&Character::new());

        assert_eq!(target.label(), None);
        assert_eq!(target.writing().stroke_count(), 0);
    }

    #[test]
    fn label_is_escaped_in_export() {
        let character = Character::with_label("<&>");
        assert!(character.to_xml().contains("<utf8>&lt;&amp;&gt;</utf8>"));
    }
}

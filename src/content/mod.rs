//! The literal content model behind the profile page.
//!
//! Everything on the page comes from [`Profile::aadarsh`]: the name, its
//! phonetic transcription, two dictionary-style definitions, a description
//! paragraph, and the ordered list of similar tags. The model is built once
//! and never mutated; rendering treats it as read-only input.

use serde::Serialize;

/// One run of text inside a definition or the description paragraph.
///
/// `Strong` spans render emphasized (the designated term of a definition,
/// or a highlighted phrase in the description).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    /// Plain body text.
    Plain(String),
    /// Emphasized text.
    Strong(String),
}

impl Span {
    /// Plain span from a string literal.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Emphasized span from a string literal.
    pub fn strong(text: impl Into<String>) -> Self {
        Self::Strong(text.into())
    }

    /// The span's text, regardless of emphasis.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Strong(text) => text,
        }
    }

    /// Whether this span renders emphasized.
    #[must_use]
    pub const fn is_strong(&self) -> bool {
        matches!(self, Self::Strong(_))
    }
}

/// One numbered dictionary-style definition entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    /// The definition body as a sequence of plain and emphasized spans.
    pub spans: Vec<Span>,
}

impl Definition {
    /// The emphasized terms of this definition, in order.
    #[must_use]
    pub fn strong_terms(&self) -> Vec<&str> {
        self.spans
            .iter()
            .filter(|span| span.is_strong())
            .map(Span::text)
            .collect()
    }

    /// The full definition text with emphasis flattened away.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

/// The complete content of the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Heading text.
    pub name: String,
    /// Phonetic transcription shown under the heading.
    pub phonetic: String,
    /// Part-of-speech label above the definitions.
    pub part_of_speech: String,
    /// Numbered definition entries, in display order.
    pub definitions: Vec<Definition>,
    /// Label above the description paragraph.
    pub description_label: String,
    /// Description paragraph as plain and emphasized spans.
    pub description: Vec<Span>,
    /// Label above the similar tags.
    pub similar_label: String,
    /// Similar tags, rendered as pills in listed order.
    pub similar: Vec<String>,
}

impl Profile {
    /// The page content. Fixed at construction, no external input.
    #[must_use]
    pub fn aadarsh() -> Self {
        Self {
            name: "Aadarsh".to_string(),
            phonetic: "/आदर्श/".to_string(),
            part_of_speech: "noun".to_string(),
            definitions: vec![
                Definition {
                    spans: vec![
                        Span::plain("Front-end "),
                        Span::strong("engineer"),
                        Span::plain(
                            ", a person who builds the visual and interactive \
                             part of a website or an application.",
                        ),
                    ],
                },
                Definition {
                    spans: vec![
                        Span::strong("Designer"),
                        Span::plain(
                            ", a creator who creates digital products that are \
                             usable and beautiful.",
                        ),
                    ],
                },
            ],
            description_label: "description".to_string(),
            description: vec![
                Span::plain("An independent "),
                Span::strong("software engineer"),
                Span::plain(" and "),
                Span::strong("designer"),
                Span::plain(
                    " based in Kerala, India, with the ability to give soul \
                     to every pixel.",
                ),
            ],
            similar_label: "Similar:".to_string(),
            similar: vec![
                "engineer".to_string(),
                "developer".to_string(),
                "coder".to_string(),
                "product designer".to_string(),
                "ui/ux".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similar_tags_in_listed_order() {
        let profile = Profile::aadarsh();
        assert_eq!(
            profile.similar,
            vec!["engineer", "developer", "coder", "product designer", "ui/ux"]
        );
    }

    #[test]
    fn test_exactly_five_tags() {
        assert_eq!(Profile::aadarsh().similar.len(), 5);
    }

    #[test]
    fn test_exactly_two_definitions() {
        assert_eq!(Profile::aadarsh().definitions.len(), 2);
    }

    #[test]
    fn test_definition_terms() {
        let profile = Profile::aadarsh();
        assert_eq!(profile.definitions[0].strong_terms(), vec!["engineer"]);
        assert_eq!(profile.definitions[1].strong_terms(), vec!["Designer"]);
    }

    #[test]
    fn test_definition_plain_text() {
        let profile = Profile::aadarsh();
        let first = profile.definitions[0].plain_text();
        assert!(first.starts_with("Front-end engineer, a person who builds"));
    }

    #[test]
    fn test_heading_and_phonetic_literals() {
        let profile = Profile::aadarsh();
        assert_eq!(profile.name, "Aadarsh");
        assert_eq!(profile.phonetic, "/आदर्श/");
    }

    #[test]
    fn test_construction_is_value_stable() {
        // The model carries no identity beyond value equality.
        assert_eq!(Profile::aadarsh(), Profile::aadarsh());
    }

    #[test]
    fn test_span_accessors() {
        let plain = Span::plain("a");
        let strong = Span::strong("b");
        assert!(!plain.is_strong());
        assert!(strong.is_strong());
        assert_eq!(plain.text(), "a");
        assert_eq!(strong.text(), "b");
    }

    #[test]
    fn test_serializes_to_json() {
        let profile = Profile::aadarsh();
        let json = serde_json::to_value(&profile).expect("profile serializes");
        assert_eq!(json["name"], "Aadarsh");
        assert_eq!(json["similar"].as_array().map(Vec::len), Some(5));
    }
}

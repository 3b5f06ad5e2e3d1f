//! Structural checks over the content model and the rendered document.
//!
//! The page's contract is fully literal, so it can be verified mechanically:
//! five tags rendered as pills in listed order, two definitions each with
//! its emphasized term, one description paragraph, idempotent rendering.
//! `check` runs these against [`Profile::aadarsh`] and reports issues; the
//! same checks back the integration tests.

use serde::Serialize;

use crate::content::Profile;
use crate::error::{CheckIssue, Severity};
use crate::render::page::{render_page, tag_pill};

/// Number of similar tags the page must render.
pub const EXPECTED_TAG_COUNT: usize = 5;

/// Number of definition entries the page must render.
pub const EXPECTED_DEFINITION_COUNT: usize = 2;

/// Run all structural checks. An empty result means the page holds all of
/// its properties.
#[must_use]
pub fn run_checks(profile: &Profile) -> Vec<CheckIssue> {
    let mut issues = Vec::new();

    check_labels(profile, &mut issues);
    check_tags(profile, &mut issues);
    check_definitions(profile, &mut issues);
    check_document(profile, &mut issues);

    issues
}

/// Summary of a check run, serializable for `--format json`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether the run counts as passing (strictness applied)
    pub ok: bool,
    /// Number of error-severity issues
    pub errors: usize,
    /// Number of warning-severity issues
    pub warnings: usize,
    /// All issues found, in discovery order
    pub issues: Vec<CheckIssue>,
}

impl CheckReport {
    /// Build a report from the issue list. Under `strict`, warnings fail
    /// the run as well.
    #[must_use]
    pub fn new(issues: Vec<CheckIssue>, strict: bool) -> Self {
        let errors = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        let warnings = issues.len() - errors;
        Self {
            ok: errors == 0 && (!strict || warnings == 0),
            errors,
            warnings,
            issues,
        }
    }
}

fn error(location: &str, message: impl Into<String>) -> CheckIssue {
    CheckIssue {
        location: location.to_string(),
        message: message.into(),
        severity: Severity::Error,
    }
}

fn warning(location: &str, message: impl Into<String>) -> CheckIssue {
    CheckIssue {
        location: location.to_string(),
        message: message.into(),
        severity: Severity::Warning,
    }
}

/// Heading, phonetic transcription, and section labels must be present.
fn check_labels(profile: &Profile, issues: &mut Vec<CheckIssue>) {
    let fields = [
        ("name", profile.name.as_str()),
        ("phonetic", profile.phonetic.as_str()),
        ("part_of_speech", profile.part_of_speech.as_str()),
        ("description_label", profile.description_label.as_str()),
        ("similar_label", profile.similar_label.as_str()),
    ];
    for (location, value) in fields {
        if value.trim().is_empty() {
            issues.push(error(location, "value is empty"));
        }
    }

    let description: String = profile
        .description
        .iter()
        .map(crate::content::Span::text)
        .collect();
    if description.trim().is_empty() {
        issues.push(error("description", "description paragraph is empty"));
    }
}

/// Exactly five non-empty, unique tags.
fn check_tags(profile: &Profile, issues: &mut Vec<CheckIssue>) {
    if profile.similar.len() != EXPECTED_TAG_COUNT {
        issues.push(error(
            "similar",
            format!(
                "expected {EXPECTED_TAG_COUNT} tags, found {}",
                profile.similar.len()
            ),
        ));
    }

    for (index, tag) in profile.similar.iter().enumerate() {
        let location = format!("similar[{index}]");
        if tag.trim().is_empty() {
            issues.push(error(&location, "tag is empty"));
            continue;
        }
        if tag.trim() != tag {
            issues.push(warning(&location, "tag has surrounding whitespace"));
        }
        if profile.similar[..index].contains(tag) {
            issues.push(error(&location, format!("duplicate tag \"{tag}\"")));
        }
    }
}

/// Exactly two definitions, each with one designated emphasized term.
fn check_definitions(profile: &Profile, issues: &mut Vec<CheckIssue>) {
    if profile.definitions.len() != EXPECTED_DEFINITION_COUNT {
        issues.push(error(
            "definitions",
            format!(
                "expected {EXPECTED_DEFINITION_COUNT} definitions, found {}",
                profile.definitions.len()
            ),
        ));
    }

    for (index, definition) in profile.definitions.iter().enumerate() {
        let location = format!("definitions[{index}]");
        if definition.plain_text().trim().is_empty() {
            issues.push(error(&location, "definition is empty"));
            continue;
        }
        let terms = definition.strong_terms();
        if terms.is_empty() {
            issues.push(error(&location, "definition has no emphasized term"));
        } else if terms.len() > 1 {
            issues.push(warning(
                &location,
                "definition has more than one emphasized term",
            ));
        }
    }
}

/// Properties of the rendered document itself.
fn check_document(profile: &Profile, issues: &mut Vec<CheckIssue>) {
    let page = render_page(profile);

    if page != render_page(profile) {
        issues.push(error("document", "rendering is not idempotent"));
    }

    let heading = format!("<h1>{}</h1>", crate::render::escape::escape_text(&profile.name));
    if !page.contains(&heading) {
        issues.push(error("document", "heading does not render the name"));
    }

    let phonetic = format!(
        "<p class=\"phonetic\">{}</p>",
        crate::render::escape::escape_text(&profile.phonetic)
    );
    if !page.contains(&phonetic) {
        issues.push(error(
            "document",
            "phonetic transcription does not render",
        ));
    }

    let pill_count = page.matches("class=\"tag\"").count();
    if pill_count != profile.similar.len() {
        issues.push(error(
            "document",
            format!(
                "expected {} pill elements, found {pill_count}",
                profile.similar.len()
            ),
        ));
    }

    let mut last_position = 0;
    for (index, tag) in profile.similar.iter().enumerate() {
        let location = format!("similar[{index}]");
        let pill = tag_pill(tag, index);
        let occurrences = page.matches(&pill).count();
        match occurrences {
            0 => issues.push(error(&location, "tag does not render as a pill")),
            1 => {
                let position = page.find(&pill).unwrap_or(0);
                if position < last_position {
                    issues.push(error(&location, "tag renders out of listed order"));
                }
                last_position = position;
            }
            n => issues.push(error(&location, format!("tag renders {n} times"))),
        }
    }

    for (index, definition) in profile.definitions.iter().enumerate() {
        let location = format!("definitions[{index}]");
        for term in definition.strong_terms() {
            let markup = format!(
                "<strong>{}</strong>",
                crate::render::escape::escape_text(term)
            );
            if !page.contains(&markup) {
                issues.push(error(
                    &location,
                    format!("term \"{term}\" does not render emphasized"),
                ));
            }
        }
    }

    if page.matches("class=\"description\"").count() != 1 {
        issues.push(error(
            "document",
            "description paragraph does not render exactly once",
        ));
    }
}

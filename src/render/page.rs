//! Profile page assembly.
//!
//! Builds the complete standalone HTML document from a [`Profile`]: head
//! with embedded stylesheet, then masthead, definitions, description, and
//! similar-tags sections. Pure string assembly with no I/O, clock, or
//! randomness, so rendering the same profile twice yields byte-identical
//! output.

use crate::content::{Profile, Span};
use crate::render::escape::{escape_attr, escape_text, slugify_tag};
use crate::render::style::stylesheet;

/// Render the complete profile page as an HTML5 document.
#[must_use]
pub fn render_page(profile: &Profile) -> String {
    let mut lines = Vec::new();

    lines.push("<!DOCTYPE html>".to_string());
    lines.push("<html lang=\"en\">".to_string());
    render_head(&mut lines, profile);
    lines.push("<body>".to_string());
    lines.push("<main class=\"entry\">".to_string());

    render_masthead(&mut lines, profile);
    render_definitions(&mut lines, profile);
    render_description(&mut lines, profile);
    render_similar(&mut lines, profile);

    lines.push("</main>".to_string());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());

    let mut page = lines.join("\n");
    page.push('\n');
    page
}

/// One pill element for a similar tag.
///
/// The tag's own value provides the pill's stable identity via
/// `data-term`; the index only backs the slug fallback for degenerate
/// values.
#[must_use]
pub fn tag_pill(tag: &str, index: usize) -> String {
    format!(
        "<span class=\"tag\" data-term=\"{}\">{}</span>",
        escape_attr(&slugify_tag(tag, index)),
        escape_text(tag)
    )
}

/// Document head: charset, viewport, title, embedded stylesheet.
fn render_head(lines: &mut Vec<String>, profile: &Profile) {
    lines.push("<head>".to_string());
    lines.push("<meta charset=\"utf-8\">".to_string());
    lines.push(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
    );
    lines.push(format!("<title>{}</title>", escape_text(&profile.name)));
    lines.push("<style>".to_string());
    lines.push(stylesheet());
    lines.push("</style>".to_string());
    lines.push("</head>".to_string());
}

/// Name heading and phonetic transcription.
fn render_masthead(lines: &mut Vec<String>, profile: &Profile) {
    lines.push("<section class=\"masthead\">".to_string());
    lines.push(format!("<h1>{}</h1>", escape_text(&profile.name)));
    lines.push(format!(
        "<p class=\"phonetic\">{}</p>",
        escape_text(&profile.phonetic)
    ));
    lines.push("</section>".to_string());
}

/// Numbered definition entries under the part-of-speech label.
fn render_definitions(lines: &mut Vec<String>, profile: &Profile) {
    lines.push("<section>".to_string());
    lines.push(format!(
        "<p class=\"label\">{}</p>",
        escape_text(&profile.part_of_speech)
    ));
    lines.push("<ol class=\"definitions\">".to_string());
    for definition in &profile.definitions {
        lines.push(format!("<li>{}</li>", render_spans(&definition.spans)));
    }
    lines.push("</ol>".to_string());
    lines.push("</section>".to_string());
}

/// Description paragraph under its label.
fn render_description(lines: &mut Vec<String>, profile: &Profile) {
    lines.push("<section>".to_string());
    lines.push(format!(
        "<p class=\"label\">{}</p>",
        escape_text(&profile.description_label)
    ));
    lines.push(format!(
        "<p class=\"description\">{}</p>",
        render_spans(&profile.description)
    ));
    lines.push("</section>".to_string());
}

/// Similar tags as a wrapped row of pills, one per tag, in listed order.
fn render_similar(lines: &mut Vec<String>, profile: &Profile) {
    lines.push("<section>".to_string());
    lines.push(format!(
        "<p class=\"label\">{}</p>",
        escape_text(&profile.similar_label)
    ));
    lines.push("<div class=\"tags\">".to_string());
    for (index, tag) in profile.similar.iter().enumerate() {
        lines.push(tag_pill(tag, index));
    }
    lines.push("</div>".to_string());
    lines.push("</section>".to_string());
}

/// Inline markup for a span sequence.
fn render_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => escape_text(text),
            Span::Strong(text) => format!("<strong>{}</strong>", escape_text(text)),
        })
        .collect()
}

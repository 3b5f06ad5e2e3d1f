//! The page stylesheet.
//!
//! A blue-on-white monochrome design: centered reading column, dictionary
//! typography, pill-shaped tags. The page is self-contained, so the
//! stylesheet is embedded into the document head rather than shipped as a
//! separate asset. One breakpoint at 640px scales type and spacing up for
//! wider viewports.

/// Ink color used for all text and borders.
pub const INK: &str = "#0525e9";

/// Page background color.
pub const PAPER: &str = "#ffffff";

/// Viewport width at which the wide-screen type scale applies.
pub const BREAKPOINT_PX: u32 = 640;

const STYLESHEET_TEMPLATE: &str = "\
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}
body {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  width: 100%;
  min-height: 100vh;
  background: {paper};
  color: {ink};
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  padding: 0 0.75rem;
  user-select: none;
  -webkit-user-select: none;
}
.entry {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  justify-content: center;
  max-width: 42rem;
  width: 100%;
  padding: 0 1.5rem;
}
.entry > section + section {
  margin-top: 1.5rem;
}
.entry h1 {
  font-size: 2.25rem;
  font-weight: 600;
  letter-spacing: -0.025em;
}
.phonetic {
  margin-top: 0.25rem;
  font-size: 17px;
}
.label {
  font-size: 16px;
}
.definitions {
  list-style: decimal inside;
  margin-top: 0.5rem;
}
.definitions li {
  font-size: 16px;
  line-height: 1.625;
}
.definitions li + li {
  margin-top: 0.75rem;
}
.description {
  margin-top: 0.5rem;
  font-size: 16px;
  line-height: 1.625;
}
strong {
  font-weight: 600;
}
.tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 0.5rem;
}
.tag {
  border: 1px solid {ink};
  border-radius: 9999px;
  padding: 0.25rem 0.75rem;
  font-size: 12px;
}
@media (min-width: {breakpoint}px) {
  body {
    padding: 2.5rem;
  }
  .entry {
    padding: 0;
  }
  .entry h1 {
    font-size: 3rem;
  }
  .phonetic {
    font-size: 20px;
  }
  .label {
    font-size: 18px;
  }
  .definitions li,
  .description {
    font-size: 19px;
  }
  .tags {
    gap: 0.75rem;
  }
  .tag {
    font-size: 14px;
  }
}";

/// The complete page stylesheet with the palette filled in.
#[must_use]
pub fn stylesheet() -> String {
    STYLESHEET_TEMPLATE
        .replace("{ink}", INK)
        .replace("{paper}", PAPER)
        .replace("{breakpoint}", &BREAKPOINT_PX.to_string())
}

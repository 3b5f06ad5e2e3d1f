//! HTML rendering for the profile page.
//!
//! [`page`] assembles the document, [`style`] holds the embedded
//! stylesheet, and [`escape`] provides the escaping and slugification
//! helpers everything interpolated into markup goes through.

pub mod escape;
pub mod page;
pub mod style;

pub use page::render_page;

//! Build command handler.
//!
//! Renders the page and writes `index.html` into the output directory.

use std::fs;

use crate::cli::args::BuildArgs;
use crate::content::Profile;
use crate::error::SiteError;
use crate::render::render_page;

/// Execute `build`.
///
/// # Errors
///
/// Returns an I/O error if the output directory cannot be created or the
/// file cannot be written.
pub fn run(args: &BuildArgs) -> Result<(), SiteError> {
    let profile = Profile::aadarsh();
    let html = render_page(&profile);

    fs::create_dir_all(&args.out_dir)?;
    let out_file = args.out_dir.join("index.html");
    fs::write(&out_file, &html)?;

    tracing::info!(file = %out_file.display(), bytes = html.len(), "page written");
    eprintln!("Wrote {} ({} bytes)", out_file.display(), html.len());

    Ok(())
}

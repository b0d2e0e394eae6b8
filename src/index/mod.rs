//! Generation of the in-document index.
//!
//! The index lives between two sentinel comments. Regenerating first strips
//! any existing region so repeated runs never stack indices.

mod clean;
mod render;

pub use clean::clean;
pub use render::render;

use crate::error::Result;
use crate::parser::parse_headers;

/// Line marker opening the generated region.
pub const BEGIN_MARKER: &str = "<!-- INDEX BEGIN -->";

/// Line marker closing the generated region.
pub const END_MARKER: &str = "<!-- INDEX END -->";

/// Build a fresh index for a document and prepend it to the cleaned body.
///
/// # Examples
///
/// ```
/// let out = mdindex::generate("# Title\n\nSome text\n").unwrap();
/// assert_eq!(
///     out,
///     "<!-- INDEX BEGIN -->\n\n- [Title](#title)\n\n<!-- INDEX END -->\n\n# Title\n\nSome text\n"
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::Generate`](crate::Error::Generate) if the index cannot be
/// rendered.
pub fn generate(document: &str) -> Result<String> {
    let body = clean(document);
    let forest = parse_headers(&body);
    log::debug!("found {} headings", forest.len());

    let mut out = render(&forest)?;
    out.push_str(&body);
    Ok(out)
}

/// Whether the document already carries the index [`generate`] would produce.
pub fn is_up_to_date(document: &str) -> Result<bool> {
    Ok(generate(document)? == document)
}

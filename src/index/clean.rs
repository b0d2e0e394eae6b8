//! Removal of a previously generated index region.

use super::{BEGIN_MARKER, END_MARKER};

/// Where the cleaner stands relative to an index region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    /// Outside any region, lines are kept
    Passing,
    /// Between the begin marker and the end marker, lines are dropped
    Suppressing,
    /// Directly after the end marker, a single blank line is dropped
    AfterRegion,
}

/// Strip any generated index region from a document.
///
/// A line containing the begin marker starts suppression, which lasts up to
/// and including the next line containing the end marker. The blank line the
/// renderer places after the end marker is dropped as well. An unterminated
/// region swallows the rest of the document. Documents without a begin
/// marker come back unchanged.
///
/// # Examples
///
/// ```
/// use mdindex::clean;
///
/// let doc = "<!-- INDEX BEGIN -->\n\n- [A](#a)\n\n<!-- INDEX END -->\n\n# A\n";
/// assert_eq!(clean(doc), "# A\n");
/// ```
pub fn clean(document: &str) -> String {
    let mut state = Region::Passing;
    let mut kept = Vec::new();

    for line in document.split('\n') {
        state = match state {
            Region::Suppressing if line.contains(END_MARKER) => Region::AfterRegion,
            Region::Suppressing => Region::Suppressing,
            Region::AfterRegion if line.is_empty() => Region::Passing,
            Region::Passing | Region::AfterRegion if line.contains(BEGIN_MARKER) => {
                Region::Suppressing
            }
            Region::Passing | Region::AfterRegion => {
                kept.push(line);
                Region::Passing
            }
        };
    }

    if state == Region::Suppressing {
        log::debug!("unterminated index region, dropped to end of document");
    }

    kept.join("\n")
}

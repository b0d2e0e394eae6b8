//! Rendering of the header forest as a markdown link list.

use std::fmt::{self, Write};

use super::{BEGIN_MARKER, END_MARKER};
use crate::error::Result;
use crate::parser::{Forest, HeaderNode};

/// Render the index block for a forest, markers included.
///
/// Each heading becomes a `- [content](#slug)` line indented by one tab per
/// level below 1. The block ends with a blank line so the document body can
/// follow directly.
pub fn render(forest: &Forest) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "{BEGIN_MARKER}")?;
    writeln!(out)?;
    for root in forest.roots() {
        write_node(&mut out, root)?;
    }
    writeln!(out)?;
    writeln!(out, "{END_MARKER}")?;
    writeln!(out)?;

    Ok(out)
}

fn write_node(out: &mut impl Write, node: &HeaderNode) -> fmt::Result {
    let indent = "\t".repeat(node.level.saturating_sub(1));
    writeln!(out, "{indent}- [{}](#{})", node.content, node.slug())?;

    for child in &node.children {
        write_node(out, child)?;
    }
    Ok(())
}

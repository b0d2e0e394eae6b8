//! Markdown heading extraction.
//!
//! This module scans a document line by line, skips fenced code blocks, and
//! collects ATX-style headings into a [`Forest`] that preserves their nesting.

pub mod slug;
mod tree;
pub mod utils;

pub use slug::slugify;
pub use tree::{Forest, HeaderNode, Iter};

/// Whether the scanner is currently inside a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fence {
    Outside,
    Inside,
}

impl Fence {
    fn toggle(self) -> Self {
        match self {
            Fence::Outside => Fence::Inside,
            Fence::Inside => Fence::Outside,
        }
    }
}

/// Parse markdown content into a forest of headings.
///
/// Lines inside fenced code blocks are never treated as headings. The line
/// that closes a fence is scanned like any other line.
///
/// # Examples
///
/// ```
/// use mdindex::parse_headers;
///
/// let forest = parse_headers("# Intro\n## Setup\n```\n# not a heading\n```\n# Usage");
/// assert_eq!(forest.roots().len(), 2);
/// assert_eq!(forest.len(), 3);
/// ```
pub fn parse_headers(content: &str) -> Forest {
    let mut forest = Forest::new();
    let mut fence = Fence::Outside;

    for (index, line) in content.split('\n').enumerate() {
        if utils::contains_fence(line) {
            fence = fence.toggle();
        }
        if fence == Fence::Inside {
            continue;
        }

        if let Some((level, text)) = utils::parse_header_line(line) {
            log::debug!("line {}: level {} heading {:?}", index + 1, level, text);
            forest.insert(HeaderNode::new(level, text));
        }
    }

    forest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(forest: &Forest) -> Vec<(usize, &str)> {
        forest
            .iter()
            .map(|n| (n.level, n.content.as_str()))
            .collect()
    }

    #[test]
    fn test_parse_headers() {
        let md = r#"# Title
Some content

## Section 1
More content

### Subsection
Details

## Section 2
End"#;

        let forest = parse_headers(md);
        assert_eq!(
            flatten(&forest),
            vec![
                (1, "Title"),
                (2, "Section 1"),
                (3, "Subsection"),
                (2, "Section 2")
            ]
        );
        assert_eq!(forest.roots().len(), 1);
        assert_eq!(forest.roots()[0].children.len(), 2);
    }

    #[test]
    fn test_headings_inside_fences_are_ignored() {
        let md = r#"# Real

```bash
# a shell comment
## another
```

## Also Real

```
# hidden
"#;

        let forest = parse_headers(md);
        assert_eq!(flatten(&forest), vec![(1, "Real"), (2, "Also Real")]);
    }

    #[test]
    fn test_fence_marker_anywhere_in_line_toggles() {
        let md = "text ```\n# hidden\n``` end\n# Visible";
        let forest = parse_headers(md);
        assert_eq!(flatten(&forest), vec![(1, "Visible")]);
    }

    #[test]
    fn test_closing_fence_line_is_scanned() {
        // The closing fence switches back to normal scanning on that same line
        let md = "```\n# hidden\n#``` fence heading\n";
        let forest = parse_headers(md);
        assert_eq!(flatten(&forest), vec![(1, "`` fence heading")]);
    }

    #[test]
    fn test_non_heading_lines_are_skipped() {
        let md = "#\n plain\n #indented\n#Tight\n";
        let forest = parse_headers(md);
        assert_eq!(flatten(&forest), vec![(1, "ight")]);
    }

    #[test]
    fn test_content_is_not_trimmed() {
        let forest = parse_headers("#  Spaced  \r\n");
        assert_eq!(flatten(&forest), vec![(1, " Spaced  \r")]);
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_headers("").is_empty());
    }
}

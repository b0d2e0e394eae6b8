//! Header forest built from a flat, level-tagged sequence of headings.

use serde::Serialize;

use super::slug::slugify;

/// A heading together with the headings nested under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderNode {
    /// Number of leading `#` marks (1 = top level)
    pub level: usize,
    /// Raw heading text after the marks and separator
    pub content: String,
    /// Nested headings in document order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HeaderNode>,
}

impl HeaderNode {
    pub fn new(level: usize, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
            children: Vec::new(),
        }
    }

    /// Anchor slug used to link to this heading.
    pub fn slug(&self) -> String {
        slugify(&self.content)
    }

    /// Nest a later heading somewhere under this one.
    ///
    /// The heading becomes a new last child unless it is strictly deeper than
    /// the current last child, in which case it is handed down to that child.
    pub fn add(&mut self, child: HeaderNode) {
        insert_into(&mut self.children, child);
    }
}

fn insert_into(siblings: &mut Vec<HeaderNode>, header: HeaderNode) {
    match siblings.last_mut() {
        Some(last) if header.level > last.level => last.add(header),
        _ => siblings.push(header),
    }
}

/// Ordered top-level headings of a document.
///
/// The forest behaves like the child list of a virtual level-0 root, so a
/// heading that is not deeper than the last root starts a new root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Forest {
    roots: Vec<HeaderNode>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the next heading in document order.
    pub fn insert(&mut self, header: HeaderNode) {
        insert_into(&mut self.roots, header);
    }

    pub fn roots(&self) -> &[HeaderNode] {
        &self.roots
    }

    /// Depth-first, pre-order walk. Yields headings in source order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![self.roots.iter()],
        }
    }

    /// Total number of headings, nested ones included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a HeaderNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a [`Forest`].
pub struct Iter<'a> {
    stack: Vec<std::slice::Iter<'a, HeaderNode>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a HeaderNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(node) => {
                    self.stack.push(node.children.iter());
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest_of(headers: &[(usize, &str)]) -> Forest {
        let mut forest = Forest::new();
        for (level, content) in headers {
            forest.insert(HeaderNode::new(*level, *content));
        }
        forest
    }

    fn titles(nodes: &[HeaderNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.content.as_str()).collect()
    }

    #[test]
    fn test_nested_outline() {
        let forest = forest_of(&[(1, "A"), (2, "B"), (3, "C"), (2, "D")]);

        assert_eq!(titles(forest.roots()), vec!["A"]);
        let a = &forest.roots()[0];
        assert_eq!(titles(&a.children), vec!["B", "D"]);
        assert_eq!(titles(&a.children[0].children), vec!["C"]);
        assert!(a.children[1].children.is_empty());
    }

    #[test]
    fn test_shallower_heading_starts_new_root() {
        let forest = forest_of(&[(2, "X"), (1, "Y")]);
        assert_eq!(titles(forest.roots()), vec!["X", "Y"]);
    }

    #[test]
    fn test_equal_level_roots_are_siblings() {
        let forest = forest_of(&[(1, "One"), (1, "Two"), (1, "Three")]);
        assert_eq!(titles(forest.roots()), vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_skipped_levels_still_nest() {
        // H1 then H3: the H3 hangs directly under the H1
        let forest = forest_of(&[(1, "Top"), (3, "Deep"), (2, "Mid")]);
        let top = &forest.roots()[0];
        assert_eq!(titles(&top.children), vec!["Deep", "Mid"]);
    }

    #[test]
    fn test_deeper_than_last_child_recurses() {
        let forest = forest_of(&[(1, "A"), (3, "B"), (4, "C"), (2, "D"), (3, "E")]);
        let a = &forest.roots()[0];
        assert_eq!(titles(&a.children), vec!["B", "D"]);
        assert_eq!(titles(&a.children[0].children), vec!["C"]);
        assert_eq!(titles(&a.children[1].children), vec!["E"]);
    }

    #[test]
    fn test_iter_preserves_document_order() {
        let input = [(2, "a"), (3, "b"), (1, "c"), (4, "d"), (2, "e"), (2, "f")];
        let forest = forest_of(&input);

        let walked: Vec<_> = forest.iter().map(|n| (n.level, n.content.as_str())).collect();
        assert_eq!(walked, input.to_vec());
        assert_eq!(forest.len(), input.len());
    }

    #[test]
    fn test_empty_forest() {
        let forest = Forest::new();
        assert!(forest.is_empty());
        assert_eq!(forest.len(), 0);
        assert_eq!(forest.iter().next(), None);
    }

    #[test]
    fn test_children_are_deeper_than_parent() {
        let forest = forest_of(&[(3, "a"), (1, "b"), (2, "c"), (5, "d"), (4, "e"), (2, "f")]);

        fn check(node: &HeaderNode) {
            for child in &node.children {
                assert!(child.level > node.level);
                check(child);
            }
        }
        forest.roots().iter().for_each(check);
    }

    #[test]
    fn test_serializes_as_nested_array() {
        let forest = forest_of(&[(1, "Intro"), (2, "Setup")]);
        let json = serde_json::to_value(&forest).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {
                    "level": 1,
                    "content": "Intro",
                    "children": [{ "level": 2, "content": "Setup" }]
                }
            ])
        );
    }
}

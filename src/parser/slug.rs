//! Anchor slugs for heading links.

/// Generate the anchor slug for a heading.
///
/// Lowercases the text, turns every space into a hyphen and then drops
/// anything that is not an ASCII lowercase letter, digit or hyphen. Runs of
/// spaces are not collapsed and identical headings produce identical slugs.
///
/// # Examples
///
/// ```
/// use mdindex::parser::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("C++ Notes"), "c-notes");
/// ```
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

//! Remove the common leading whitespace from every line of a text block.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Lines that are nothing but spaces/tabs get blanked before the margin
    // is computed, so stray indentation on "empty" lines cannot widen it.
    static ref WHITESPACE_ONLY: Regex = Regex::new(r"(?m)^[ \t]+$").unwrap();
    // Captures the space/tab prefix of every line that has real content.
    static ref LEADING_WHITESPACE: Regex = Regex::new(r"(?m)^([ \t]*)[^ \t\n]").unwrap();
}

/// Strip the longest space/tab prefix shared by all content lines of `text`.
///
/// Whitespace-only lines are normalized to empty lines and do not count
/// toward the margin. Tabs and spaces are compared literally: a tab is never
/// treated as equivalent to any number of spaces, so a block mixing the two
/// styles of indentation has no common margin and comes back unchanged.
pub fn dedent(text: &str) -> String {
    let text = WHITESPACE_ONLY.replace_all(text, "");

    let mut margin: Option<&str> = None;
    for cap in LEADING_WHITESPACE.captures_iter(&text) {
        let indent = cap.get(1).map_or("", |m| m.as_str());
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }

    match margin {
        Some(margin) if !margin.is_empty() => text
            .split('\n')
            .map(|line| line.strip_prefix(margin).unwrap_or(line))
            .collect::<Vec<&str>>()
            .join("\n"),
        _ => text.into_owned(),
    }
}

/// Longest shared prefix of two space/tab strings.
fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

//! Word capitalization with whitespace-split semantics.

/// Capitalize every whitespace-separated word in `s`.
///
/// Words are produced by splitting on runs of Unicode whitespace, so leading
/// and trailing whitespace disappears and interior runs collapse to a single
/// space. Each word gets its first character uppercased and the remainder
/// lowercased. Characters without case mappings (CJK, punctuation) pass
/// through unchanged, which means a Latin word embedded in a CJK run is only
/// capitalized when a space precedes it.
pub fn capwords(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Uppercase the first character of `word` and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            // to_uppercase/to_lowercase may expand to multiple chars
            // (e.g. 'ß' -> "SS"), hence the flat_map.
            let mut out: String = first.to_uppercase().collect();
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_sentence() {
        assert_eq!(
            capwords("I am a Python beginner."),
            "I Am A Python Beginner."
        );
    }

    #[test]
    fn test_all_caps_lowered() {
        assert_eq!(
            capwords("THIS IS MY FIRST PYTHON CODE!"),
            "This Is My First Python Code!"
        );
    }

    #[test]
    fn test_caseless_script_unchanged() {
        assert_eq!(capwords("我是一名程序员。"), "我是一名程序员。");
    }

    #[test]
    fn test_mixed_script_with_space() {
        // The space makes "python..." a word of its own, so it gets a capital.
        assert_eq!(
            capwords("我是一名初学 python的程序员！"),
            "我是一名初学 Python的程序员！"
        );
    }

    #[test]
    fn test_mixed_script_without_space() {
        // No space, so the Latin run is mid-word and stays lowercase.
        assert_eq!(
            capwords("我是一名初学python的程序员！"),
            "我是一名初学python的程序员！"
        );
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(capwords("  hello \t world  "), "Hello World");
    }

    #[test]
    fn test_empty() {
        assert_eq!(capwords(""), "");
    }
}

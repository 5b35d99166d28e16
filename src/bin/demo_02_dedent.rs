//! Demo 2: normalizing the left margin of indented text blocks.
//!
//! Run with: cargo run --bin demo_02_dedent

use text_recipes::dedent;
use text_recipes::samples::SAMPLE_TEXT;

// Makes each remaining space visible in the before/after printout.
const SPACE_MARK: char = '\u{2fd}';

fn main() {
    println!("=== Dedent ===\n");

    println!("Dedented:");
    println!("{}", dedent(SAMPLE_TEXT));

    // The margin here is a single space: the shortest prefix shared by all
    // three content lines.
    let whitespace_sample = "
 Line one.
   Line two.
 Line three.
";

    println!("Before Dedent:");
    println!("{}", whitespace_sample.replace(' ', &SPACE_MARK.to_string()));
    println!("After Dedent:");
    println!(
        "{}",
        dedent(whitespace_sample).replace(' ', &SPACE_MARK.to_string())
    );
}

#[cfg(test)]
mod tests {
    use text_recipes::dedent;

    #[test]
    fn test_single_space_margin() {
        let sample = "\n Line one.\n   Line two.\n Line three.\n";
        assert_eq!(dedent(sample), "\nLine one.\n  Line two.\nLine three.\n");
    }
}

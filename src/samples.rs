//! Sample text shared between demos.

/// A block with a uniform four-space indent, the way a multi-line literal
/// tends to look when embedded in indented source code.
pub const SAMPLE_TEXT: &str = "
    The dedent routine can be used to normalize the left margin of
    text blocks embedded in source code.  It removes the leading
    whitespace that every line of a block has in common, which is
    useful when preparing indented literals for display.
    ";

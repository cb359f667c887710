//! List item body layout.
//!
//! A list item's marker (`* `, `12. `, `:   `) occupies the first columns of
//! its first line. Every other line of the item must be indented to line up
//! under the item text, except fenced code, which needs a uniform indent to
//! stay a code block in downstream renderers.

/// Code fence marker.
pub const FENCE: &str = "```";

/// Indent applied to fenced code inside a list item, per nesting level.
pub const CODE_INDENT: &str = "    ";

/// Whether a rendered block is a fenced code block.
///
/// Checks the block as rendered, before any trimming: it must open with the
/// fence and close with the fence plus a blank-line terminator.
pub fn is_fenced_block(block: &str) -> bool {
    block.starts_with(FENCE) && block.ends_with("```\n\n")
}

/// Lay out the rendered blocks of one list item.
///
/// The first line of the first block is left as is, since the caller puts
/// the marker in front of it. Every following line is indented by
/// `prefix_width` spaces. Fenced code blocks are instead preceded by a blank
/// line and indented by [`CODE_INDENT`] on every line. Blocks are trimmed of
/// trailing whitespace and joined with single newlines. Empty lines are
/// never indented.
///
/// # Examples
///
/// ```
/// use rd2md::markdown::format_item;
///
/// let blocks = vec!["first\nsecond\n\n".to_string(), "* nested\n\n".to_string()];
/// assert_eq!(format_item(&blocks, 2), "first\n  second\n  * nested");
/// ```
pub fn format_item(blocks: &[String], prefix_width: usize) -> String {
    let indent = " ".repeat(prefix_width);
    let mut result = String::new();

    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            result.push('\n');
        }

        let fenced = is_fenced_block(block);
        if fenced {
            result.push('\n');
        }

        for (line_no, line) in block.trim_end().lines().enumerate() {
            if line_no > 0 {
                result.push('\n');
            }
            if line.is_empty() {
                continue;
            }
            if fenced {
                result.push_str(CODE_INDENT);
            } else if index > 0 || line_no > 0 {
                result.push_str(&indent);
            }
            result.push_str(line);
        }
    }

    result
}

//! Pure text escaping utilities.
//!
//! These functions turn literal RD text into text that is safe to place
//! inline in Markdown output.

/// Escape the characters that would otherwise be read as markup.
///
/// Replaces `<`, `>`, `&` and `` ` `` with their HTML entities. Everything
/// else is left alone. Not idempotent: escaping `&lt;` again yields
/// `&amp;lt;`, so callers escape each literal exactly once.
///
/// # Examples
///
/// ```
/// use rd2md::markdown::escape_metachars;
///
/// assert_eq!(escape_metachars("a < b"), "a &lt; b");
/// assert_eq!(escape_metachars("`x` & y"), "&#96;x&#96; &amp; y");
/// ```
pub fn escape_metachars(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);

    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '`' => result.push_str("&#96;"),
            _ => result.push(c),
        }
    }

    result
}

/// Unwrap hard line breaks inside a literal.
///
/// A break between two ASCII characters (or with ASCII on either side)
/// becomes a single space so Latin words stay separated. A break between two
/// non-ASCII characters is dropped entirely, since scripts such as Japanese
/// do not put spaces between words. A break at the very start or end of the
/// text has no neighbour on that side, which counts as non-ASCII.
///
/// `\r\n` counts as one break. Neighbours are the nearest characters that
/// are not themselves line terminators, so runs of breaks are classified by
/// the text around the whole run.
///
/// # Examples
///
/// ```
/// use rd2md::markdown::merge_lines;
///
/// assert_eq!(merge_lines("hello\nworld"), "hello world");
/// assert_eq!(merge_lines("日本\n語"), "日本語");
/// ```
pub fn merge_lines(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c != '\n' {
            result.push(c);
            continue;
        }

        let before = chars[..i].iter().rev().find(|&&p| !is_line_end(p));
        let after = chars[i + 1..].iter().find(|&&n| !is_line_end(n));
        let ascii_side = before.is_some_and(char::is_ascii) || after.is_some_and(char::is_ascii);

        // Drop the '\r' of a CRLF pair before deciding on a separator
        if result.ends_with('\r') {
            result.pop();
        }
        if ascii_side {
            result.push(' ');
        }
    }

    result
}

fn is_line_end(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Render a literal text node: unwrap lines, strip stray line terminators,
/// then escape.
pub fn render_literal(text: &str) -> String {
    let merged = merge_lines(text);
    let stripped: String = merged.chars().filter(|&c| c != '\r' && c != '\n').collect();
    escape_metachars(&stripped)
}

/// Calculate the backtick fence length needed for a code block.
///
/// Returns the smallest number of backticks (at least 3) that doesn't
/// appear as a run in the content.
///
/// # Examples
///
/// ```
/// use rd2md::markdown::calculate_fence_length;
///
/// assert_eq!(calculate_fence_length("puts 1"), 3);
/// assert_eq!(calculate_fence_length("```ruby\nputs 1\n```"), 4);
/// ```
pub fn calculate_fence_length(content: &str) -> usize {
    let mut max_run = 0;
    let mut current_run = 0;

    for c in content.chars() {
        if c == '`' {
            current_run += 1;
            max_run = max_run.max(current_run);
        } else {
            current_run = 0;
        }
    }

    max_run.max(2) + 1
}

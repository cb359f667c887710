//! Language guessing for verbatim blocks.
//!
//! RD verbatim blocks carry no language, but Markdown fences can. The
//! heuristics below are checked against each line in order; the first line
//! that matches any heuristic decides the tag.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Shebang, shell comment or interactive prompt (`#!/bin/sh`, `# setup`,
/// `$ make`, `% ruby -v`).
static SHELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:#(?:!|\s)|[$%]\s+\S)").unwrap());

/// LaTeX preamble.
static LATEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\\documentclass\b").unwrap());

/// Ruby-looking calls and namespaces (`Foo::Bar`, `obj.meth(`, `require 'x'`).
static RUBY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:\b[A-Z]\w*::[A-Za-z_]|\b\w+\.\w+[!?]?\(|^\s*(?:require|require_relative)\s*\(?\s*['"]|^\s*(?:def|class|module)\s+[A-Za-z_])"#,
    )
    .unwrap()
});

/// Heuristics in priority order, paired with the tag they produce.
static HEURISTICS: LazyLock<[(&'static Regex, &'static str); 3]> = LazyLock::new(|| {
    [
        (&*SHELL_RE, "sh"),
        (&*LATEX_RE, "latex"),
        (&*RUBY_RE, "ruby"),
    ]
});

/// Guess a fence language tag from the lines of a verbatim block.
///
/// Returns `None` when no heuristic matches, which yields an untagged fence.
///
/// # Examples
///
/// ```
/// use rd2md::markdown::sniff_language;
///
/// assert_eq!(sniff_language(["$ gem install rd2md"]), Some("sh"));
/// assert_eq!(sniff_language(["plain text"]), None);
/// ```
pub fn sniff_language<'a, I>(lines: I) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    for line in lines {
        for &(pattern, tag) in HEURISTICS.iter() {
            if pattern.is_match(line) {
                tracing::trace!(tag, line, "sniffed verbatim language");
                return Some(tag);
            }
        }
    }
    None
}

//! Cross reference resolution.
//!
//! A reference either names a URL, an element of the current document, or an
//! element of another document. Internal references that cannot be resolved
//! degrade to their plain content.

use crate::model::{AnchorIndex, Label};

use super::escape::escape_metachars;

/// Prefix the parser puts on labels of function-style method entries.
const FUNCTION_LABEL_PREFIX: &str = "function#";

/// Render a reference given its label and already-rendered content.
///
/// # Examples
///
/// ```
/// use rd2md::markdown::resolve_reference;
/// use rd2md::model::{AnchorIndex, Label};
///
/// let anchors = AnchorIndex::new();
/// let url = Label::Url("https://ruby-lang.org".to_string());
///
/// assert_eq!(
///     resolve_reference(&url, "Ruby", &anchors),
///     "[Ruby](https://ruby-lang.org)"
/// );
/// assert_eq!(
///     resolve_reference(&Label::internal("Nowhere"), "Nowhere", &anchors),
///     "Nowhere"
/// );
/// ```
pub fn resolve_reference(label: &Label, content: &str, anchors: &AnchorIndex) -> String {
    match label {
        Label::Url(url) => reference_to_url(url, content),
        Label::RdLabel {
            element_label,
            filename: Some(filename),
        } => reference_to_file(filename, element_label, content, anchors),
        Label::RdLabel {
            element_label,
            filename: None,
        } => reference_to_element(element_label, content, anchors),
    }
}

fn reference_to_url(url: &str, content: &str) -> String {
    // `((<URL:...>))` with no explicit text renders its own source form
    if content == escape_metachars(&format!("<URL:{url}>")) {
        url.to_string()
    } else {
        format!("[{content}]({url})")
    }
}

fn reference_to_file(
    filename: &str,
    element_label: &str,
    content: &str,
    anchors: &AnchorIndex,
) -> String {
    match anchors.lookup_external(filename, element_label) {
        Some(anchor) => format!("[{content}]({filename}#{anchor})"),
        None => format!("[{content}]({filename})"),
    }
}

fn reference_to_element(element_label: &str, content: &str, anchors: &AnchorIndex) -> String {
    match anchors.lookup(element_label) {
        Some(anchor) => {
            let content = content.strip_prefix(FUNCTION_LABEL_PREFIX).unwrap_or(content);
            format!("[{content}](#{anchor})")
        }
        None => {
            tracing::debug!(label = element_label, "unresolved reference");
            content.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnchorIndexBuilder, NodeId};

    fn anchors() -> AnchorIndex {
        let mut builder = AnchorIndexBuilder::new();
        builder
            .add_internal(NodeId(1), "Usage".into(), "label-0".into())
            .add_internal(NodeId(2), "function#puts".into(), "label-1".into())
            .add_external("api.rd".into(), "Foo".into(), "label-7".into());
        builder.build()
    }

    #[test]
    fn test_url_autolink() {
        let label = Label::Url("http://example.com/?a=1&b=2".into());
        let content = "&lt;URL:http://example.com/?a=1&amp;b=2&gt;";
        assert_eq!(
            resolve_reference(&label, content, &anchors()),
            "http://example.com/?a=1&b=2"
        );
    }

    #[test]
    fn test_url_with_text() {
        let label = Label::Url("http://example.com".into());
        assert_eq!(
            resolve_reference(&label, "example", &anchors()),
            "[example](http://example.com)"
        );
    }

    #[test]
    fn test_url_with_unescaped_source_form_is_a_link() {
        let label = Label::Url("http://example.com".into());
        assert_eq!(
            resolve_reference(&label, "<URL:http://example.com>", &anchors()),
            "[<URL:http://example.com>](http://example.com)"
        );
    }

    #[test]
    fn test_other_file_with_anchor() {
        let label = Label::external("api.rd", "Foo");
        assert_eq!(
            resolve_reference(&label, "Foo", &anchors()),
            "[Foo](api.rd#label-7)"
        );
    }

    #[test]
    fn test_other_file_without_anchor() {
        let label = Label::external("api.rd", "Bar");
        assert_eq!(resolve_reference(&label, "Bar", &anchors()), "[Bar](api.rd)");
    }

    #[test]
    fn test_internal_resolved() {
        assert_eq!(
            resolve_reference(&Label::internal("Usage"), "Usage", &anchors()),
            "[Usage](#label-0)"
        );
    }

    #[test]
    fn test_internal_strips_function_prefix() {
        assert_eq!(
            resolve_reference(&Label::internal("function#puts"), "function#puts", &anchors()),
            "[puts](#label-1)"
        );
    }

    #[test]
    fn test_internal_unresolved_is_plain() {
        assert_eq!(
            resolve_reference(&Label::internal("Missing"), "function#Missing", &anchors()),
            "function#Missing"
        );
    }
}

//! Allow-list HTML sanitizer for episode long descriptions.
//!
//! Long descriptions in the episode feed may carry limited HTML markup.
//! That markup is untrusted, so before it is injected into the page it is
//! parsed into a detached fragment, walked in document order, and rebuilt
//! against a fixed allow-list:
//!
//! - tags outside the allow-list are *unwrapped* (replaced by their children,
//!   order preserved), never executed
//! - event-handler attributes (`on*`) are always removed
//! - `a` keeps only `href`/`title`/`target`/`rel`, `span` keeps only `class`,
//!   every other retained tag keeps no attributes
//! - anchor `href` values must use an `http:`, `https:` or `mailto:` scheme,
//!   and every anchor is forced to `rel="noopener noreferrer"`
//!   `target="_blank"`
//!
//! Parsing uses html5ever, so malformed input goes through the same error
//! recovery a browser applies; nothing is fetched or executed as a side
//! effect. The function is total: any input produces a string, worst case an
//! empty one.

use html5ever::interface::Attribute;
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, QualName, local_name, namespace_url, ns, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Tags that survive sanitization. Everything else is unwrapped.
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "em", "i", "strong", "b", "a", "ul", "ol", "li", "code", "pre", "blockquote",
    "span",
];

/// Per-tag allowed attributes. Tags absent from this table keep nothing.
const ALLOWED_ATTRS: &[(&str, &[&str])] = &[
    ("a", &["href", "title", "target", "rel"]),
    ("span", &["class"]),
];

/// `href` scheme prefixes an anchor may use.
const ALLOWED_SCHEMES: &[&str] = &["http:", "https:", "mailto:"];

/// Immutable sanitization policy: tag allow-list plus per-tag attribute
/// allow-lists. A fresh value is cheap to construct; there is no process-wide
/// mutable state.
#[derive(Debug, Clone, Copy)]
pub struct Policy {
    tags: &'static [&'static str],
    attrs: &'static [(&'static str, &'static [&'static str])],
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            tags: ALLOWED_TAGS,
            attrs: ALLOWED_ATTRS,
        }
    }
}

/// Sanitize an untrusted HTML fragment with the default [`Policy`].
///
/// Never panics; empty input yields empty output.
pub fn sanitize(raw_html: &str) -> String {
    Policy::default().sanitize(raw_html)
}

impl Policy {
    /// Parse `raw_html` into a detached fragment, apply the allow/unwrap/strip
    /// policy in a single pre-order pass, and serialize the result.
    pub fn sanitize(&self, raw_html: &str) -> String {
        if raw_html.is_empty() {
            return String::new();
        }

        // Fragment parsing with a <div> context element, as a browser would
        // do for `template.innerHTML`. The parser never executes scripts or
        // loads external resources.
        let dom = parse_fragment(
            RcDom::default(),
            ParseOpts::default(),
            QualName::new(None, ns!(html), local_name!("div")),
            vec![],
        )
        .one(raw_html);

        let mut out = String::new();
        self.write_children(&fragment_root(&dom), &mut out);
        out
    }

    fn allows_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    fn allowed_attrs(&self, tag: &str) -> &'static [&'static str] {
        self.attrs
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, names)| *names)
            .unwrap_or(&[])
    }

    fn write_children(&self, node: &Handle, out: &mut String) {
        for child in node.children.borrow().iter() {
            self.write_node(child, out);
        }
    }

    fn write_node(&self, node: &Handle, out: &mut String) {
        match &node.data {
            NodeData::Text { contents } => escape_text(&contents.borrow(), out),
            NodeData::Element { name, attrs, .. } => {
                let tag = name.local.to_ascii_lowercase().to_string();

                if !self.allows_tag(&tag) {
                    // Unwrap: drop the element's own tag and attributes,
                    // emit its children in place. Traversal continues into
                    // the children, so nested disallowed tags collapse in
                    // the same pass.
                    self.write_children(node, out);
                    return;
                }

                let kept = self.filter_attrs(&tag, &attrs.borrow());

                out.push('<');
                out.push_str(&tag);
                for (attr_name, value) in &kept {
                    out.push(' ');
                    out.push_str(attr_name);
                    out.push_str("=\"");
                    escape_attr(value, out);
                    out.push('"');
                }
                out.push('>');

                // <br> is the only void element on the allow-list.
                if tag == "br" {
                    return;
                }

                self.write_children(node, out);
                out.push_str("</");
                out.push_str(&tag);
                out.push('>');
            }
            // Comments, doctypes and processing instructions carry nothing
            // displayable.
            _ => {}
        }
    }

    /// Apply the attribute policy to a snapshot of the element's attributes.
    fn filter_attrs(&self, tag: &str, attrs: &[Attribute]) -> Vec<(String, String)> {
        let allowed = self.allowed_attrs(tag);
        let mut kept: Vec<(String, String)> = Vec::new();

        for attr in attrs {
            let name = attr.name.local.to_ascii_lowercase().to_string();
            // Event handlers are stripped regardless of tag.
            if name.starts_with("on") {
                continue;
            }
            if allowed.contains(&name.as_str()) {
                kept.push((name, attr.value.to_string()));
            }
        }

        if tag == "a" {
            // An unsafe scheme loses the href entirely; no rewriting.
            kept.retain(|(name, value)| name != "href" || scheme_allowed(value));
            // Forced on every anchor, overwriting whatever survived above.
            set_attr(&mut kept, "rel", "noopener noreferrer");
            set_attr(&mut kept, "target", "_blank");
        }

        kept
    }
}

/// Locate the synthetic root element `parse_fragment` wraps content in.
fn fragment_root(dom: &RcDom) -> Handle {
    dom.document
        .children
        .borrow()
        .iter()
        .find(|node| matches!(node.data, NodeData::Element { .. }))
        .cloned()
        .unwrap_or_else(|| dom.document.clone())
}

fn scheme_allowed(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    ALLOWED_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

/// Set or replace an attribute in the kept list, preserving position when the
/// attribute already survived filtering.
fn set_attr(attrs: &mut Vec<(String, String)>, name: &str, value: &str) {
    if let Some(slot) = attrs.iter_mut().find(|(n, _)| n == name) {
        slot.1 = value.to_string();
    } else {
        attrs.push((name.to_string(), value.to_string()));
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(sanitize("hello world"), "hello world");
    }

    #[test]
    fn script_is_unwrapped_to_inert_text() {
        let out = sanitize("<p>Hi</p><script>alert(1)</script>");
        assert_eq!(out, "<p>Hi</p>alert(1)");
        assert!(!out.to_ascii_lowercase().contains("<script"));
    }

    #[test]
    fn text_around_script_is_preserved() {
        assert_eq!(
            sanitize("before<script>steal()</script>after"),
            "beforesteal()after"
        );
    }

    #[test]
    fn unwrap_preserves_child_order() {
        assert_eq!(sanitize("<div>A<b>B</b>C</div>"), "A<b>B</b>C");
    }

    #[test]
    fn nested_disallowed_tags_collapse_in_one_pass() {
        assert_eq!(
            sanitize("<section><div><em>x</em> y</div></section>"),
            "<em>x</em> y"
        );
    }

    #[test]
    fn void_disallowed_tags_vanish() {
        // img has no children, so unwrapping leaves nothing behind.
        assert_eq!(
            sanitize(r#"before<img src="x" onerror="pwn()">after"#),
            "beforeafter"
        );
    }

    #[test]
    fn javascript_href_is_removed_but_anchor_survives() {
        assert_eq!(
            sanitize(r#"<a href="javascript:alert(1)">x</a>"#),
            r#"<a rel="noopener noreferrer" target="_blank">x</a>"#
        );
    }

    #[test]
    fn safe_href_is_kept_and_anchor_hardened() {
        assert_eq!(
            sanitize(r#"<a href="https://example.com">x</a>"#),
            r#"<a href="https://example.com" rel="noopener noreferrer" target="_blank">x</a>"#
        );
    }

    #[test]
    fn mailto_and_http_schemes_are_allowed() {
        let out = sanitize(r#"<a href="mailto:host@example.com">m</a>"#);
        assert!(out.contains(r#"href="mailto:host@example.com""#));

        let out = sanitize(r#"<a href="http://example.com/ep">h</a>"#);
        assert!(out.contains(r#"href="http://example.com/ep""#));
    }

    #[test]
    fn scheme_check_is_case_insensitive() {
        let out = sanitize(r#"<a href="HTTPS://EXAMPLE.COM">x</a>"#);
        assert!(out.contains(r#"href="HTTPS://EXAMPLE.COM""#));

        let out = sanitize(r#"<a href="JavaScript:alert(1)">x</a>"#);
        assert!(!out.contains("href"));
    }

    #[test]
    fn existing_rel_and_target_are_overwritten() {
        assert_eq!(
            sanitize(r#"<a href="https://e.com/" target="_self" rel="opener">x</a>"#),
            r#"<a href="https://e.com/" target="_blank" rel="noopener noreferrer">x</a>"#
        );
    }

    #[test]
    fn anchor_title_is_preserved() {
        let out = sanitize(r#"<a href="https://e.com/" title="Episode 1">x</a>"#);
        assert!(out.contains(r#"title="Episode 1""#));
    }

    #[test]
    fn event_handlers_are_stripped_from_any_tag() {
        assert_eq!(sanitize(r#"<p onclick="x()">t</p>"#), "<p>t</p>");
        assert_eq!(
            sanitize(r#"<span class="tag" ONMOUSEOVER="x()">t</span>"#),
            r#"<span class="tag">t</span>"#
        );
    }

    #[test]
    fn span_keeps_only_class() {
        assert_eq!(
            sanitize(r#"<span class="tag" id="a" data-x="1" onclick="x()">t</span>"#),
            r#"<span class="tag">t</span>"#
        );
    }

    #[test]
    fn tags_without_attribute_entry_lose_all_attributes() {
        assert_eq!(
            sanitize(r#"<p class="x" style="color:red">t</p>"#),
            "<p>t</p>"
        );
        assert_eq!(
            sanitize(r#"<blockquote cite="https://e.com">q</blockquote>"#),
            "<blockquote>q</blockquote>"
        );
    }

    #[test]
    fn uppercase_tags_are_normalized() {
        assert_eq!(sanitize("<STRONG>x</STRONG>"), "<strong>x</strong>");
    }

    #[test]
    fn list_structure_is_preserved() {
        assert_eq!(
            sanitize("<ul><li>a</li><li>b</li></ul>"),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn line_breaks_serialize_as_void() {
        assert_eq!(sanitize("a<br>b"), "a<br>b");
    }

    #[test]
    fn text_content_is_escaped() {
        assert_eq!(sanitize("<p>1 < 2 & 3</p>"), "<p>1 &lt; 2 &amp; 3</p>");
    }

    #[test]
    fn comments_are_dropped() {
        assert_eq!(sanitize("a<!-- hidden -->b"), "ab");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let samples = [
            "",
            "plain",
            "<p>Hi</p><script>alert(1)</script>",
            "<div>A<b>B</b>C</div>",
            r#"<a href="javascript:alert(1)">x</a>"#,
            r#"<a href="https://example.com" target="_self">x</a>"#,
            r#"<span class="tag" onclick="x()">t</span>"#,
            "<p>1 < 2 & 3</p>",
            "<ul><li>a</li><li>b</li></ul>",
            "<style>p { color: red }</style>",
            "a<br>b<!-- c -->",
        ];
        for sample in samples {
            let once = sanitize(sample);
            assert_eq!(sanitize(&once), once, "not idempotent for {sample:?}");
        }
    }
}

//! HTML text to owned tree conversion using `tl`.

use super::{Attrs, Element, Node, RAW_TEXT_TAGS, inner_html};

/// A parsed HTML file: optional doctype plus a synthetic root holding the
/// top-level nodes.
#[derive(Debug, Clone)]
pub struct Document {
    pub doctype: Option<String>,
    pub root: Element,
}

impl Document {
    /// Serialize back to HTML.
    pub fn to_html(&self) -> String {
        let body = inner_html(&self.root);
        match &self.doctype {
            Some(doctype) => format!("{doctype}\n{body}"),
            None => body,
        }
    }
}

/// Parse a full HTML document (or a bare fragment).
pub fn parse_document(html: &str) -> Document {
    let (doctype, rest) = split_doctype(html);
    let mut root = Element::new("");
    root.children.extend(parse_fragment(rest));
    Document {
        doctype: doctype.map(str::to_string),
        root,
    }
}

/// Parse an HTML fragment into top-level nodes.
///
/// Comments are dropped and entities decoded. Script and style bodies are
/// kept byte-for-byte. Input `tl` cannot parse is kept as a single text node.
pub fn parse_fragment(html: &str) -> Vec<Node> {
    let (source, bodies) = lift_raw_text(html);
    let Ok(dom) = tl::parse(&source, tl::ParserOptions::default()) else {
        return vec![Node::Text(html.to_string())];
    };

    let parser = dom.parser();
    dom.children()
        .iter()
        .filter_map(|handle| convert(*handle, parser, &bodies, false))
        .collect()
}

// ============================================================================
// raw text bodies
// ============================================================================

/// Cut every script/style body out of `html`, leaving a placeholder.
///
/// `tl` tokenizes tag-like text inside these elements (`i<n`), which
/// would lose source text and swallow the rest of the page. Bodies inside
/// comments are lifted too; the comment is dropped later either way.
fn lift_raw_text(html: &str) -> (String, Vec<String>) {
    // ASCII lower-casing keeps byte offsets aligned with `html`
    let lower = html.to_ascii_lowercase();
    let mut out = String::with_capacity(html.len());
    let mut bodies = Vec::new();
    let mut pos = 0;

    while let Some(offset) = lower[pos..].find('<') {
        let start = pos + offset;
        let rest = &lower[start..];

        let Some(tag) = RAW_TEXT_TAGS.iter().find(|tag| is_open_tag(rest, tag)) else {
            out.push_str(&html[pos..=start]);
            pos = start + 1;
            continue;
        };
        let Some(open_end) = find_tag_end(rest).map(|end| start + end + 1) else {
            break;
        };
        let close = format!("</{tag}");
        let body_end = lower[open_end..]
            .find(&close)
            .map_or(html.len(), |end| open_end + end);

        out.push_str(&html[pos..open_end]);
        let body = &html[open_end..body_end];
        if !body.is_empty() {
            out.push_str(&placeholder(bodies.len()));
            bodies.push(body.to_string());
        }
        pos = body_end;
    }

    out.push_str(&html[pos..]);
    (out, bodies)
}

/// `rest` starts with `<tag` followed by a tag-name terminator.
fn is_open_tag(rest: &str, tag: &str) -> bool {
    rest.strip_prefix('<')
        .and_then(|r| r.strip_prefix(tag))
        .and_then(|r| r.bytes().next())
        .is_some_and(|b| b.is_ascii_whitespace() || b == b'>' || b == b'/')
}

/// Index of the `>` closing the open tag at the start of `rest`, skipping
/// quoted attribute values.
fn find_tag_end(rest: &str) -> Option<usize> {
    let mut quote = None;
    for (i, b) in rest.bytes().enumerate() {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return Some(i),
            (None, _) => {}
        }
    }
    None
}

const PLACEHOLDER_MARK: char = '\u{1}';

fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_MARK}brickwork-raw-{index}{PLACEHOLDER_MARK}")
}

/// Original body for a placeholder produced by [`lift_raw_text`].
fn restore<'a>(text: &str, bodies: &'a [String]) -> Option<&'a str> {
    let index = text
        .strip_prefix(PLACEHOLDER_MARK)?
        .strip_suffix(PLACEHOLDER_MARK)?
        .strip_prefix("brickwork-raw-")?
        .parse::<usize>()
        .ok()?;
    bodies.get(index).map(String::as_str)
}

/// Leading `<!DOCTYPE ...>` declaration, if any.
fn split_doctype(html: &str) -> (Option<&str>, &str) {
    let trimmed = html.trim_start();
    let is_doctype = trimmed
        .get(..9)
        .is_some_and(|head| head.eq_ignore_ascii_case("<!doctype"));
    if is_doctype && let Some(end) = trimmed.find('>') {
        return (Some(&trimmed[..=end]), &trimmed[end + 1..]);
    }
    (None, html)
}

/// Convert a tl node handle to an owned node
///
/// `raw` marks children of script/style, whose text is a lifted body.
fn convert(
    handle: tl::NodeHandle,
    parser: &tl::Parser,
    bodies: &[String],
    raw: bool,
) -> Option<Node> {
    match handle.get(parser)? {
        tl::Node::Tag(tag) => {
            let tag_name = tag.name().as_utf8_str().to_lowercase();

            let mut attrs = Attrs::new();
            for (key, value) in tag.attributes().iter() {
                let key_str: &str = key.as_ref();
                let value_str = value
                    .map(|v| html_escape::decode_html_entities(&*v).into_owned())
                    .unwrap_or_default();
                attrs.set(&key_str.to_ascii_lowercase(), value_str);
            }

            let raw = RAW_TEXT_TAGS.contains(&tag_name.as_str());
            let mut elem = Element::with_attrs(&tag_name, attrs);
            for child in tag.children().top().iter() {
                if let Some(node) = convert(*child, parser, bodies, raw) {
                    elem.children.push(node);
                }
            }
            Some(Node::element(elem))
        }
        tl::Node::Raw(bytes) => {
            let text = bytes.as_utf8_str();
            if text.is_empty() {
                return None;
            }
            if raw {
                let body = restore(&text, bodies).map_or_else(|| text.to_string(), str::to_string);
                return Some(Node::Text(body));
            }
            Some(Node::Text(
                html_escape::decode_html_entities(&*text).into_owned(),
            ))
        }
        tl::Node::Comment(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_fragment_structure() {
        let nodes = parse_fragment(
            r#"<div class="homepage-brick medium"><div><div><h2 id="t">Title</h2></div></div></div>"#,
        );
        assert_eq!(nodes.len(), 1);
        let block = nodes[0].as_element().unwrap();
        assert!(block.has_class("medium"));
        let heading = block.get(&[0, 0, 0]).unwrap();
        assert_eq!(heading.tag, "h2");
        assert_eq!(heading.get_attr("id"), Some("t"));
        assert_eq!(heading.text_content(), "Title");
    }

    #[test]
    fn test_parse_decodes_entities() {
        let nodes = parse_fragment(r#"<p title="a &amp; b">Tom &amp; Jerry</p>"#);
        let p = nodes[0].as_element().unwrap();
        assert_eq!(p.get_attr("title"), Some("a & b"));
        assert_eq!(p.text_content(), "Tom & Jerry");
    }

    #[test]
    fn test_parse_drops_comments() {
        let nodes = parse_fragment("<div><!-- note --><p>x</p></div>");
        let div = nodes[0].as_element().unwrap();
        assert_eq!(div.children.len(), 1);
    }

    #[test]
    fn test_parse_document_keeps_doctype() {
        let doc = parse_document("<!DOCTYPE html>\n<html><body><main></main></body></html>");
        assert_eq!(doc.doctype.as_deref(), Some("<!DOCTYPE html>"));
        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<main></main>"));
    }

    #[test]
    fn test_script_body_survives_round_trip() {
        let html = concat!(
            "<script>for(i=0;i<n;i++){}</script>",
            r#"<style>a > b { color: red }</style>"#,
            r#"<div class="homepage-brick"><div><div>x</div></div></div>"#,
        );
        let nodes = parse_fragment(html);
        assert_eq!(nodes.len(), 3);
        let script = nodes[0].as_element().unwrap();
        assert_eq!(script.children.as_slice(), &[Node::Text("for(i=0;i<n;i++){}".to_string())]);
        assert_eq!(crate::dom::render_nodes(&nodes), html);
    }

    #[test]
    fn test_script_in_head_does_not_swallow_body() {
        let doc = parse_document(concat!(
            r#"<html><head><script type="text/javascript">if (a<b && c) { go("</p>"); }</script></head>"#,
            r#"<body><main><p>hi</p></main></body></html>"#,
        ));
        let main = doc.root.find_first(|e| e.is("main")).unwrap();
        assert_eq!(main, vec![0, 1, 0]);
        assert!(
            doc.to_html()
                .contains(r#"<script type="text/javascript">if (a<b && c) { go("</p>"); }</script>"#)
        );
    }

    #[test]
    fn test_lift_raw_text_placeholders() {
        let (source, bodies) = lift_raw_text("<SCRIPT src='a>b'>x<y</SCRIPT><scripts>z</scripts><script></script>");
        assert_eq!(bodies, vec!["x<y".to_string()]);
        assert!(source.starts_with("<SCRIPT src='a>b'>\u{1}brickwork-raw-0\u{1}</SCRIPT><scripts>z</scripts>"));
        assert_eq!(restore(&placeholder(0), &bodies), Some("x<y"));
        assert_eq!(restore("plain", &bodies), None);
    }

    #[test]
    fn test_split_doctype_absent() {
        let (doctype, rest) = split_doctype("<div></div>");
        assert!(doctype.is_none());
        assert_eq!(rest, "<div></div>");
    }
}

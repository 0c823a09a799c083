//! Tree to HTML serialization.

use super::{Element, Node, RAW_TEXT_TAGS, VOID_TAGS};

/// Serialize an element including its own tag.
pub fn outer_html(elem: &Element) -> String {
    let mut out = String::new();
    write_element(elem, &mut out);
    out
}

/// Serialize only the children of an element.
pub fn inner_html(elem: &Element) -> String {
    render_nodes(&elem.children)
}

/// Serialize a node list.
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(elem) => write_element(elem, out),
        Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
    }
}

fn write_element(elem: &Element, out: &mut String) {
    // The synthetic document root has no tag of its own
    if elem.tag.is_empty() {
        for child in &elem.children {
            write_node(child, out);
        }
        return;
    }

    out.push('<');
    out.push_str(&elem.tag);
    for (name, value) in elem.attrs.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    if VOID_TAGS.contains(&elem.tag.as_str()) {
        return;
    }

    let raw = RAW_TEXT_TAGS.contains(&elem.tag.as_str());
    for child in &elem.children {
        match child {
            Node::Text(text) if raw => out.push_str(text),
            _ => write_node(child, out),
        }
    }
    out.push_str("</");
    out.push_str(&elem.tag);
    out.push('>');
}

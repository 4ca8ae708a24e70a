//! Serializing document nodes to markup

use crate::markup::{Element, Node, Tag};

/// Turns a finished node tree into a document
pub trait Renderer {
    fn render(&self, document: &Node) -> String;
}

/// HTML5 serializer.
///
/// Text and attribute values are escaped; style blocks are written verbatim.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, document: &Node) -> String {
        let mut html = String::with_capacity(16 * 1024);
        html.push_str("<!DOCTYPE html>\n");
        write_node(&mut html, document, None);
        html.push('\n');
        html
    }
}

fn write_node(html: &mut String, node: &Node, parent: Option<Tag>) {
    match node {
        Node::Text(text) if parent == Some(Tag::Style) => html.push_str(text),
        Node::Text(text) => html.push_str(&escape_text(text)),
        Node::Element(element) => write_element(html, element),
    }
}

fn write_element(html: &mut String, element: &Element) {
    let tag = element.tag.as_str();

    html.push('<');
    html.push_str(tag);
    for (name, value) in &element.attributes {
        html.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
    }
    html.push('>');

    if element.tag.is_void() {
        return;
    }

    for child in &element.children {
        write_node(html, child, Some(element.tag));
    }

    html.push_str(&format!("</{}>", tag));
    if matches!(element.tag, Tag::Ul | Tag::Li | Tag::Head | Tag::Body | Tag::Span) {
        html.push('\n');
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{render_page, PageOptions, STYLE};

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let node: Node = Element::new(Tag::Img).attr("src", "a.png").into();
        assert_eq!(HtmlRenderer::new().render(&node), "<!DOCTYPE html>\n<img src=\"a.png\">\n");
    }

    #[test]
    fn test_escaping() {
        let node: Node = Element::new(Tag::H2)
            .attr("id", "a\"b")
            .text("x < y & z")
            .into();
        let html = HtmlRenderer::new().render(&node);
        assert!(html.contains(r#"<h2 id="a&quot;b">x &lt; y &amp; z</h2>"#));
    }

    #[test]
    fn test_page_shell() {
        let options = PageOptions {
            title: "Visual <run>".to_string(),
            ..Default::default()
        };
        let html = HtmlRenderer::new().render(&render_page(Vec::new(), Vec::new(), &options));

        assert!(html.starts_with("<!DOCTYPE html>\n<html><head><title>Visual &lt;run&gt;</title>"));
        assert!(html.contains(STYLE));
        assert!(html.contains(r#"<div class="menu"></div><div class="content"></div>"#));
    }
}

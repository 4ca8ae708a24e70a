//! Typed document nodes
//!
//! A small closed set of elements is enough for the report. The model
//! types are lowered into these nodes here; turning nodes into text is the
//! job of a [`Renderer`](crate::render::Renderer).

use crate::accumulator::DocumentModel;
use crate::anchor;
use crate::event::Outcome;
use crate::gallery::{GallerySection, GalleryTile};
use crate::nav::{NavEntry, NavNode};

pub const PASS_COLOR: &str = "#3c923c";
pub const FAIL_COLOR: &str = "#bf3030";
const MISSING_BORDER: &str = "border: 1px solid #882020";

const PASS_GLYPH: char = '\u{2714}';
const FAIL_GLYPH: char = '\u{2718}';

/// Static style rules for the two-pane layout
pub const STYLE: &str = r#"* {
  box-sizing: border-box;
}
html, body {
  margin: 0;
  padding: 0;
  overflow: hidden;
}
img {
  width: 188px;
  padding: 10px;
}
ul {
  padding: 0 0 0 10px;
  list-style-type: none;
}
a {
  text-decoration: none;
}
h3 {
  color: #2b2b2b;
}
.menu {
  padding: 20px;
  float: left;
  height: 100vh;
  width: 30%;
  background: #f7f7f7;
  overflow: auto;
}
.content {
  float: left;
  height: 100vh;
  width: 70%;
  padding: 20px;
  box-shadow: 5px 5px 5px 5px #aaa;
  overflow: auto;
}
.imageItem {
  display: inline;
  position: relative;
  margin: 2px;
  text-align: center;
}
.imageTitle, .imageTitleMissing {
  color: white;
  font-size: 12px;
  padding: 3px;
  position: absolute;
  left: 0;
  top: 0;
  display: inline;
  width: 100%;
}
.imageTitle {
  background-color: #3c923c;
}
.imageTitleMissing {
  background-color: #bf3030;
}
.passed {
  color: #3c923c;
}
.failed {
  color: #bf3030;
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Html,
    Head,
    Title,
    Style,
    Body,
    Div,
    Span,
    Ul,
    Li,
    A,
    Img,
    H2,
    H3,
    Hr,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Html => "html",
            Tag::Head => "head",
            Tag::Title => "title",
            Tag::Style => "style",
            Tag::Body => "body",
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::A => "a",
            Tag::Img => "img",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::Hr => "hr",
        }
    }

    /// Elements that never have children or a closing tag
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::Img | Tag::Hr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }
}

/// Options for the page shell
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
    /// Image shown on placeholder tiles
    pub missing_image: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Image Tests Report".to_string(),
            missing_image: "missing.png".to_string(),
        }
    }
}

fn outcome_color(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Passed => PASS_COLOR,
        Outcome::Failed => FAIL_COLOR,
    }
}

fn outcome_class(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Passed => "passed",
        Outcome::Failed => "failed",
    }
}

/// Lower the navigation forest into nested lists
pub fn navigation_nodes(forest: &[NavNode]) -> Vec<Node> {
    forest.iter().map(nav_node).collect()
}

fn nav_node(node: &NavNode) -> Node {
    match node {
        NavNode::Entry(entry) => nav_entry(entry),
        NavNode::Suite { title, children } => Element::new(Tag::Ul)
            .child(Element::new(Tag::H3).text(title.as_str()))
            .children(children.iter().map(nav_node))
            .into(),
    }
}

fn nav_entry(entry: &NavEntry) -> Node {
    let glyph = match entry.outcome {
        Outcome::Passed => PASS_GLYPH,
        Outcome::Failed => FAIL_GLYPH,
    };

    Element::new(Tag::Li)
        .child(
            Element::new(Tag::A)
                .attr("class", outcome_class(entry.outcome))
                .attr("style", format!("color: {}", outcome_color(entry.outcome)))
                .attr("href", anchor::link(&entry.anchor))
                .text(format!("{} {}", glyph, entry.title)),
        )
        .into()
}

/// Lower gallery sections into content blocks
pub fn gallery_nodes(sections: &[GallerySection], missing_image: &str) -> Vec<Node> {
    sections
        .iter()
        .map(|section| gallery_section(section, missing_image))
        .collect()
}

fn gallery_section(section: &GallerySection, missing_image: &str) -> Node {
    let display = if section.separator { "block" } else { "none" };

    Element::new(Tag::Span)
        .child(Element::new(Tag::Hr).attr("style", format!("margin: 30px 0; display: {}", display)))
        .child(
            Element::new(Tag::H2)
                .attr("id", section.anchor.as_str())
                .attr("class", outcome_class(section.outcome))
                .attr("style", format!("color: {}", outcome_color(section.outcome)))
                .text(section.title.as_str()),
        )
        .child(
            Element::new(Tag::Span)
                .children(section.tiles.iter().map(|tile| gallery_tile(tile, missing_image))),
        )
        .into()
}

fn gallery_tile(tile: &GalleryTile, missing_image: &str) -> Node {
    let (link, caption_class) = match tile {
        GalleryTile::Real { locator, .. } => (
            Element::new(Tag::A)
                .attr("href", locator.as_str())
                .attr("target", "_blank")
                .child(Element::new(Tag::Img).attr("src", locator.as_str())),
            "imageTitle",
        ),
        GalleryTile::Missing => (
            Element::new(Tag::A).attr("href", "#").child(
                Element::new(Tag::Img)
                    .attr("src", missing_image)
                    .attr("style", MISSING_BORDER),
            ),
            "imageTitleMissing",
        ),
    };

    Element::new(Tag::Div)
        .attr("class", "imageItem")
        .child(link)
        .child(
            Element::new(Tag::Div)
                .attr("class", caption_class)
                .text(tile.label()),
        )
        .into()
}

/// Assemble the full page from already-lowered navigation and content nodes
pub fn render_page(navigation: Vec<Node>, content: Vec<Node>, options: &PageOptions) -> Node {
    Element::new(Tag::Html)
        .child(
            Element::new(Tag::Head)
                .child(Element::new(Tag::Title).text(options.title.as_str()))
                .child(Element::new(Tag::Style).text(STYLE)),
        )
        .child(
            Element::new(Tag::Body)
                .child(Element::new(Tag::Div).attr("class", "menu").children(navigation))
                .child(Element::new(Tag::Div).attr("class", "content").children(content)),
        )
        .into()
}

/// Lower a whole model into a page
pub fn document(model: &DocumentModel, options: &PageOptions) -> Node {
    render_page(
        navigation_nodes(&model.navigation),
        gallery_nodes(&model.gallery, &options.missing_image),
        options,
    )
}

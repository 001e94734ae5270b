//! Markdown to node tree.
//!
//! pulldown-cmark events are folded into a small owned tree so the render
//! rules can dispatch on node kind and see their children at once.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

/// Kind of a markdown node, with the attributes its render rule needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Paragraph,
    Heading(u8),
    BlockQuote,
    List { ordered: bool, start: u64 },
    Item,
    TaskMarker(bool),
    Table,
    TableHead,
    TableRow,
    TableCell,
    /// Fenced or indented code; `language` is the first word of the info string
    CodeBlock { language: Option<String>, code: String },
    /// Code span (the parser's inline flag)
    InlineCode(String),
    Math { display: bool, tex: String },
    Emphasis,
    Strong,
    Strikethrough,
    Link { href: String, title: String },
    Image { src: String, title: String },
    Text(String),
    SoftBreak,
    HardBreak,
    Rule,
}

/// A node and its children, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Concatenated text of this node's descendants
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match &node.kind {
        NodeKind::Text(text) | NodeKind::InlineCode(text) => out.push_str(text),
        NodeKind::Math { tex, .. } => out.push_str(tex),
        NodeKind::SoftBreak | NodeKind::HardBreak => out.push(' '),
        _ => {}
    }
    for child in &node.children {
        collect_text(child, out);
    }
}

/// Parser options: GFM tables, strikethrough, task lists, and math
pub fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_MATH);
    options
}

/// Parse markdown into top-level nodes
pub fn parse(markdown: &str) -> Vec<Node> {
    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(markdown, parser_options()) {
        builder.process_event(event);
    }
    builder.finish()
}

/// Language tag as a `language-(\w+)` class would yield it
fn language_tag(info: &str) -> Option<String> {
    let tag: String = info
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    (!tag.is_empty()).then_some(tag)
}

struct TreeBuilder {
    /// Open containers; the bottom frame is the document root
    stack: Vec<Node>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Node::leaf(NodeKind::Paragraph)],
        }
    }

    fn process_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(_) => self.end_tag(),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => self.push_leaf(NodeKind::InlineCode(code.to_string())),
            Event::InlineMath(tex) => self.push_leaf(NodeKind::Math {
                display: false,
                tex: tex.to_string(),
            }),
            Event::DisplayMath(tex) => self.push_leaf(NodeKind::Math {
                display: true,
                tex: tex.to_string(),
            }),
            // Raw HTML is shown as text, never injected
            Event::Html(html) | Event::InlineHtml(html) => self.push_text(&html),
            Event::SoftBreak => self.push_leaf(NodeKind::SoftBreak),
            Event::HardBreak => self.push_leaf(NodeKind::HardBreak),
            Event::Rule => self.push_leaf(NodeKind::Rule),
            Event::TaskListMarker(checked) => self.push_leaf(NodeKind::TaskMarker(checked)),
            Event::FootnoteReference(_) => {}
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        let kind = match tag {
            Tag::Paragraph => NodeKind::Paragraph,
            Tag::Heading { level, .. } => NodeKind::Heading(heading_level(level)),
            Tag::BlockQuote(_) => NodeKind::BlockQuote,
            Tag::CodeBlock(kind) => NodeKind::CodeBlock {
                language: match kind {
                    CodeBlockKind::Fenced(info) => language_tag(&info),
                    CodeBlockKind::Indented => None,
                },
                code: String::new(),
            },
            Tag::List(start) => NodeKind::List {
                ordered: start.is_some(),
                start: start.unwrap_or(1),
            },
            Tag::Item => NodeKind::Item,
            Tag::Table(_) => NodeKind::Table,
            Tag::TableHead => NodeKind::TableHead,
            Tag::TableRow => NodeKind::TableRow,
            Tag::TableCell => NodeKind::TableCell,
            Tag::Emphasis => NodeKind::Emphasis,
            Tag::Strong => NodeKind::Strong,
            Tag::Strikethrough => NodeKind::Strikethrough,
            Tag::Link {
                dest_url, title, ..
            } => NodeKind::Link {
                href: dest_url.to_string(),
                title: title.to_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => NodeKind::Image {
                src: dest_url.to_string(),
                title: title.to_string(),
            },
            // Footnotes, metadata, definition lists and HTML blocks keep
            // their text but get no presentation of their own.
            _ => NodeKind::Paragraph,
        };
        self.stack.push(Node::leaf(kind));
    }

    fn end_tag(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(node) = self.stack.pop() {
            self.append(node);
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(Node {
            kind: NodeKind::CodeBlock { code, .. },
            ..
        }) = self.stack.last_mut()
        {
            code.push_str(text);
            return;
        }
        self.push_leaf(NodeKind::Text(text.to_string()));
    }

    fn push_leaf(&mut self, kind: NodeKind) {
        self.append(Node::leaf(kind));
    }

    fn append(&mut self, node: Node) {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while self.stack.len() > 1 {
            self.end_tag();
        }
        self.stack.pop().map(|root| root.children).unwrap_or_default()
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_tag() {
        assert_eq!(language_tag("python"), Some("python".to_string()));
        assert_eq!(language_tag("rust ignore"), Some("rust".to_string()));
        assert_eq!(language_tag("c++"), Some("c".to_string()));
        assert_eq!(language_tag(""), None);
    }

    #[test]
    fn test_fenced_code_block() {
        let nodes = parse("```python\nprint(1)\nprint(2)\n```\n");
        assert_eq!(
            nodes,
            vec![Node {
                kind: NodeKind::CodeBlock {
                    language: Some("python".to_string()),
                    code: "print(1)\nprint(2)\n".to_string(),
                },
                children: Vec::new(),
            }]
        );
    }

    #[test]
    fn test_inline_code_and_math() {
        let nodes = parse("Use `len` and $x^2$.");
        assert_eq!(nodes.len(), 1);
        let kinds: Vec<_> = nodes[0].children.iter().map(|n| n.kind.clone()).collect();
        assert!(kinds.contains(&NodeKind::InlineCode("len".to_string())));
        assert!(kinds.contains(&NodeKind::Math {
            display: false,
            tex: "x^2".to_string()
        }));
    }

    #[test]
    fn test_display_math() {
        let nodes = parse("Energy: $$E = mc^2$$");
        let math = nodes[0]
            .children
            .iter()
            .find(|n| matches!(n.kind, NodeKind::Math { display: true, .. }));
        assert!(math.is_some());
    }

    #[test]
    fn test_table_structure() {
        let nodes = parse("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert_eq!(nodes[0].kind, NodeKind::Table);
        assert_eq!(nodes[0].children[0].kind, NodeKind::TableHead);
        assert_eq!(nodes[0].children[1].kind, NodeKind::TableRow);
        assert_eq!(nodes[0].children[1].children.len(), 2);
    }

    #[test]
    fn test_nested_list_and_heading() {
        let nodes = parse("## Steps\n\n1. one\n2. two\n");
        assert_eq!(nodes[0].kind, NodeKind::Heading(2));
        assert_eq!(
            nodes[1].kind,
            NodeKind::List {
                ordered: true,
                start: 1
            }
        );
        assert_eq!(nodes[1].children.len(), 2);
        assert_eq!(nodes[1].children[1].plain_text(), "two");
    }

    #[test]
    fn test_strikethrough_and_link() {
        let nodes = parse("~~old~~ [docs](https://example.com)");
        let kinds: Vec<_> = nodes[0].children.iter().map(|n| n.kind.clone()).collect();
        assert_eq!(kinds[0], NodeKind::Strikethrough);
        assert!(kinds.contains(&NodeKind::Link {
            href: "https://example.com".to_string(),
            title: String::new(),
        }));
    }
}

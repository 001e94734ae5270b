//! Per-node presentation rules.
//!
//! [`rule_for`] is the dispatch table: each node kind maps to one render
//! function. Rules render their children through [`render_node`] again.

use maud::{html, Markup};
use tokio::time::Instant;

use super::copy::{CopyIndicator, CopyState};
use super::markdown::{Node, NodeKind};

/// Code blocks at least this long (in chars) always keep block chrome
pub const INLINE_CODE_MAX: usize = 40;

const INLINE_CODE_CLASS: &str =
    "bg-[#303030] text-[#66b5ff] px-1 py-0.5 rounded text-sm font-mono font-medium";

/// Inputs a rule may read besides the node itself
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Copy feedback state for code block headers
    pub copy: &'a CopyIndicator,
    /// Instant the copy indicator is evaluated at
    pub now: Instant,
    /// Form action the copy control posts to
    pub copy_action: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(copy: &'a CopyIndicator, now: Instant) -> Self {
        Self {
            copy,
            now,
            copy_action: "/copy",
        }
    }
}

/// Signature shared by every rule
pub type RenderRule = fn(&Node, &RenderContext<'_>) -> Markup;

/// Dispatch table from node kind to its rule
pub fn rule_for(kind: &NodeKind) -> RenderRule {
    match kind {
        NodeKind::Paragraph => paragraph,
        NodeKind::Heading(_) => heading,
        NodeKind::BlockQuote => blockquote,
        NodeKind::List { .. } => list,
        NodeKind::Item => list_item,
        NodeKind::TaskMarker(_) => task_marker,
        NodeKind::Table => table,
        NodeKind::TableHead => table_head,
        NodeKind::TableRow => table_row,
        NodeKind::TableCell => table_cell,
        NodeKind::CodeBlock { .. } => code_block,
        NodeKind::InlineCode(_) => inline_code,
        NodeKind::Math { .. } => math,
        NodeKind::Emphasis => emphasis,
        NodeKind::Strong => strong,
        NodeKind::Strikethrough => strikethrough,
        NodeKind::Link { .. } => link,
        NodeKind::Image { .. } => image,
        NodeKind::Text(_) => text,
        NodeKind::SoftBreak => soft_break,
        NodeKind::HardBreak => hard_break,
        NodeKind::Rule => rule,
    }
}

/// Render one node through its rule
pub fn render_node(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    rule_for(&node.kind)(node, ctx)
}

/// Render a sequence of sibling nodes
pub fn render_nodes(nodes: &[Node], ctx: &RenderContext<'_>) -> Markup {
    html! {
        @for node in nodes {
            (render_node(node, ctx))
        }
    }
}

fn children(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    render_nodes(&node.children, ctx)
}

fn paragraph(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    html! {
        p class="mb-4 whitespace-pre-wrap break-words text-[#f3f3f3]" { (children(node, ctx)) }
    }
}

fn heading(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    let body = children(node, ctx);
    match node.kind {
        NodeKind::Heading(1) => html! { h1 class="text-2xl font-bold mb-4 text-[#fff]" { (body) } },
        NodeKind::Heading(2) => html! { h2 class="text-xl font-bold mb-3 text-[#fff]" { (body) } },
        NodeKind::Heading(3) => html! { h3 class="text-lg font-bold mb-2 text-[#fff]" { (body) } },
        NodeKind::Heading(4) => html! { h4 { (body) } },
        NodeKind::Heading(5) => html! { h5 { (body) } },
        _ => html! { h6 { (body) } },
    }
}

fn blockquote(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    html! {
        blockquote class="pl-4 border-l-4 border-[#ffffff26] text-[#cdcdcd] my-4" {
            (children(node, ctx))
        }
    }
}

fn list(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    match node.kind {
        NodeKind::List {
            ordered: true,
            start,
        } => html! {
            ol class="list-decimal ml-6 mb-4 text-[#f3f3f3]" start=[(start != 1).then_some(start)] {
                (children(node, ctx))
            }
        },
        _ => html! {
            ul class="list-disc ml-6 mb-4 text-[#f3f3f3]" { (children(node, ctx)) }
        },
    }
}

fn list_item(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    html! {
        li class="mb-1 text-[#f3f3f3]" { (children(node, ctx)) }
    }
}

fn task_marker(node: &Node, _ctx: &RenderContext<'_>) -> Markup {
    let checked = matches!(node.kind, NodeKind::TaskMarker(true));
    html! {
        input type="checkbox" class="mr-2" disabled checked[checked];
    }
}

fn table(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    let (head, rows): (Vec<&Node>, Vec<&Node>) = node
        .children
        .iter()
        .partition(|child| child.kind == NodeKind::TableHead);

    html! {
        div class="overflow-x-auto my-4" {
            table class="min-w-full border border-[#ffffff26] text-[#f3f3f3]" {
                @for h in head {
                    (render_node(h, ctx))
                }
                tbody {
                    @for row in rows {
                        (render_node(row, ctx))
                    }
                }
            }
        }
    }
}

/// Header cells are rendered here directly so they become `th`
fn table_head(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    html! {
        thead class="bg-[#303030]" {
            tr {
                @for cell in &node.children {
                    th class="py-2 px-4 border-b border-[#ffffff26] text-left font-medium" {
                        (children(cell, ctx))
                    }
                }
            }
        }
    }
}

fn table_row(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    html! {
        tr { (children(node, ctx)) }
    }
}

fn table_cell(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    html! {
        td class="py-2 px-4 border-b border-[#ffffff26]" { (children(node, ctx)) }
    }
}

fn inline_code_markup(code: &str) -> Markup {
    html! {
        code class=(INLINE_CODE_CLASS) { (code) }
    }
}

fn inline_code(node: &Node, _ctx: &RenderContext<'_>) -> Markup {
    match &node.kind {
        NodeKind::InlineCode(code) => inline_code_markup(code),
        _ => html! {},
    }
}

/// Short single-line blocks without a language tag fall back to inline
/// styling. Blocks that reach here already survived fence collapse, so this
/// mostly catches indented code and fences the text pass did not match.
fn code_block(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    let NodeKind::CodeBlock { language, code } = &node.kind else {
        return html! {};
    };

    let code_text = code.strip_suffix('\n').unwrap_or(code);
    let is_short = code_text.chars().count() < INLINE_CODE_MAX && !code_text.contains('\n');
    if is_short && language.is_none() {
        return inline_code_markup(code_text);
    }

    let key = language.as_deref().unwrap_or("");
    let copied = ctx.copy.state(key, ctx.now) == CopyState::Copied;
    let code_class = language.as_ref().map(|lang| format!("language-{lang}"));

    html! {
        div class="code-block rounded-md my-4 overflow-hidden border border-[#ffffff26]" {
            div class="flex justify-between items-center px-4 py-2 bg-[#303030] border-b border-[#ffffff26]" {
                @if let Some(lang) = language {
                    span class="text-xs text-[#cdcdcd]" { (lang) }
                }
                form method="post" action=(ctx.copy_action) class="ml-auto" {
                    input type="hidden" name="language" value=(key);
                    button
                        type="submit"
                        class="flex items-center text-xs text-[#cdcdcd] hover:text-[#fff]"
                        data-code=(code_text)
                        onclick="navigator.clipboard && navigator.clipboard.writeText(this.dataset.code)" {
                        @if copied {
                            span class="mr-1" { "✓" }
                            span { "Copied!" }
                        } @else {
                            span class="mr-1" { "⧉" }
                            span { "Copy code" }
                        }
                    }
                }
            }
            div class="overflow-x-auto" {
                pre class="m-0 p-4 bg-[#212121] text-[#fff]" {
                    code class=[code_class] { (code_text) }
                }
            }
        }
    }
}

/// Math is emitted with KaTeX delimiters and typeset in the browser
fn math(node: &Node, _ctx: &RenderContext<'_>) -> Markup {
    match &node.kind {
        NodeKind::Math { display: true, tex } => html! {
            div class="math math-display my-4" { "\\[" (tex) "\\]" }
        },
        NodeKind::Math { display: false, tex } => html! {
            span class="math math-inline" { "\\(" (tex) "\\)" }
        },
        _ => html! {},
    }
}

fn emphasis(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    html! { em { (children(node, ctx)) } }
}

fn strong(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    html! { strong { (children(node, ctx)) } }
}

fn strikethrough(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    html! { del { (children(node, ctx)) } }
}

/// URL schemes a rendered link or image may use
const SAFE_SCHEMES: [&str; 6] = ["http", "https", "mailto", "irc", "ircs", "xmpp"];

/// `url` unchanged when it is relative or uses a safe scheme, empty otherwise
pub fn safe_url(url: &str) -> &str {
    let Some(colon) = url.find(':') else {
        return url;
    };
    // A path, query or fragment before the colon means no scheme
    if url[..colon].contains(|c: char| matches!(c, '/' | '?' | '#')) {
        return url;
    }
    let scheme = &url[..colon];
    if SAFE_SCHEMES.iter().any(|safe| scheme.eq_ignore_ascii_case(safe)) {
        url
    } else {
        ""
    }
}

fn link(node: &Node, ctx: &RenderContext<'_>) -> Markup {
    let NodeKind::Link { href, title } = &node.kind else {
        return children(node, ctx);
    };
    let title = (!title.is_empty()).then_some(title);

    html! {
        a href=(safe_url(href)) title=[title] class="text-[#66b5ff] hover:underline" {
            (children(node, ctx))
        }
    }
}

fn image(node: &Node, _ctx: &RenderContext<'_>) -> Markup {
    let NodeKind::Image { src, title } = &node.kind else {
        return html! {};
    };
    let title = (!title.is_empty()).then_some(title);

    html! {
        img src=(safe_url(src)) alt=(node.plain_text()) title=[title] class="max-w-full my-4";
    }
}

fn text(node: &Node, _ctx: &RenderContext<'_>) -> Markup {
    match &node.kind {
        NodeKind::Text(text) => html! { (text) },
        _ => html! {},
    }
}

fn soft_break(_node: &Node, _ctx: &RenderContext<'_>) -> Markup {
    html! { "\n" }
}

fn hard_break(_node: &Node, _ctx: &RenderContext<'_>) -> Markup {
    html! { br; }
}

fn rule(_node: &Node, _ctx: &RenderContext<'_>) -> Markup {
    html! { hr class="my-4 border-[#ffffff26]"; }
}

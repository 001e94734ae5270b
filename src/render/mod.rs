//! Message Rendering
//!
//! Pure pipeline from a message record to markup:
//!
//! 1. [`clean_message_text`]: strip echoed "Copy code" text and collapse short
//!    fenced blocks to inline code.
//! 2. [`markdown::parse`]: markdown with GFM tables, strikethrough, task
//!    lists and math, folded into a node tree.
//! 3. [`rules::rule_for`]: per-node-kind presentation rules.
//!
//! Code blocks are checked for the inline fallback twice, once as text in
//! step 1 and once per node in step 3. Both passes are kept; removing either
//! changes output for some answers.

mod clean;
mod copy;
pub mod markdown;
pub mod rules;

pub use clean::clean_message_text;
pub use copy::{CopyIndicator, CopyState, COPY_FEEDBACK};
pub use rules::{render_nodes, RenderContext};

use maud::{html, Markup};

use crate::chat::{Message, Sender};

/// Render the body of a message. Empty cleaned text renders nothing.
pub fn render_message_text(text: &str, ctx: &RenderContext<'_>) -> Option<Markup> {
    let cleaned = clean_message_text(text);
    if cleaned.is_empty() {
        return None;
    }

    let nodes = markdown::parse(&cleaned);
    Some(render_nodes(&nodes, ctx))
}

/// Render a full transcript entry: avatar, body and sources
pub fn render_message(message: &Message, ctx: &RenderContext<'_>) -> Markup {
    let row_class = match message.sender {
        Sender::Bot => "message message-bot py-6 bg-[#0d0d0d80] rounded-lg",
        Sender::User => "message message-user py-6",
    };
    let body_class = if message.error {
        "prose max-w-none text-[#ff8583]"
    } else {
        "prose max-w-none text-[#fff]"
    };

    html! {
        div class=(row_class) {
            div class="max-w-3xl mx-auto px-4 sm:px-6 flex gap-4" {
                div class="flex-shrink-0 mt-0.5" {
                    (avatar(message.sender))
                }
                div class="flex-1 overflow-hidden" {
                    div class=(body_class) {
                        @if let Some(body) = render_message_text(&message.text, ctx) {
                            (body)
                        }
                    }
                    @if let Some(sources) = message.sources.as_ref().filter(|s| !s.is_empty()) {
                        div class="sources mt-2 text-xs text-[#afafaf]" {
                            span class="mr-1" { "Sources:" }
                            @for (i, source) in sources.iter().enumerate() {
                                @if i > 0 { ", " }
                                span class="source" { (source) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn avatar(sender: Sender) -> Markup {
    match sender {
        Sender::Bot => html! {
            div class="avatar avatar-bot w-8 h-8 rounded-full bg-gradient-to-r from-[#013566] to-[#004f99] flex items-center justify-center text-[#fff]" {
                "▶"
            }
        },
        Sender::User => html! {
            div class="avatar avatar-user w-8 h-8 rounded-full bg-[#303030] flex items-center justify-center text-[#e8e8e8]" {
                "●"
            }
        },
    }
}

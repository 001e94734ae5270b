//! Chat panel view: welcome screen or transcript, then the input form

use maud::{html, Markup};
use tokio::time::Instant;

use crate::chat::ChatPanel;
use crate::render::{render_message, CopyIndicator, RenderContext};

pub fn chat_panel(chat: &ChatPanel, copy: &CopyIndicator, now: Instant) -> Markup {
    let ctx = RenderContext::new(copy, now);

    html! {
        main class="chat-panel flex-1 flex flex-col overflow-hidden" data-revision=(chat.revision()) {
            div class="flex-1 overflow-y-auto" {
                @if chat.transcript().is_empty() {
                    (welcome())
                } @else {
                    div class="space-y-2 pt-4" {
                        @for message in chat.transcript() {
                            (render_message(message, &ctx))
                        }
                    }
                }
                @if chat.is_loading() {
                    div class="thinking max-w-3xl mx-auto px-4 sm:px-6 py-6 text-[#afafaf] animate-pulse" {
                        "Thinking..."
                    }
                }
                div id="latest" {}
            }
            (input_form(chat))
        }
    }
}

fn welcome() -> Markup {
    html! {
        div class="welcome h-full flex flex-col items-center justify-center px-4 text-center" {
            h2 class="text-3xl font-semibold mb-8" { "Ace Your End Sem" }
            div class="grid grid-cols-1 sm:grid-cols-2 gap-4 max-w-xl w-full" {
                div class="rounded-lg border border-[#ffffff26] p-4" {
                    h3 class="font-medium mb-1" { "📚 Revise Topics" }
                    p class="text-sm text-[#afafaf]" { "Ask for summaries and explanations from your course material." }
                }
                div class="rounded-lg border border-[#ffffff26] p-4" {
                    h3 class="font-medium mb-1" { "✍️ Solve Questions" }
                    p class="text-sm text-[#afafaf]" { "Work through past paper questions step by step." }
                }
            }
        }
    }
}

fn input_form(chat: &ChatPanel) -> Markup {
    let loading = chat.is_loading();
    let blank = chat.input().trim().is_empty();

    html! {
        div class="border-t border-[#ffffff1a] p-4" {
            form method="post" action="/chat" class="max-w-3xl mx-auto flex gap-2" {
                input
                    type="text"
                    name="question"
                    value=(chat.input())
                    placeholder="Ask a question about your documents..."
                    autocomplete="off"
                    autofocus
                    disabled[loading]
                    oninput="this.form.querySelector('button').disabled = !this.value.trim()"
                    class="question-input flex-1 rounded-lg bg-[#303030] px-4 py-3 text-[#fff] placeholder-[#8f8f8f] focus:outline-none";
                button
                    type="submit"
                    disabled[loading || blank]
                    class="send-button rounded-lg bg-[#004f99] px-4 py-3 disabled:opacity-50" {
                    "Send"
                }
            }
            p class="mt-2 text-center text-xs text-[#8f8f8f]" {
                "The AI assistant provides answers based on your uploaded documents."
            }
        }
    }
}

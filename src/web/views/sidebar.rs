//! Sidebar view

use maud::{html, Markup};

use crate::config::UiConfig;
use crate::sidebar::{Sidebar, ACCEPTED_UPLOAD_TYPES};

pub fn sidebar(sidebar: &Sidebar, ui: &UiConfig) -> Markup {
    html! {
        aside class="sidebar w-64 flex flex-col bg-[#171717] border-r border-[#ffffff1a]" {
            div class="flex items-center justify-between p-4" {
                h1 class="text-lg font-semibold" { "Prep Bot" }
                form method="post" action="/sidebar/toggle" {
                    button type="submit" class="p-1 rounded hover:bg-[#303030]" aria-label="Close sidebar" { "✕" }
                }
            }

            @if ui.upload_enabled {
                form method="post" action="/upload" enctype="multipart/form-data" class="px-4 pb-4" {
                    input type="file" name="file" accept=(ACCEPTED_UPLOAD_TYPES)
                        disabled[sidebar.is_uploading()]
                        onchange="this.form.submit()";
                    @if sidebar.is_uploading() {
                        p class="mt-2 text-xs text-[#afafaf]" { "Uploading..." }
                    }
                }
            }

            div class="flex-1 overflow-y-auto px-4" {
                h2 class="text-xs uppercase tracking-wide text-[#afafaf] mb-2" { "Documents" }
                @if sidebar.documents().is_empty() {
                    p class="text-sm text-[#8f8f8f]" { "No documents yet" }
                } @else {
                    ul class="space-y-1" {
                        @for doc in sidebar.documents() {
                            li class="document text-sm truncate" title=(doc.name) { (doc.name) }
                        }
                    }
                }
            }

            div class="p-4 text-xs text-[#8f8f8f] border-t border-[#ffffff1a]" {
                "University Knowledge Base"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Document;

    #[test]
    fn test_empty_list_placeholder() {
        let html = sidebar(&Sidebar::new(), &UiConfig::default()).into_string();
        assert!(html.contains("No documents yet"));
        assert!(html.contains("University Knowledge Base"));
        assert!(!html.contains("type=\"file\""));
    }

    #[test]
    fn test_lists_documents_in_order() {
        let mut state = Sidebar::new();
        state.apply_documents(Ok(vec![Document::new("a.pdf"), Document::new("b.txt")]));

        let html = sidebar(&state, &UiConfig::default()).into_string();
        let a = html.find(">a.pdf</li>").unwrap();
        let b = html.find(">b.txt</li>").unwrap();
        assert!(a < b);
        assert!(!html.contains("No documents yet"));
    }

    #[test]
    fn test_upload_control_when_enabled() {
        let ui = UiConfig {
            upload_enabled: true,
            ..UiConfig::default()
        };
        let html = sidebar(&Sidebar::new(), &ui).into_string();
        assert!(html.contains("accept=\".pdf,.txt,.docx\""));
    }
}

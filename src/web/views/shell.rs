//! Shell view: sidebar slot, menu button and the chat panel

use maud::{html, Markup};
use tokio::time::Instant;

use super::{chat_panel, sidebar};
use crate::config::UiConfig;
use crate::web::state::PageState;

pub fn shell(state: &PageState, ui: &UiConfig, now: Instant) -> Markup {
    html! {
        div class="shell flex h-screen" {
            @if state.shell.sidebar_visible() {
                (sidebar(&state.sidebar, ui))
            }
            div class="flex-1 flex flex-col overflow-hidden" {
                @if !state.shell.sidebar_visible() {
                    form method="post" action="/sidebar/toggle" class="absolute top-4 left-4 z-10" {
                        button type="submit" class="menu-button p-2 rounded-md bg-[#303030] hover:bg-[#414141]" aria-label="Open sidebar" {
                            "☰"
                        }
                    }
                }
                (chat_panel(&state.chat, &state.copy, now))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_button_only_when_sidebar_hidden() {
        let mut state = PageState::default();
        let html = shell(&state, &UiConfig::default(), Instant::now()).into_string();
        assert!(html.contains("Documents"));
        assert!(!html.contains("menu-button"));

        state.shell.hide_sidebar();
        let html = shell(&state, &UiConfig::default(), Instant::now()).into_string();
        assert!(!html.contains("Documents"));
        assert!(html.contains("menu-button"));
    }
}

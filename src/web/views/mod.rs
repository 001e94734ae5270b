//! Maud views for the page

mod chat;
mod shell;
mod sidebar;

pub use chat::chat_panel;
pub use shell::shell;
pub use sidebar::sidebar;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use tokio::time::Instant;

use super::state::PageState;
use crate::config::UiConfig;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const KATEX_CSS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.css";
const KATEX_JS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.js";
const KATEX_AUTO_RENDER: &str =
    "https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/contrib/auto-render.min.js";

/// Typesets the `\(..\)` and `\[..\]` spans the renderer emits
const KATEX_INIT: &str = r#"document.addEventListener("DOMContentLoaded", function () {
  if (window.renderMathInElement) {
    renderMathInElement(document.body, {
      delimiters: [
        { left: "\\[", right: "\\]", display: true },
        { left: "\\(", right: "\\)", display: false }
      ],
      throwOnError: false
    });
  }
});"#;

/// Seconds between reloads while something on the page is changing
const REFRESH_SECS: u64 = 1;

/// Base layout: Tailwind and KaTeX from CDNs
pub fn layout(title: &str, refresh: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if refresh {
                    meta http-equiv="refresh" content=(REFRESH_SECS);
                }
                title { (title) }

                script src=(TAILWIND_CDN) {}
                link rel="stylesheet" href=(KATEX_CSS);
                script defer src=(KATEX_JS) {}
                script defer src=(KATEX_AUTO_RENDER) {}
                script { (PreEscaped(KATEX_INIT)) }
            }
            body class="bg-[#212121] text-[#fff] antialiased" {
                (content)
            }
        }
    }
}

/// The whole page. `alert` has already been taken from the sidebar.
pub fn page(state: &PageState, ui: &UiConfig, alert: Option<&str>, now: Instant) -> Markup {
    let refresh = state.chat.is_loading()
        || state.sidebar.is_uploading()
        || state.copy.remaining(now).is_some();

    layout(
        "Prep Bot",
        refresh,
        html! {
            (shell(state, ui, now))
            @if let Some(message) = alert {
                (alert_script(message))
            }
        },
    )
}

fn alert_script(message: &str) -> Markup {
    // serde_json yields a valid JS string literal
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    let literal = literal.replace("</", "<\\/");
    html! {
        script { (PreEscaped(format!("window.alert({literal});"))) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Message;

    #[test]
    fn test_layout_loads_katex() {
        let html = layout("t", false, html! {}).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("auto-render.min.js"));
        assert!(!html.contains("http-equiv"));
    }

    #[test]
    fn test_page_refreshes_while_loading() {
        let mut state = PageState::default();
        let _pending = state.chat.begin_submit("q");

        let html = page(&state, &UiConfig::default(), None, Instant::now()).into_string();
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("Thinking..."));
    }

    #[test]
    fn test_page_alert_is_escaped() {
        let state = PageState::default();
        let html = page(&state, &UiConfig::default(), Some("bad </script> name"), Instant::now())
            .into_string();
        assert!(html.contains("window.alert(\"bad <\\/script> name\");"));
    }

    #[test]
    fn test_idle_page_does_not_refresh() {
        let mut state = PageState::default();
        if let Some(pending) = state.chat.begin_submit("q") {
            state.chat.complete(pending, Ok(crate::backend::Answer {
                answer: "a".to_string(),
                sources: None,
            }));
        }
        let html = page(&state, &UiConfig::default(), None, Instant::now()).into_string();
        assert!(!html.contains("http-equiv"));
        assert_eq!(state.chat.transcript()[1], Message::bot("a", None));
    }
}

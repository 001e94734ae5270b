//! Text cleanup applied to raw answers before markdown parsing.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Echoed "Copy code" affordance text plus the whitespace after it
fn boilerplate() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Copy code\s*").expect("boilerplate pattern is valid"))
}

/// A fenced block holding one short line, with or without a language tag
fn small_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"```([A-Za-z0-9_]*)\s*([^\n`]{1,40})\s*```").expect("fence pattern is valid")
    })
}

/// Strip boilerplate and collapse short fenced blocks to inline code.
///
/// Text containing neither is returned unchanged.
pub fn clean_message_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped = boilerplate().replace_all(text, "");
    small_fence()
        .replace_all(&stripped, |caps: &Captures| format!("`{}`", caps[2].trim()))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_copy_code_anywhere() {
        assert_eq!(
            clean_message_text("Here you go:\nCopy code print(1)"),
            "Here you go:\nprint(1)"
        );
        assert_eq!(clean_message_text("a Copy code b Copy code"), "a b ");
    }

    #[test]
    fn test_copy_code_swallows_newlines() {
        assert_eq!(clean_message_text("python\nCopy code\n\nx = 1"), "python\nx = 1");
    }

    #[test]
    fn test_collapses_small_fence_with_language() {
        assert_eq!(
            clean_message_text("Use ```python\nlen(items)\n``` here"),
            "Use `len(items)` here"
        );
    }

    #[test]
    fn test_collapses_small_fence_without_language() {
        assert_eq!(clean_message_text("```\nfoo bar\n```"), "`foo bar`");
        assert_eq!(clean_message_text("```x```"), "`x`");
    }

    #[test]
    fn test_keeps_multiline_fence() {
        let text = "```python\nx = 1\ny = 2\n```";
        assert_eq!(clean_message_text(text), text);
    }

    #[test]
    fn test_keeps_long_single_line_fence() {
        let line = "a".repeat(41);
        let text = format!("```\n{line}\n```");
        assert_eq!(clean_message_text(&text), text);
    }

    #[test]
    fn test_boilerplate_removed_before_fence_collapse() {
        assert_eq!(
            clean_message_text("```bash\nCopy code\nls -la\n```"),
            "`ls -la`"
        );
    }

    #[test]
    fn test_identity_without_boilerplate_or_small_fences() {
        let text = "# Entropy\n\nEntropy measures **disorder**.\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n$S = k \\ln W$\n";
        assert_eq!(clean_message_text(text), text);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(clean_message_text(""), "");
    }
}

//! Markdown-subset to HTML conversion for questions, explanations and chat replies.
//!
//! Only fenced code blocks, inline code, bold, italic and line breaks are
//! recognised. Substitutions run in a fixed order: code is lifted out into
//! placeholders first so emphasis markers inside code survive untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const SLOT: char = '\u{1}';

static FENCED_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```([A-Za-z0-9_+#.-]*)[ \t]*\n?(.*?)```").expect("Invalid fenced code regex")
});
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("Invalid inline code regex"));
static BOLD_STARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^\n]+?)\*\*").expect("Invalid bold regex"));
static BOLD_UNDERSCORES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__([^\n]+?)__").expect("Invalid bold regex"));
// Emphasis must hug its text, so `2 * 3 * 4` stays arithmetic.
static ITALIC_STAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*([^*\s](?:[^*\n]*[^*\s])?)\*").expect("Invalid italic regex")
});
static ITALIC_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b_([^_\n]+)_\b").expect("Invalid italic regex"));
static SLOT_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x01(\d+)\x01").expect("Invalid placeholder regex"));

/// Convert the supported markdown subset in `input` to HTML.
///
/// `&`, `<` and `>` are escaped before any substitution, so the only markup in
/// the result is the markup produced here.
#[must_use]
pub fn format_text(input: &str) -> String {
    let text = escape_html(&input.replace("\r\n", "\n").replace(SLOT, ""));
    let mut slots: Vec<String> = Vec::new();

    let text = FENCED_CODE.replace_all(&text, |caps: &Captures<'_>| {
        let lang = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str()).trim_end_matches('\n');
        let html = if lang.is_empty() {
            format!("<pre><code>{body}</code></pre>")
        } else {
            format!("<pre><code class=\"language-{lang}\">{body}</code></pre>")
        };
        stash(&mut slots, html)
    });
    let text = INLINE_CODE.replace_all(&text, |caps: &Captures<'_>| {
        stash(&mut slots, format!("<code>{}</code>", &caps[1]))
    });

    let text = BOLD_STARS.replace_all(&text, "<strong>${1}</strong>");
    let text = BOLD_UNDERSCORES.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC_STAR.replace_all(&text, "<em>${1}</em>");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "<em>${1}</em>");
    let text = text.replace('\n', "<br>");

    SLOT_REF
        .replace_all(&text, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|idx| slots.get(idx))
                .cloned()
                .unwrap_or_default()
        })
        .into_owned()
}

fn stash(slots: &mut Vec<String>, html: String) -> String {
    let idx = slots.len();
    slots.push(html);
    format!("{SLOT}{idx}{SLOT}")
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

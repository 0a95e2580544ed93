use std::collections::{HashMap, HashSet};

use quiz_core::format_text;

/// Format backend text for `dangerous_inner_html`.
#[must_use]
pub fn render_markup(input: &str) -> String {
    sanitize_html(&format_text(input))
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = ["br", "em", "strong", "code", "pre"].into_iter().collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("code", ["class"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

//! Markdown Rendering
//!
//! Renders recipe instructions (bold, italic, bullet lists) to HTML
//! via pulldown-cmark.

use pulldown_cmark::{html::push_html, Options, Parser};

/// Render markdown text to an HTML fragment
pub fn to_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let parser = Parser::new_ext(text, Options::empty());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_italic() {
        let html = to_html("Stir in **butter** until *glossy*.");
        assert!(html.contains("<strong>butter</strong>"));
        assert!(html.contains("<em>glossy</em>"));
    }

    #[test]
    fn test_bullet_lists_with_both_markers() {
        let html = to_html("- chop onions\n- heat the pan");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>chop onions</li>"));

        let html = to_html("* chop onions\n* heat the pan");
        assert!(html.contains("<li>heat the pan</li>"));
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(to_html(""), "");
    }
}

use pulldown_cmark::{Options, Parser, html};

/// Turns stored text into display-ready HTML.
pub trait TextRenderer: Send + Sync {
    /// Render `content`. With `inline` set, a lone paragraph is emitted
    /// without its wrapping `<p>` so it can sit inside existing markup.
    fn render(&self, content: &str, inline: bool) -> String;
}

/// CommonMark renderer with the GitHub-flavoured extensions content authors
/// expect (tables, strikethrough, footnotes).
#[derive(Debug, Clone, Copy)]
pub struct Markdown {
    options: Options,
}

impl Markdown {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_FOOTNOTES);
        Self { options }
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer for Markdown {
    fn render(&self, content: &str, inline: bool) -> String {
        let parser = Parser::new_ext(content, self.options);
        let mut rendered = String::with_capacity(content.len() * 3 / 2);
        html::push_html(&mut rendered, parser);

        if inline {
            return unwrap_single_paragraph(rendered);
        }
        rendered
    }
}

fn unwrap_single_paragraph(rendered: String) -> String {
    let trimmed = rendered.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner.to_string(),
        _ => rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_render() {
        let html = Markdown::new().render("# Title\n\nSome *text*.", false);
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Some <em>text</em>.</p>"));
    }

    #[test]
    fn test_inline_unwraps_single_paragraph() {
        let html = Markdown::new().render("Hello **there**", true);
        assert_eq!(html, "Hello <strong>there</strong>");
    }

    #[test]
    fn test_inline_keeps_multiple_blocks() {
        let html = Markdown::new().render("one\n\ntwo", true);
        assert_eq!(html, "<p>one</p>\n<p>two</p>\n");
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(Markdown::new().render("", true), "");
    }

    #[test]
    fn test_raw_html_is_passed_through() {
        let html = Markdown::new().render("<b>bold</b>", false);
        assert!(html.contains("<b>bold</b>"));
    }
}

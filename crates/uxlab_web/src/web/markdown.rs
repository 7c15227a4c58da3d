use pulldown_cmark::{html, Options, Parser};

/// Renders Markdown into HTML for display inside the detail pane.
pub(super) fn render_markdown(md: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(md, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

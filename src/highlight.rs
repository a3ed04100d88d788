use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::{
    highlighting::{Theme, ThemeSet},
    html::highlighted_html_for_string,
    parsing::SyntaxSet,
};

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const CODE_THEME: &str = "base16-eighties.dark";

/// Renders a markdown body to HTML, replacing fenced code blocks with
/// syntect-highlighted `<pre>` blocks.
pub fn render_markdown(source: &str) -> String {
    let events = highlight_code_blocks(Parser::new_ext(source, Options::all()));
    let mut html = String::with_capacity(source.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, events.into_iter());
    html
}

fn highlight_code_blocks<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let theme = &THEMES.themes[CODE_THEME];
    let mut out = Vec::new();
    // (language token, buffered code) while inside a code block
    let mut block: Option<(String, String)> = None;

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(lang) => lang.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                block = Some((lang, String::new()));
            }
            Event::Text(text) if block.is_some() => {
                if let Some((_, code)) = block.as_mut() {
                    code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                let Some((lang, code)) = block.take() else {
                    continue;
                };
                out.push(Event::Html(CowStr::from(highlight_block(&lang, &code, theme))));
            }
            e => out.push(e),
        }
    }
    out
}

fn highlight_block(lang: &str, code: &str, theme: &Theme) -> String {
    let syntax = SYNTAXES
        .find_syntax_by_token(lang)
        .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text());
    highlighted_html_for_string(code, &SYNTAXES, syntax, theme).unwrap_or_else(|e| {
        log::warn!("couldn't highlight {lang:?} block: {e}");
        format!("<pre><code>{}</code></pre>", escape_html(code))
    })
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

use tracing::{debug, warn};

use crate::{
    palette::Palette,
    token::{Token, TokenKind},
};

/// Turns tokens into coloured, escaped, indented HTML fragments.
///
/// Indentation state carries over from one token to the next, so a renderer must see
/// a document's tokens in order.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    indent_level: usize,
    pending_indent: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Renders one token as `pre + <span> + content + </span> + post`.
    pub fn render_token(&mut self, token: &Token) -> String {
        let (color_pre, color_post) = color_tags(token.kind);
        let (whitespace_pre, whitespace_post) = self.whitespace(token.kind);
        let content = escape_html(&token.content);

        format!("{whitespace_pre}{color_pre}{content}{color_post}{whitespace_post}")
    }

    fn whitespace(&mut self, kind: TokenKind) -> (String, &'static str) {
        // One level short: the pending indent adds the last tab itself, and a closing
        // bracket sits one level out from its contents
        let indent = "\t".repeat(self.indent_level.saturating_sub(1));

        let mut pre = if self.pending_indent {
            format!("{indent}\t")
        } else {
            String::new()
        };
        let mut post = "";

        self.pending_indent = false;

        match kind {
            TokenKind::ObjectOpen | TokenKind::ArrayOpen => {
                post = "\n";
                self.indent_level += 1;
                self.pending_indent = true;
            }
            TokenKind::ObjectClose | TokenKind::ArrayClose => {
                pre = format!("\n{indent}");
                self.indent_level = self.indent_level.saturating_sub(1);
            }
            TokenKind::DelimiterPair => {
                pre = " ".to_string();
                post = " ";
            }
            TokenKind::DelimiterMember => {
                post = "\n";
                self.pending_indent = true;
            }
            TokenKind::StringRegular
            | TokenKind::StringEscaped
            | TokenKind::StringClose
            | TokenKind::Number
            | TokenKind::LiteralBoolTrue
            | TokenKind::LiteralBoolFalse
            | TokenKind::LiteralNull => {}
        }

        (pre, post)
    }
}

fn color_tags(kind: TokenKind) -> (String, &'static str) {
    match kind.color() {
        Some(color) => (format!("<span style=\"color:{color}\">"), "</span>"),
        None => (String::new(), ""),
    }
}

/// Replaces the characters HTML treats specially with their entities.
pub fn escape_html(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Renders a whole token sequence into one HTML fragment, without the page around it.
pub fn render(tokens: &[Token]) -> String {
    let mut renderer = Renderer::new();
    let html: String = tokens.iter().map(|t| renderer.render_token(t)).collect();

    debug!(tokens = tokens.len(), bytes = html.len(), "rendered tokens");
    if renderer.indent_level() != 0 {
        warn!(depth = renderer.indent_level(), "unbalanced brackets in input");
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::tokenize;

    fn span(color: &str, content: &str) -> String {
        format!("<span style=\"color:{color}\">{content}</span>")
    }

    #[test]
    fn test_escape() {
        let cases = vec![
            ("plain", "plain"),
            ("<b>", "&lt;b&gt;"),
            ("a & b", "a &amp; b"),
            ("\"quoted\"", "&quot;quoted&quot;"),
            ("it's", "it&apos;s"),
            ("&amp;", "&amp;amp;"),
            ("héllo ✓", "héllo ✓"),
            ("", ""),
        ];

        for (source, expected) in cases {
            assert_eq!(expected, escape_html(source));
        }
    }

    #[test]
    fn test_escape_idempotent_without_specials() {
        let cases = vec!["", "abc", "12.5e+3", "tab\tand\nnewline", "wörld \\u0041"];

        for source in cases {
            assert_eq!(escape_html(source), escape_html(&escape_html(source)));
        }
    }

    #[test]
    fn test_empty_object() {
        let tokens = tokenize("{}");
        assert_eq!(
            vec![TokenKind::ObjectOpen, TokenKind::ObjectClose],
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>()
        );

        let expected = format!("{}\n\n{}", span("#D75F5F", "{"), span("#D75F5F", "}"));
        assert_eq!(expected, render(&tokens));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!("", render(&[]));
    }

    #[test]
    fn test_nested() {
        let tokens = tokenize(r#"{"a":[1,true],"b":{}}"#);
        let expected = [
            span("#D75F5F", "{"),
            "\n\t".to_string(),
            span("#424242", "&quot;"),
            span("#424242", "a&quot;"),
            " ".to_string(),
            span("#005F87", ":"),
            " ".to_string(),
            span("#10A778", "["),
            "\n\t\t".to_string(),
            span("#6855DE", "1"),
            span("#CCCCCC", ","),
            "\n\t\t".to_string(),
            span("#20A5BA", "true"),
            "\n\t".to_string(),
            span("#10A778", "]"),
            span("#CCCCCC", ","),
            "\n\t".to_string(),
            span("#424242", "&quot;"),
            span("#424242", "b&quot;"),
            " ".to_string(),
            span("#005F87", ":"),
            " ".to_string(),
            span("#D75F5F", "{"),
            "\n\n\t".to_string(),
            span("#D75F5F", "}"),
            "\n".to_string(),
            span("#D75F5F", "}"),
        ]
        .concat();

        assert_eq!(expected, render(&tokens));
    }

    #[test]
    fn test_escaped_string_colors() {
        let tokens = tokenize(r#"["<\n>"]"#);
        let expected = [
            span("#10A778", "["),
            "\n\t".to_string(),
            span("#424242", "&quot;"),
            span("#424242", "&lt;"),
            span("#C30771", "\\n"),
            span("#424242", "&gt;&quot;"),
            "\n".to_string(),
            span("#10A778", "]"),
        ]
        .concat();

        assert_eq!(expected, render(&tokens));
    }

    #[test]
    fn test_string_close_color() {
        let tokens = tokenize(r#""\t""#);
        let expected = [
            span("#424242", "&quot;"),
            span("#C30771", "\\t"),
            span("#424242", "&quot;"),
        ]
        .concat();

        assert_eq!(expected, render(&tokens));
    }

    #[test]
    fn test_fragments_per_token() {
        let tokens = tokenize("[null, false]");
        let mut renderer = Renderer::new();
        let fragments: Vec<String> = tokens.iter().map(|t| renderer.render_token(t)).collect();

        assert_eq!(
            vec![
                format!("{}\n", span("#10A778", "[")),
                format!("\t{}", span("#20A5BA", "null")),
                format!("{}\n", span("#CCCCCC", ",")),
                format!("\t{}", span("#20A5BA", "false")),
                format!("\n{}", span("#10A778", "]")),
            ],
            fragments
        );
        assert_eq!(0, renderer.indent_level());
    }

    #[test]
    fn test_unbalanced_close_saturates() {
        let mut renderer = Renderer::new();
        renderer.render_token(&Token::init(TokenKind::ArrayClose, "]"));
        assert_eq!(0, renderer.indent_level());
    }
}

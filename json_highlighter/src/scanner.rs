use tracing::{debug, trace};

use crate::token::{Token, TokenKind};

/// Splits raw JSON bytes into highlighting tokens in a single left-to-right pass.
///
/// The scanner trusts its input to be well-formed JSON and never reports an error.
/// Characters that cannot start a token (whitespace included) are skipped.
///
/// # Panics
///
/// Without the `checked` feature, a string or escape sequence that runs past the end
/// of the input panics on the out-of-bounds read. With `checked` enabled the token is
/// cut short at the end of the input instead.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a [u8],
    token_start: usize,
    current: usize,

    prev: Option<Token>,
    // Set when `prev` is the quote that opened a string, which is the only
    // `StringRegular` ending in `"` that leaves the string open
    prev_opened_string: bool,
}

impl<'a> Scanner<'a> {
    pub fn init(source: &'a [u8]) -> Self {
        Self {
            source,
            token_start: 0,
            current: 0,
            prev: None,
            prev_opened_string: false,
        }
    }

    fn make_token(&mut self, kind: TokenKind) -> Token {
        let start = self.token_start;
        self.token_start = self.current;

        // Literals jump ahead by their full length even if the input is shorter
        if let Some(text) = kind.literal_text() {
            return Token::init(kind, text);
        }

        Token::init(kind, &String::from_utf8_lossy(&self.source[start..self.current]))
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    #[cfg(not(feature = "checked"))]
    fn byte_at(&self, index: usize) -> Option<u8> {
        Some(self.source[index])
    }

    #[cfg(feature = "checked")]
    fn byte_at(&self, index: usize) -> Option<u8> {
        self.source.get(index).copied()
    }

    fn continues_string(&self) -> bool {
        match &self.prev {
            Some(Token {
                kind: TokenKind::StringEscaped,
                ..
            }) => true,
            Some(Token {
                kind: TokenKind::StringRegular,
                content,
            }) => self.prev_opened_string || !content.ends_with('"'),
            _ => false,
        }
    }

    fn prev_kind(&self) -> Option<TokenKind> {
        self.prev.as_ref().map(|token| token.kind)
    }

    fn number(&mut self) -> TokenKind {
        // End of input legitimately ends a top-level number
        while matches!(
            self.source.get(self.current),
            Some(b'-' | b'+' | b'e' | b'E' | b'.' | b'0'..=b'9')
        ) {
            self.current += 1;
        }

        TokenKind::Number
    }

    fn string_run(&mut self) -> TokenKind {
        // Take everything up to an escape (left for the next token) or the closing
        // quote (kept in this one)
        while let Some(c) = self.byte_at(self.current) {
            if c == b'\\' {
                break;
            }

            self.current += 1;
            if c == b'"' {
                break;
            }
        }

        TokenKind::StringRegular
    }

    fn escape(&mut self) -> TokenKind {
        // `\uXXXX` is 4 hex digits past the `u`, anything else is a single character
        let width = match self.byte_at(self.current) {
            Some(b'u') => 5,
            Some(_) => 1,
            None => 0,
        };

        for _ in 0..width {
            if self.byte_at(self.current).is_none() {
                break;
            }
            self.current += 1;
        }

        TokenKind::StringEscaped
    }

    fn string_part(&mut self, c: u8) -> TokenKind {
        match c {
            b'"' if self.prev_kind() == Some(TokenKind::StringEscaped) => TokenKind::StringClose,
            b'"' => TokenKind::StringRegular,
            b'\\' => self.escape(),
            _ => self.string_run(),
        }
    }

    fn symbol(&mut self, c: u8) -> Option<TokenKind> {
        let kind = match c {
            b'{' => TokenKind::ObjectOpen,
            b'}' => TokenKind::ObjectClose,
            b'[' => TokenKind::ArrayOpen,
            b']' => TokenKind::ArrayClose,
            b':' => TokenKind::DelimiterPair,
            b',' => TokenKind::DelimiterMember,
            b'"' => TokenKind::StringRegular,
            b'-' | b'0'..=b'9' => self.number(),
            b't' => TokenKind::LiteralBoolTrue,
            b'f' => TokenKind::LiteralBoolFalse,
            b'n' => TokenKind::LiteralNull,
            _ => return None,
        };

        // Literals are recognised by their first letter alone
        if let Some(text) = kind.literal_text() {
            self.current = self.token_start + text.len();
        }

        Some(kind)
    }

    pub fn next_token(&mut self) -> Option<Token> {
        while !self.is_at_end() {
            self.token_start = self.current;

            let c = self.source[self.current];
            self.current += 1;

            let in_string = self.continues_string();
            let kind = if in_string {
                self.string_part(c)
            } else if let Some(kind) = self.symbol(c) {
                kind
            } else {
                if !c.is_ascii_whitespace() {
                    trace!(byte = c, offset = self.token_start, "skipping unrecognised byte");
                }
                continue;
            };

            let token = self.make_token(kind);
            self.prev_opened_string = !in_string && kind == TokenKind::StringRegular;
            self.prev = Some(token.clone());

            return Some(token);
        }

        None
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenizes a whole JSON document.
pub fn tokenize(source: impl AsRef<[u8]>) -> Vec<Token> {
    let source = source.as_ref();
    let tokens: Vec<Token> = Scanner::init(source).collect();
    debug!(bytes = source.len(), tokens = tokens.len(), "tokenized input");

    tokens
}

use crate::palette::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
}

impl Token {
    pub fn init(kind: TokenKind, content: &str) -> Self {
        Self {
            kind,
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Palette)]
pub enum TokenKind {
    #[color = "#D75F5F"]
    ObjectOpen,
    #[color = "#D75F5F"]
    ObjectClose,

    #[color = "#10A778"]
    ArrayOpen,
    #[color = "#10A778"]
    ArrayClose,

    // `:`
    #[color = "#005F87"]
    DelimiterPair,
    // `,`
    #[color = "#CCCCCC"]
    DelimiterMember,

    #[color = "#424242"]
    StringRegular,
    #[color = "#C30771"]
    StringEscaped,
    // Closing quote of a string that ends straight after an escape
    #[color = "#424242"]
    StringClose,

    #[color = "#6855DE"]
    Number,

    #[color = "#20A5BA"]
    LiteralBoolTrue,
    #[color = "#20A5BA"]
    LiteralBoolFalse,
    #[color = "#20A5BA"]
    LiteralNull,
}

impl TokenKind {
    /// Canonical text of the literal kinds, `None` for everything else
    pub fn literal_text(self) -> Option<&'static str> {
        match self {
            Self::LiteralBoolTrue => Some("true"),
            Self::LiteralBoolFalse => Some("false"),
            Self::LiteralNull => Some("null"),
            _ => None,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::ObjectOpen | Self::ArrayOpen)
    }

    pub fn is_close(self) -> bool {
        matches!(self, Self::ObjectClose | Self::ArrayClose)
    }
}

mod html;
mod palette;
mod render;
mod scanner;
mod token;

pub use html::{FOOTER, HEADER, highlight, write_document};
pub use palette::Palette;
pub use render::{Renderer, escape_html, render};
pub use scanner::{Scanner, tokenize};
pub use token::{Token, TokenKind};

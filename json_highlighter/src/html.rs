use std::io::{self, Write};

use crate::{
    render::{Renderer, render},
    scanner::tokenize,
    token::Token,
};

pub const HEADER: &str = concat!(
    "<!doctype html>\n",
    "<html>\n",
    "\t<head>\n",
    "\t\t<title>Colorized JSON</title>\n",
    "\t</head>\n",
    "\t<body style=\"background-color:#F1F1F1\">\n",
    "\t\t<span style=\"font-family:monospace; tab-size:4; white-space:pre\">\n",
);

pub const FOOTER: &str = "\n\t\t</span>\n\t</body>\n</html>\n";

/// Writes a full HTML page, one fragment per token, between [`HEADER`] and [`FOOTER`].
pub fn write_document<W: Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    out.write_all(HEADER.as_bytes())?;

    let mut renderer = Renderer::new();
    for token in tokens {
        out.write_all(renderer.render_token(token).as_bytes())?;
    }

    out.write_all(FOOTER.as_bytes())
}

/// Highlights a JSON document into a complete HTML page.
pub fn highlight(source: impl AsRef<[u8]>) -> String {
    let tokens = tokenize(source);
    format!("{HEADER}{}{FOOTER}", render(&tokens))
}

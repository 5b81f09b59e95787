pub use json_highlighter_macros::Palette;

/// Colour lookup for a token kind, as a CSS hex colour such as `#D75F5F`.
///
/// Usually derived with `#[derive(Palette)]` and `#[color = "..."]` on each variant.
pub trait Palette {
    fn color(&self) -> Option<&'static str>;
}

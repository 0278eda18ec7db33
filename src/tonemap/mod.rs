use crate::math::Color;

mod clamp;

pub use clamp::{Clamp, MAUVE};

/// Brings a color into the range `write_color` expects. Runs once per pixel, right before output.
pub trait Tonemapper {
    fn map(&self, color: Color) -> Color;
}

/// Hands colors through untouched, so out of range channels reach the writer as is.
#[derive(Copy, Clone, Debug, Default)]
pub struct Passthrough;

impl Tonemapper for Passthrough {
    fn map(&self, color: Color) -> Color {
        color
    }
}

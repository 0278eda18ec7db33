use crate::math::Color;

use tracing::warn;

use super::Tonemapper;

// mauve. universal sign of danger
pub const MAUVE: Color = Color::new(0.88, 0.69, 1.0);

#[derive(Clone, Debug)]
pub struct Clamp {
    exposure: f64,
    silenced: bool,
}

impl Clamp {
    pub fn new(exposure: f64, silenced: bool) -> Self {
        Self { exposure, silenced }
    }
}

impl Default for Clamp {
    fn default() -> Self {
        Self::new(0.0, false)
    }
}

impl Tonemapper for Clamp {
    fn map(&self, color: Color) -> Color {
        if !color.is_finite() {
            if !self.silenced {
                warn!("non-finite color {}, substituting mauve", color);
            }
            return MAUVE;
        }
        // 10^exposure, so an exposure of 0 leaves the color alone
        let scaled = color * 10.0f64.powf(self.exposure);
        // 0 * inf from an overflowing or non-finite exposure. infinite channels still clamp fine.
        if scaled.x().is_nan() || scaled.y().is_nan() || scaled.z().is_nan() {
            if !self.silenced {
                warn!(
                    "exposure {} turned {} into {}, substituting mauve",
                    self.exposure, color, scaled
                );
            }
            return MAUVE;
        }
        Color::new(
            scaled.x().clamp(0.0, 1.0),
            scaled.y().clamp(0.0, 1.0),
            scaled.z().clamp(0.0, 1.0),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::to_pixel;
    use crate::tonemap::Passthrough;

    #[test]
    fn test_clamp_keeps_pixels_in_range() {
        let clamp = Clamp::default();
        let colors = [
            Color::new(-0.5, 2.0, 1.5),
            Color::new(1.0, 0.0, 0.5),
            Color::new(1e10, -1e10, 0.999),
        ];
        for color in colors {
            for c in to_pixel(clamp.map(color)) {
                assert!((0..=255).contains(&c));
            }
        }
        assert_eq!(clamp.map(Color::new(1.0, 0.0, 0.5)), Color::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn test_exposure() {
        let brighter = Clamp::new(1.0, true).map(Color::new(0.05, 0.5, 0.0));
        assert!((brighter.x() - 0.5).abs() < 1e-12);
        assert_eq!(brighter.y(), 1.0);
        assert_eq!(brighter.z(), 0.0);

        let darker = Clamp::new(-1.0, true).map(Color::new(1.0, 1.0, 1.0));
        assert!((darker.x() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_becomes_mauve() {
        let clamp = Clamp::new(0.0, true);
        assert_eq!(clamp.map(Color::new(f64::NAN, 0.0, 0.0)), MAUVE);
        assert_eq!(clamp.map(Color::new(0.0, f64::INFINITY, 0.0)), MAUVE);
    }

    #[test]
    fn test_overflowing_exposure_never_yields_nan() {
        let mapped = Clamp::new(400.0, true).map(Color::new(0.0, 0.5, 0.0));
        assert!(mapped.is_finite());
        assert_eq!(mapped, MAUVE);

        let mapped = Clamp::new(f64::NAN, true).map(Color::new(0.2, 0.5, 0.7));
        assert_eq!(mapped, MAUVE);

        // no zero channel, so nothing becomes NaN and everything saturates
        let mapped = Clamp::new(400.0, true).map(Color::new(0.1, 0.5, -0.1));
        assert_eq!(mapped, Color::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_passthrough() {
        let color = Color::new(-0.5, 2.0, f64::INFINITY);
        assert_eq!(Passthrough.map(color), color);
    }
}

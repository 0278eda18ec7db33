use crate::math::Color;

use std::io::{self, Write};

// 255.999 rather than 256 so that exactly 1.0 lands on 255 and not 256.
const SCALE: f64 = 255.999;

/// Maps each channel to `(255.999 * c)` truncated toward zero.
///
/// Channels outside of [0, 1] are not clamped, so the result can be negative or above 255.
/// NaN maps to 0 and infinities saturate to the bounds of i32.
pub fn to_pixel(color: Color) -> [i32; 3] {
    [
        (SCALE * color.x()) as i32,
        (SCALE * color.y()) as i32,
        (SCALE * color.z()) as i32,
    ]
}

/// Writes one `"R G B\n"` pixel record.
///
/// Holds no state between calls. Clamp with [`crate::tonemap::Clamp`] first if the color
/// may be out of range.
pub fn write_color<W: Write>(out: &mut W, pixel_color: Color) -> io::Result<()> {
    let [r, g, b] = to_pixel(pixel_color);
    writeln!(out, "{} {} {}", r, g, b)
}

#[cfg(test)]
mod test {
    use super::*;

    fn written(color: Color) -> String {
        let mut out = Vec::new();
        write_color(&mut out, color).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_color() {
        assert_eq!(written(Color::new(1.0, 0.0, 0.5)), "255 0 127\n");
        assert_eq!(written(Color::new(0.0, 0.0, 0.0)), "0 0 0\n");
        assert_eq!(written(Color::new(1.0, 1.0, 1.0)), "255 255 255\n");
    }

    #[test]
    fn test_truncation_not_rounding() {
        // 255.999 * 0.9999 = 255.97...
        assert_eq!(to_pixel(Color::new(0.9999, 0.25, 0.75)), [255, 63, 191]);
        assert_eq!(to_pixel(Color::new(0.003, 0.004, 0.0039)), [0, 1, 0]);
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        assert_eq!(written(Color::new(-0.5, 2.0, 1.5)), "-127 511 383\n");
        assert_eq!(
            to_pixel(Color::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY)),
            [0, i32::MAX, i32::MIN]
        );
    }

    #[test]
    fn test_records_are_independent() {
        let mut out = Vec::new();
        for color in [
            Color::new(1.0, 0.0, 0.5),
            Color::new(0.0, 0.0, 0.0),
            Color::new(1.0, 0.0, 0.5),
        ] {
            write_color(&mut out, color).unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "255 0 127\n0 0 0\n255 0 127\n"
        );
    }
}

pub use crate::color::{to_pixel, write_color};
pub use crate::math::{cross, dot, unit_vector, Color, Point3, Vec3};
pub use crate::tonemap::{Clamp, Passthrough, Tonemapper};
pub use crate::renderer::{render, render_pixels};

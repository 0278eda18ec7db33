pub mod color;
pub mod math;
pub mod parsing;
pub mod prelude;
pub mod renderer;
pub mod tonemap;

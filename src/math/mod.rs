mod vec;

pub use vec::{cross, dot, unit_vector, Vec3};

// Same representation, different meaning. Nothing stops one being passed as the other.
pub type Point3 = Vec3;
pub type Color = Vec3;

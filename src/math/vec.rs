use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub};

/// Three f64 components, used for positions, directions and colors alike.
///
/// Nothing here validates its input. Division by zero, normalizing the zero vector
/// and out of range colors all produce whatever IEEE 754 produces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3([f64; 3]);

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3([x, y, z])
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
}

impl Vec3 {
    pub const fn x(&self) -> f64 {
        self.0[0]
    }
    pub const fn y(&self) -> f64 {
        self.0[1]
    }
    pub const fn z(&self) -> f64 {
        self.0[2]
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    /// # Safety
    /// `i` must be 0, 1 or 2.
    pub unsafe fn get_unchecked(&self, i: usize) -> f64 {
        debug_assert!(i < 3);
        *self.0.get_unchecked(i)
    }

    /// # Safety
    /// `i` must be 0, 1 or 2.
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut f64 {
        debug_assert!(i < 3);
        self.0.get_unchecked_mut(i)
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }
}

impl Vec3 {
    /// `+=` that hands the receiver back so calls can be chained.
    pub fn add_in_place(&mut self, other: Vec3) -> &mut Self {
        self.0[0] += other.0[0];
        self.0[1] += other.0[1];
        self.0[2] += other.0[2];
        self
    }

    /// `*=` that hands the receiver back so calls can be chained.
    pub fn scale_in_place(&mut self, t: f64) -> &mut Self {
        self.0[0] *= t;
        self.0[1] *= t;
        self.0[2] *= t;
        self
    }

    pub fn length_squared(&self) -> f64 {
        self.0[0] * self.0[0] + self.0[1] * self.0[1] + self.0[2] * self.0[2]
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn dot(&self, other: Vec3) -> f64 {
        self.0[0] * other.0[0] + self.0[1] * other.0[1] + self.0[2] * other.0[2]
    }

    // anticommutative: a.cross(b) == -b.cross(a)
    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.0[1] * other.0[2] - self.0[2] * other.0[1],
            self.0[2] * other.0[0] - self.0[0] * other.0[2],
            self.0[0] * other.0[1] - self.0[1] * other.0[0],
        )
    }

    /// Elementwise product, used to attenuate colors channel by channel. Not the dot product.
    pub fn hadamard(&self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.0[0] * other.0[0],
            self.0[1] * other.0[1],
            self.0[2] * other.0[2],
        )
    }

    /// Same as [`unit_vector`]. The zero vector comes back as NaNs.
    pub fn normalized(&self) -> Vec3 {
        *self / self.length()
    }

    /// Like [`Vec3::normalized`], but a vector of exactly zero length is returned as is.
    pub fn normalize_or_self(&self) -> Vec3 {
        if self.length() == 0.0 {
            return *self;
        }
        self.normalized()
    }
}

pub fn dot(u: Vec3, v: Vec3) -> f64 {
    u.dot(v)
}

pub fn cross(u: Vec3, v: Vec3) -> Vec3 {
    u.cross(v)
}

pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}

impl Index<usize> for Vec3 {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.0[0], -self.0[1], -self.0[2])
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        self.add_in_place(other);
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, t: f64) {
        self.scale_in_place(t);
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.0[0] + other.0[0],
            self.0[1] + other.0[1],
            self.0[2] + other.0[2],
        )
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.0[0] - other.0[0],
            self.0[1] - other.0[1],
            self.0[2] - other.0[2],
        )
    }
}

impl Mul for Vec3 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        self.hadamard(other)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        Vec3::new(self * other.0[0], self * other.0[1], self * other.0[2])
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f64) -> Vec3 {
        other * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f64) -> Vec3 {
        (1.0 / other) * self
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(other: [f64; 3]) -> Vec3 {
        Vec3(other)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> [f64; 3] {
        v.0
    }
}

/// `"x y z"`, each component in Rust's shortest round trip form (`0.3333333333333333`, `0.0000001`),
/// never the 6 significant digit exponent style of C++ streams.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde_derive::Deserialize;

/// Deserializes from either `[x, y, z]` or `{"x": .., "y": .., "z": ..}`.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn scale(&self, factor: T) -> Vec3<T> {
        Vec3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T: Copy + Sub<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn cross(&self, other: &Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl Vec3<f64> {
    pub const ZERO: Vec3<f64> = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3<f64> = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3<f64> = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3<f64> = Vec3::new(0.0, 0.0, 1.0);

    #[inline]
    pub fn len(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or zero for a zero-length vector.
    #[inline]
    pub fn unit(&self) -> Vec3<f64> {
        let len = self.len();
        if len == 0.0 {
            return Vec3::ZERO;
        }

        Vec3 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }

    #[inline]
    pub fn distance(&self, other: &Vec3<f64>) -> f64 {
        (*self - *other).len()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn add(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Vec3<T> {
    #[inline]
    fn add_assign(&mut self, other: Vec3<T>) {
        *self = *self + other;
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn sub(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, factor: T) -> Self::Output {
        self.scale(factor)
    }
}

#[test]
fn unit_of_zero_is_zero() {
    assert_eq!(Vec3::ZERO, Vec3::ZERO.unit());
}

#[test]
fn cross_of_axes() {
    assert_eq!(Vec3::Z, Vec3::X.cross(&Vec3::Y));
    assert_eq!(-Vec3::X, Vec3::Z.cross(&Vec3::Y));
}

#[test]
fn deserialize_from_array() {
    let v: Vec3<f64> = serde_json::from_str("[1.0, -2.0, 3.5]").unwrap();
    assert_eq!(Vec3::new(1.0, -2.0, 3.5), v);
}

use std::ops::Range;

use crate::vec3::Vec3;

/// Offset applied to the near end of secondary rays so that they do not
/// re-hit the surface they start on.
pub const EPSILON: f64 = 1.0e-6;

/// A half-line `origin + t * direction`, with `direction` always unit length
/// (or zero when constructed from a zero vector, which no primitive will hit).
#[derive(Clone, Debug)]
pub struct Ray<T> {
    origin: Vec3<T>,
    direction: Vec3<T>,
    range: Range<T>,
}

impl Ray<f64> {
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>) -> Self {
        Self::with_range(origin, direction, 0.0..f64::INFINITY)
    }

    pub fn with_range(origin: Vec3<f64>, direction: Vec3<f64>, range: Range<f64>) -> Self {
        Self {
            origin,
            direction: direction.unit(),
            range,
        }
    }

    /// Ray from `from` towards `to`, accepting hits strictly before `to`.
    pub fn segment(from: Vec3<f64>, to: Vec3<f64>) -> Self {
        let d = to - from;
        Self::with_range(from, d, EPSILON..d.len())
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    #[inline]
    pub fn offset(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO || !self.direction.is_finite()
    }
}

impl<T: PartialOrd> Ray<T> {
    /// Whether `t` is an acceptable hit parameter. Zero is never accepted.
    #[inline]
    pub fn contains(&self, t: T) -> bool {
        self.range.start < t && t < self.range.end
    }
}

#[test]
fn direction_is_normalized() {
    let ray = Ray::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0));
    assert!((ray.direction().len() - 1.0).abs() < 1e-12);
    assert_eq!(Vec3::new(0.6, 0.0, 0.8), *ray.direction());
}

#[test]
fn offset_walks_along_direction() {
    let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -10.0));
    assert_eq!(Vec3::new(1.0, 2.0, 1.0), ray.offset(2.0));
}

#[test]
fn zero_direction_is_degenerate() {
    assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_degenerate());
}

#[test]
fn segment_excludes_endpoints() {
    let ray = Ray::segment(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0));
    assert!(!ray.contains(0.0));
    assert!(ray.contains(5.0));
    assert!(!ray.contains(10.0));
}

//! Z-axis aligned pinhole camera.

use crate::{ray::Ray, vec2::Vec2, vec3::Vec3};

/// The rectangle rays are cast through, expressed in the camera's local XY
/// at a fixed world Z.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewPlane {
    pub min: Vec2<f64>,
    pub max: Vec2<f64>,
    pub position_z: f64,
    /// Restricted to the camera's forward axis.
    pub normal: Vec3<f64>,
}

impl ViewPlane {
    pub fn new(min: Vec2<f64>, max: Vec2<f64>, position_z: f64) -> Self {
        Self {
            min,
            max,
            position_z,
            normal: Vec3::Z,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width() / self.height()
    }

    pub fn top_left(&self) -> Vec2<f64> {
        Vec2::new(self.min.x, self.max.y)
    }

    pub fn top_right(&self) -> Vec2<f64> {
        self.max
    }

    pub fn bottom_left(&self) -> Vec2<f64> {
        self.min
    }

    pub fn bottom_right(&self) -> Vec2<f64> {
        Vec2::new(self.max.x, self.min.y)
    }

    /// Maps `(u, v)` in `[0, 1] x [0, 1]` to world space; `(0, 0)` is the
    /// bottom-left corner.
    pub fn to_world(&self, u: f64, v: f64) -> Vec3<f64> {
        Vec3::new(
            u * self.width() + self.min.x,
            v * self.height() + self.min.y,
            self.position_z,
        )
    }
}

impl Default for ViewPlane {
    /// 6x4 plane at z = 5, matching a 3:2 raster such as 1200x800.
    fn default() -> Self {
        ViewPlane::new(Vec2::new(-3.0, -2.0), Vec2::new(3.0, 2.0), 5.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderCam {
    pub position: Vec3<f64>,
    pub aim: Vec3<f64>,
    pub view: ViewPlane,
}

impl RenderCam {
    pub fn new(position: Vec3<f64>, aim: Vec3<f64>, view: ViewPlane) -> Self {
        Self { position, aim, view }
    }

    /// Ray from the eye through `(u, v)` on the view plane.
    pub fn ray(&self, u: f64, v: f64) -> Ray<f64> {
        let point = self.view.to_world(u, v);
        Ray::new(self.position, point - self.position)
    }
}

impl Default for RenderCam {
    fn default() -> Self {
        RenderCam::new(Vec3::new(0.0, 0.0, 25.0), Vec3::new(0.0, 0.0, -1.0), ViewPlane::default())
    }
}

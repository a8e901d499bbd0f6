//! Whitted-style ray casting core: one primary ray per pixel, nearest-hit
//! search over spheres and finite planes, ambient + Lambert + Blinn-Phong
//! shading with hard shadows, and a coarse spotlight.

pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod light;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shading;
pub mod vec2;
pub mod vec3;

pub use crate::camera::{RenderCam, ViewPlane};
pub use crate::color::Color;
pub use crate::config::SceneDescription;
pub use crate::error::{ConfigError, Error};
pub use crate::geometry::{Geometry, Material, Plane, Primitive, Shadows, Shape, Sphere};
pub use crate::intersection::Intersection;
pub use crate::light::{PointLight, SpotLight};
pub use crate::ray::Ray;
pub use crate::render::{Framebuffer, Renderer, Resolution, State};
pub use crate::scene::{DistanceMetric, Hit, Scene};
pub use crate::vec2::Vec2;
pub use crate::vec3::Vec3;

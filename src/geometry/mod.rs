use crate::{color::Color, intersection::Intersection, ray::Ray, vec3::Vec3};

mod plane;
mod sphere;

pub use self::plane::Plane;
pub use self::sphere::Sphere;

pub trait Shape {
    /// Nearest intersection within the ray's range, if any. Never fails:
    /// degenerate configurations are reported as a miss.
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection>;

    /// Reference position of the shape (sphere center, plane patch center).
    fn position(&self) -> Vec3<f64>;
}

/// The closed set of renderable shapes.
#[derive(Copy, Clone, Debug)]
pub enum Geometry {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape for Geometry {
    #[inline]
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection> {
        match self {
            Geometry::Sphere(sphere) => sphere.intersection(ray),
            Geometry::Plane(plane) => plane.intersection(ray),
        }
    }

    #[inline]
    fn position(&self) -> Vec3<f64> {
        match self {
            Geometry::Sphere(sphere) => sphere.position(),
            Geometry::Plane(plane) => plane.position(),
        }
    }
}

impl From<Sphere> for Geometry {
    fn from(sphere: Sphere) -> Self {
        Geometry::Sphere(sphere)
    }
}

impl From<Plane> for Geometry {
    fn from(plane: Plane) -> Self {
        Geometry::Plane(plane)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
}

/// Which side of a shadow test a primitive may take part in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shadows {
    /// May block light travelling towards other primitives.
    pub casts: bool,
    /// Points on this primitive are tested for occlusion before lighting.
    pub receives: bool,
}

impl Shadows {
    /// Backdrop surfaces (planes) receive shadows; objects standing in front
    /// of them (spheres) cast them.
    pub fn default_for(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Sphere(..) => Shadows { casts: true, receives: false },
            Geometry::Plane(..) => Shadows { casts: false, receives: true },
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Primitive {
    pub geometry: Geometry,
    pub material: Material,
    pub shadows: Shadows,
}

impl Primitive {
    pub fn new<G: Into<Geometry>>(geometry: G, material: Material) -> Self {
        let geometry = geometry.into();
        let shadows = Shadows::default_for(&geometry);

        Self {
            geometry,
            material,
            shadows,
        }
    }

    pub fn with_shadows(mut self, shadows: Shadows) -> Self {
        self.shadows = shadows;
        self
    }
}

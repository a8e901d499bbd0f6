use crate::{geometry::Shape, intersection::Intersection, ray::Ray, vec3::Vec3};

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    center: Vec3<f64>,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Vec3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn center(&self) -> Vec3<f64> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Sphere {
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection> {
        if ray.is_degenerate() {
            return None;
        }

        let oc = ray.origin() - self.center;

        // The direction is unit length, so the quadratic's `a` term is 1.
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(&oc) - self.radius.powi(2);

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt = discriminant.sqrt();
        let near = (-b - sqrt) / 2.0;
        let far = (-b + sqrt) / 2.0;

        let t = if ray.contains(near) {
            near
        } else if ray.contains(far) {
            far
        } else {
            return None;
        };

        let point = ray.offset(t);
        let normal = (point - self.center).unit();

        Some(Intersection::new(t, point, normal))
    }

    fn position(&self) -> Vec3<f64> {
        self.center
    }
}

use crate::{geometry::Shape, intersection::Intersection, ray::Ray, vec3::Vec3};

/// A finite rectangular patch of a plane.
///
/// The patch is centered at `point`, oriented by `normal` and spans `width`
/// along its local width axis and `height` along its local height axis. For a
/// horizontal patch (normal along Y) width runs along X and height along Z;
/// for any other orientation width runs along the horizontal in-plane
/// direction and height along the remaining in-plane direction.
///
/// Bounds are exclusive: a point exactly on an edge is a miss.
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    point: Vec3<f64>,
    normal: Vec3<f64>,
    width: f64,
    height: f64,
    width_axis: Vec3<f64>,
    height_axis: Vec3<f64>,
}

impl Plane {
    pub fn new(point: Vec3<f64>, normal: Vec3<f64>, width: f64, height: f64) -> Self {
        let normal = normal.unit();

        let reference = if normal.y.abs() > 0.9 { Vec3::Z } else { Vec3::Y };
        let width_axis = reference.cross(&normal).unit();
        let height_axis = normal.cross(&width_axis);

        Self {
            point,
            normal,
            width,
            height,
            width_axis,
            height_axis,
        }
    }

    #[inline]
    pub fn normal(&self) -> Vec3<f64> {
        self.normal
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether an in-plane point falls inside the rectangular extent.
    pub fn contains(&self, point: &Vec3<f64>) -> bool {
        let local = *point - self.point;

        local.dot(&self.width_axis).abs() < self.width / 2.0
            && local.dot(&self.height_axis).abs() < self.height / 2.0
    }
}

impl Shape for Plane {
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection> {
        let denominator = self.normal.dot(ray.direction());

        if denominator.abs() < 1e-6 {
            return None;
        }

        let p0r0 = self.point - ray.origin();
        let t = p0r0.dot(&self.normal) / denominator;
        if !ray.contains(t) {
            return None;
        }

        let point = ray.offset(t);
        if !self.contains(&point) {
            return None;
        }

        Some(Intersection::new(t, point, self.normal))
    }

    fn position(&self) -> Vec3<f64> {
        self.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Plane {
        Plane::new(Vec3::ZERO, Vec3::Y, 2.0, 4.0)
    }

    fn down_from(x: f64, z: f64) -> Ray<f64> {
        Ray::new(Vec3::new(x, 5.0, z), -Vec3::Y)
    }

    #[test]
    fn hit_inside_extent() {
        let hit = ground().intersection(&down_from(0.5, -1.5)).unwrap();

        assert_eq!(Vec3::new(0.5, 0.0, -1.5), hit.point);
        assert_eq!(Vec3::Y, hit.normal);
        assert_eq!(5.0, hit.t);
    }

    #[test]
    fn miss_outside_extent() {
        // Width is along X, height along Z.
        assert!(ground().intersection(&down_from(1.5, 0.0)).is_none());
        assert!(ground().intersection(&down_from(0.0, 2.5)).is_none());
        assert!(ground().intersection(&down_from(0.0, 1.5)).is_some());
    }

    #[test]
    fn boundary_is_exclusive() {
        assert!(ground().intersection(&down_from(1.0, 0.0)).is_none());
        assert!(ground().intersection(&down_from(0.0, -2.0)).is_none());
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(ground().intersection(&ray).is_none());
    }

    #[test]
    fn plane_behind_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!(ground().intersection(&ray).is_none());
    }

    #[test]
    fn wall_extent_uses_x_and_y() {
        let wall = Plane::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z, 4.0, 2.0);
        let towards = |x: f64, y: f64| Ray::new(Vec3::new(x, y, 0.0), -Vec3::Z);

        assert!(wall.intersection(&towards(1.9, 0.9)).is_some());
        assert!(wall.intersection(&towards(0.0, 1.1)).is_none());
        assert!(wall.intersection(&towards(2.1, 0.0)).is_none());
    }

    #[test]
    fn normal_is_normalized() {
        let plane = Plane::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), 1.0, 1.0);
        assert_eq!(Vec3::Y, plane.normal());
    }
}

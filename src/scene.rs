//! Immutable scene snapshot and the queries a render pass runs against it.

use log::warn;
use serde_derive::Deserialize;

use crate::{
    color::Color,
    geometry::{Primitive, Shape},
    intersection::Intersection,
    light::{PointLight, SpotLight},
    ray::Ray,
    vec3::Vec3,
};

/// How the nearest primitive along a ray is chosen.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Distance from the ray origin to the primitive's reference position.
    ///
    /// This is an approximation: a large ground plane whose center is nearer
    /// to the eye than a sphere will win even where the sphere is in front.
    PrimitivePosition,
    /// Distance from the ray origin to the actual intersection point.
    HitPoint,
}

impl Default for DistanceMetric {
    fn default() -> Self {
        DistanceMetric::PrimitivePosition
    }
}

/// Result of a nearest-hit query. Consumed immediately by the shader.
#[derive(Copy, Clone, Debug)]
pub struct Hit {
    pub index: usize,
    /// The distance the nearest primitive was selected by.
    pub distance: f64,
    pub intersection: Intersection,
}

impl Hit {
    #[inline]
    pub fn point(&self) -> Vec3<f64> {
        self.intersection.point
    }

    #[inline]
    pub fn normal(&self) -> Vec3<f64> {
        self.intersection.normal
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub point_lights: Vec<PointLight>,
    pub spot_lights: Vec<SpotLight>,
    pub background: Color,
    /// Phong shininess exponent.
    pub shininess: f64,
    pub metric: DistanceMetric,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            primitives: Vec::new(),
            point_lights: Vec::new(),
            spot_lights: Vec::new(),
            background,
            shininess: 100.0,
            metric: DistanceMetric::default(),
        }
    }

    pub fn add(&mut self, primitive: Primitive) -> usize {
        self.primitives.push(primitive);
        self.primitives.len() - 1
    }

    pub fn warn_if_degenerate(&self) {
        if self.primitives.is_empty() {
            warn!("scene has no primitives, every pixel will be background");
        }
        if self.point_lights.is_empty() && self.spot_lights.is_empty() {
            warn!("scene has no lights, only ambient shading will be visible");
        }
    }

    /// Tests every primitive and returns the one with the smallest distance
    /// under the scene's metric. On ties the lowest index wins.
    pub fn closest_intersection(&self, ray: &Ray<f64>) -> Option<Hit> {
        let mut closest: Option<Hit> = None;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(intersection) = primitive.geometry.intersection(ray) {
                let distance = match self.metric {
                    DistanceMetric::PrimitivePosition => ray.origin().distance(&primitive.geometry.position()),
                    DistanceMetric::HitPoint => intersection.t,
                };

                if closest.map_or(true, |hit| distance < hit.distance) {
                    closest = Some(Hit {
                        index,
                        distance,
                        intersection,
                    });
                }
            }
        }

        closest
    }

    /// Whether light travelling from `light` to the surface of `receiver` at
    /// `point` is blocked.
    ///
    /// Only receivers that accept shadows are tested, and only primitives that
    /// cast shadows (other than the receiver itself) can block.
    pub fn occluded(&self, receiver: usize, point: Vec3<f64>, light: Vec3<f64>) -> bool {
        let receives = self.primitives.get(receiver).map_or(false, |p| p.shadows.receives);
        if !receives {
            return false;
        }

        let ray = Ray::segment(point, light);

        self.primitives
            .iter()
            .enumerate()
            .filter(|&(index, primitive)| index != receiver && primitive.shadows.casts)
            .any(|(_, primitive)| primitive.geometry.intersection(&ray).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::named,
        geometry::{Material, Plane, Shadows, Sphere},
    };

    fn material() -> Material {
        Material {
            diffuse: named::gray(),
            specular: named::light_gray(),
        }
    }

    fn towards_origin() -> Ray<f64> {
        Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn empty_scene_misses() {
        let scene = Scene::new(Color::BLACK);
        assert!(scene.closest_intersection(&towards_origin()).is_none());
    }

    #[test]
    fn nearest_sphere_wins() {
        let mut scene = Scene::new(Color::BLACK);
        scene.add(Primitive::new(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0), material()));
        scene.add(Primitive::new(Sphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0), material()));

        let hit = scene.closest_intersection(&towards_origin()).unwrap();
        assert_eq!(1, hit.index);
        assert!((hit.distance - 10.0).abs() < 1e-9);
        assert!((hit.point().z - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let mut scene = Scene::new(Color::BLACK);
        scene.add(Primitive::new(Sphere::new(Vec3::ZERO, 1.0), material()));
        scene.add(Primitive::new(Sphere::new(Vec3::ZERO, 2.0), material()));

        let hit = scene.closest_intersection(&towards_origin()).unwrap();
        assert_eq!(0, hit.index);
    }

    #[test]
    fn position_metric_prefers_near_center_over_near_surface() {
        // A wide backdrop behind a sphere: both metrics agree here.
        let mut scene = Scene::new(Color::BLACK);
        scene.add(Primitive::new(
            Plane::new(Vec3::new(0.0, 8.0, -20.0), Vec3::Z, 100.0, 100.0),
            material(),
        ));
        scene.add(Primitive::new(Sphere::new(Vec3::new(0.0, 0.0, -12.0), 1.0), material()));

        let ray = towards_origin();
        let hit = scene.closest_intersection(&ray).unwrap();
        assert_eq!(1, hit.index);

        scene.primitives[0].geometry = Plane::new(Vec3::new(0.0, 3.0, -2.0), Vec3::Z, 100.0, 100.0).into();
        scene.primitives[1].geometry = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 4.0).into();
        // The sphere's surface (z = -1) is in front of the plane (z = -2), but
        // the plane's center is nearer to the eye than the sphere's.
        let approx = scene.closest_intersection(&ray).unwrap();
        assert_eq!(0, approx.index);

        scene.metric = DistanceMetric::HitPoint;
        let exact = scene.closest_intersection(&ray).unwrap();
        assert_eq!(1, exact.index);
        assert!((exact.distance - 11.0).abs() < 1e-9);
    }

    #[test]
    fn sphere_between_plane_and_light_occludes() {
        let mut scene = Scene::new(Color::BLACK);
        let ground = scene.add(Primitive::new(Plane::new(Vec3::ZERO, Vec3::Y, 20.0, 20.0), material()));
        let ball = scene.add(Primitive::new(Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0), material()));

        let light = Vec3::new(0.0, 10.0, 0.0);
        assert!(scene.occluded(ground, Vec3::ZERO, light));

        scene.primitives[ball].geometry = Sphere::new(Vec3::new(5.0, 5.0, 0.0), 1.0).into();
        assert!(!scene.occluded(ground, Vec3::ZERO, light));
    }

    #[test]
    fn occluder_beyond_light_does_not_block() {
        let mut scene = Scene::new(Color::BLACK);
        let ground = scene.add(Primitive::new(Plane::new(Vec3::ZERO, Vec3::Y, 20.0, 20.0), material()));
        scene.add(Primitive::new(Sphere::new(Vec3::new(0.0, 15.0, 0.0), 1.0), material()));

        assert!(!scene.occluded(ground, Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0)));
    }

    #[test]
    fn spheres_do_not_receive_shadows_by_default() {
        let mut scene = Scene::new(Color::BLACK);
        let low = scene.add(Primitive::new(Sphere::new(Vec3::ZERO, 1.0), material()));
        scene.add(Primitive::new(Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0), material()));

        let light = Vec3::new(0.0, 10.0, 0.0);
        assert!(!scene.occluded(low, Vec3::new(0.0, 1.0, 0.0), light));

        scene.primitives[low].shadows = Shadows { casts: true, receives: true };
        assert!(scene.occluded(low, Vec3::new(0.0, 1.0, 0.0), light));
    }

    #[test]
    fn non_casting_primitives_never_block() {
        let mut scene = Scene::new(Color::BLACK);
        let ground = scene.add(Primitive::new(Plane::new(Vec3::ZERO, Vec3::Y, 20.0, 20.0), material()));
        scene.add(
            Primitive::new(Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0), material())
                .with_shadows(Shadows { casts: false, receives: false }),
        );

        assert!(!scene.occluded(ground, Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0)));
    }
}

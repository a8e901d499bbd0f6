//! Local illumination: ambient, Lambert, Blinn-Phong and spotlight terms.
//!
//! All terms return unclamped colors; contributions are summed and only
//! clamped when the framebuffer is converted for output.

use crate::{
    color::Color,
    geometry::{Material, Shape, Sphere},
    light::{PointLight, SpotLight},
    ray::Ray,
    scene::{Hit, Scene},
    vec3::Vec3,
};

/// Fraction of the diffuse color that is always visible.
pub const AMBIENT: f64 = 0.05;

#[inline]
pub fn ambient(diffuse: Color) -> Color {
    diffuse * AMBIENT
}

/// Inverse-square falloff for a light `distance` away.
#[inline]
fn attenuation(intensity: f64, distance: f64) -> f64 {
    intensity / (distance * distance)
}

/// Diffuse term. `distance` is supplied by the caller and only drives the
/// falloff; the light direction is always taken from the light's position.
pub fn lambert(point: Vec3<f64>, normal: Vec3<f64>, diffuse: Color, distance: f64, light: &PointLight) -> Color {
    if distance <= 0.0 {
        return Color::BLACK;
    }

    let l = (light.position - point).unit();
    let cos = normal.dot(&l).max(0.0);

    diffuse * (attenuation(light.intensity, distance) * cos)
}

/// Lambert plus a Blinn-Phong highlight as seen from `eye`. Falloff uses the
/// true light-to-point distance.
pub fn phong(
    point: Vec3<f64>,
    normal: Vec3<f64>,
    material: &Material,
    shininess: f64,
    eye: Vec3<f64>,
    light: &PointLight,
) -> Color {
    let distance = light.position.distance(&point);
    if distance <= 0.0 {
        return Color::BLACK;
    }

    let l = (light.position - point).unit();
    let v = (eye - point).unit();
    let h = (l + v).unit();

    let highlight = normal.dot(&h).max(0.0).powf(shininess);
    let specular = material.specular * (attenuation(light.intensity, distance) * highlight);

    lambert(point, normal, material.diffuse, distance, light) + specular
}

/// Lambert from a spotlight, for points inside its reach.
///
/// A point counts as inside when the line of sight from `eye` to it crosses
/// the sphere of radius [`SpotLight::reach`] around the aim point. This is a
/// coarse stand-in for a proper angular cone test.
pub fn spot_lambert(point: Vec3<f64>, normal: Vec3<f64>, diffuse: Color, eye: Vec3<f64>, light: &SpotLight) -> Color {
    let sight = Ray::new(eye, point - eye);
    let reach = Sphere::new(light.aim, light.reach());

    if reach.intersection(&sight).is_none() {
        return Color::BLACK;
    }

    let distance = light.position.distance(&point);
    lambert(point, normal, diffuse, distance, &light.as_point())
}

/// Full shading of a nearest hit as seen from `eye`.
///
/// Point lights whose path to the hit is blocked contribute nothing;
/// spotlights are never shadow tested.
pub fn shade(scene: &Scene, eye: Vec3<f64>, hit: &Hit) -> Color {
    let material = &scene.primitives[hit.index].material;
    let point = hit.point();
    let normal = hit.normal();

    let mut color = ambient(material.diffuse);

    for light in &scene.point_lights {
        if scene.occluded(hit.index, point, light.position) {
            continue;
        }

        color += phong(point, normal, material, scene.shininess, eye, light);
    }

    for light in &scene.spot_lights {
        color += spot_lambert(point, normal, material.diffuse, eye, light);
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::named,
        geometry::{Plane, Primitive},
    };

    const TOLERANCE: f64 = 1e-9;

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < TOLERANCE && (a.g - b.g).abs() < TOLERANCE && (a.b - b.b).abs() < TOLERANCE
    }

    fn white() -> Material {
        Material {
            diffuse: Color::new(1.0, 1.0, 1.0),
            specular: Color::new(0.5, 0.5, 0.5),
        }
    }

    #[test]
    fn ambient_is_five_percent_of_diffuse() {
        assert!(close(Color::new(0.05, 0.025, 0.0), ambient(Color::new(1.0, 0.5, 0.0))));
    }

    #[test]
    fn lambert_facing_light_with_inverse_square_falloff() {
        let light = PointLight::new(Vec3::new(0.0, 2.0, 0.0), 4.0);
        let c = lambert(Vec3::ZERO, Vec3::Y, Color::new(1.0, 0.5, 0.25), 2.0, &light);

        assert!(close(Color::new(1.0, 0.5, 0.25), c));
    }

    #[test]
    fn lambert_at_grazing_and_back_facing_angles_is_zero() {
        let diffuse = Color::new(1.0, 1.0, 1.0);

        for position in &[Vec3::new(5.0, 0.0, 0.0), Vec3::new(1.0, -1.0, 0.0), Vec3::new(0.0, -3.0, 0.0)] {
            let light = PointLight::new(*position, 10.0);
            let c = lambert(Vec3::ZERO, Vec3::Y, diffuse, position.len(), &light);

            assert_eq!(Color::BLACK, c);
        }
    }

    #[test]
    fn lambert_never_negative() {
        let diffuse = Color::new(1.0, 1.0, 1.0);

        for i in 0..36 {
            let angle = (i as f64 * 10.0).to_radians();
            let light = PointLight::new(Vec3::new(angle.cos(), angle.sin(), 0.0) * 3.0, 1.0);
            let c = lambert(Vec3::ZERO, Vec3::Y, diffuse, 3.0, &light);

            assert!(c.r >= 0.0 && c.g >= 0.0 && c.b >= 0.0);
        }
    }

    #[test]
    fn phong_adds_highlight_along_mirror_direction() {
        let light = PointLight::new(Vec3::new(0.0, 2.0, 0.0), 4.0);
        let eye = Vec3::new(0.0, 10.0, 0.0);

        let c = phong(Vec3::ZERO, Vec3::Y, &white(), 100.0, eye, &light);

        // Half vector equals the normal: full diffuse plus full specular.
        assert!(close(Color::new(1.5, 1.5, 1.5), c));
    }

    #[test]
    fn phong_highlight_fades_off_axis() {
        let light = PointLight::new(Vec3::new(0.0, 2.0, 0.0), 4.0);
        let eye = Vec3::new(10.0, 1.0, 0.0);

        let sharp = phong(Vec3::ZERO, Vec3::Y, &white(), 1000.0, eye, &light);
        let lambert_only = lambert(Vec3::ZERO, Vec3::Y, Color::new(1.0, 1.0, 1.0), 2.0, &light);

        assert!((sharp.r - lambert_only.r).abs() < 1e-6);
    }

    #[test]
    fn spot_outside_reach_is_dark() {
        let eye = Vec3::new(0.0, 0.0, 25.0);
        let light = SpotLight::new(Vec3::new(0.0, 30.0, 0.0), Vec3::new(100.0, 0.0, 0.0), 15.0, 2.0);
        let point = Vec3::new(-10.0, 0.0, 0.0);

        assert_eq!(Color::BLACK, spot_lambert(point, Vec3::Y, Color::new(1.0, 1.0, 1.0), eye, &light));
    }

    #[test]
    fn spot_inside_reach_is_lit_and_falls_off() {
        let eye = Vec3::new(0.0, 0.0, 20.0);
        let diffuse = Color::new(1.0, 1.0, 1.0);
        let near = SpotLight::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, 15.0, 100.0);
        let far = SpotLight {
            position: Vec3::new(0.0, 20.0, 0.0),
            ..near
        };

        let lit = spot_lambert(Vec3::ZERO, Vec3::Y, diffuse, eye, &near);
        assert!(close(Color::new(1.0, 1.0, 1.0), lit));

        let dim = spot_lambert(Vec3::ZERO, Vec3::Y, diffuse, eye, &far);
        assert!(dim.r > 0.0 && dim.r < lit.r);
        assert!((dim.r - 0.25).abs() < TOLERANCE);
    }

    fn shadow_scene(blocker: Vec3<f64>) -> Scene {
        let mut scene = Scene::new(Color::BLACK);
        scene.add(Primitive::new(Plane::new(Vec3::ZERO, Vec3::Y, 20.0, 20.0), white()));
        scene.add(Primitive::new(Sphere::new(blocker, 1.0), white()));
        scene.point_lights.push(PointLight::new(Vec3::new(0.0, 10.0, 0.0), 50.0));
        scene
    }

    fn ground_hit(scene: &Scene, eye: Vec3<f64>) -> Hit {
        let ray = Ray::new(eye, Vec3::ZERO - eye);
        let intersection = scene.primitives[0].geometry.intersection(&ray).unwrap();

        Hit {
            index: 0,
            distance: intersection.t,
            intersection,
        }
    }

    #[test]
    fn blocked_point_light_contributes_nothing() {
        let eye = Vec3::new(0.0, 5.0, 20.0);
        let scene = shadow_scene(Vec3::new(0.0, 5.0, 0.0));

        let c = shade(&scene, eye, &ground_hit(&scene, eye));
        assert!(close(ambient(white().diffuse), c));
    }

    #[test]
    fn clearing_the_path_restores_light() {
        let eye = Vec3::new(0.0, 5.0, 20.0);
        let scene = shadow_scene(Vec3::new(6.0, 5.0, 0.0));

        let c = shade(&scene, eye, &ground_hit(&scene, eye));
        assert!(c.r > ambient(white().diffuse).r);
    }

    #[test]
    fn no_lights_leaves_ambient_only() {
        let eye = Vec3::new(0.0, 5.0, 20.0);
        let mut scene = shadow_scene(Vec3::new(6.0, 5.0, 0.0));
        scene.point_lights.clear();

        let c = shade(&scene, eye, &ground_hit(&scene, eye));
        assert!(close(ambient(white().diffuse), c));
    }

    #[test]
    fn spotlights_are_not_shadow_tested() {
        let eye = Vec3::new(0.0, 5.0, 20.0);
        let mut scene = shadow_scene(Vec3::new(0.0, 5.0, 0.0));
        scene.point_lights.clear();
        scene.spot_lights.push(SpotLight::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, 15.0, 100.0));

        let c = shade(&scene, eye, &ground_hit(&scene, eye));
        assert!(c.r > ambient(white().diffuse).r);
    }

    #[test]
    fn contributions_accumulate_past_one() {
        let eye = Vec3::new(0.0, 5.0, 20.0);
        let mut scene = shadow_scene(Vec3::new(6.0, 5.0, 0.0));
        scene.primitives[0].material.diffuse = named::light_gray();
        scene.point_lights.push(PointLight::new(Vec3::new(0.0, 10.0, 0.0), 500.0));

        let c = shade(&scene, eye, &ground_hit(&scene, eye));
        assert!(c.r > 1.0);
    }
}

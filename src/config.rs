//! JSON scene descriptions.
//!
//! A description is plain data; [`SceneDescription::build`] validates it and
//! produces the immutable snapshot a render pass runs on.

use std::{fs::File, io::BufReader, path::Path};

use log::debug;
use serde_derive::Deserialize;

use crate::{
    camera::{RenderCam, ViewPlane},
    color::{named, Color},
    error::{ConfigError, Error},
    geometry::{Material, Plane, Primitive, Shadows, Sphere},
    light::{PointLight, SpotLight, CONE_HEIGHT},
    render::Resolution,
    scene::{DistanceMetric, Scene},
    vec2::Vec2,
    vec3::Vec3,
};

/// Relative tolerance when comparing raster and view-plane aspect ratios.
const ASPECT_TOLERANCE: f64 = 1e-3;

mod defaults {
    use super::*;

    pub fn shininess() -> f64 {
        100.0
    }

    pub fn sphere_diffuse() -> Color {
        named::light_gray()
    }

    pub fn plane_diffuse() -> Color {
        named::dark_olive_green()
    }

    pub fn specular() -> Color {
        named::light_gray()
    }

    pub fn plane_normal() -> Vec3<f64> {
        Vec3::Y
    }

    pub fn plane_extent() -> f64 {
        20.0
    }

    pub fn intensity() -> f64 {
        0.2
    }

    pub fn half_angle() -> f64 {
        15.0
    }

    pub fn cone_height() -> f64 {
        CONE_HEIGHT
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub background: Color,
    #[serde(default = "defaults::shininess")]
    pub shininess: f64,
    #[serde(default)]
    pub distance_metric: DistanceMetric,
    #[serde(default)]
    pub image: ImageDescription,
    #[serde(default)]
    pub camera: CameraDescription,
    #[serde(default)]
    pub primitives: Vec<PrimitiveDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ImageDescription {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageDescription {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub position: Vec3<f64>,
    pub aim: Vec3<f64>,
    pub view: ViewDescription,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 25.0),
            aim: Vec3::new(0.0, 0.0, -1.0),
            view: ViewDescription::default(),
        }
    }
}

/// View plane rectangle in camera-local XY and its distance from the eye
/// towards -Z.
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ViewDescription {
    pub min: Vec2<f64>,
    pub max: Vec2<f64>,
    pub distance: f64,
}

impl Default for ViewDescription {
    fn default() -> Self {
        Self {
            min: Vec2::new(-3.0, -2.0),
            max: Vec2::new(3.0, 2.0),
            distance: 20.0,
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveDescription {
    Sphere {
        position: Vec3<f64>,
        radius: f64,
        #[serde(default = "defaults::sphere_diffuse")]
        diffuse: Color,
        #[serde(default = "defaults::specular")]
        specular: Color,
        casts_shadows: Option<bool>,
        receives_shadows: Option<bool>,
    },
    Plane {
        position: Vec3<f64>,
        #[serde(default = "defaults::plane_normal")]
        normal: Vec3<f64>,
        #[serde(default = "defaults::plane_extent")]
        width: f64,
        #[serde(default = "defaults::plane_extent")]
        height: f64,
        #[serde(default = "defaults::plane_diffuse")]
        diffuse: Color,
        #[serde(default = "defaults::specular")]
        specular: Color,
        casts_shadows: Option<bool>,
        receives_shadows: Option<bool>,
    },
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightDescription {
    Point {
        position: Vec3<f64>,
        #[serde(default = "defaults::intensity")]
        intensity: f64,
    },
    Spot {
        position: Vec3<f64>,
        aim: Vec3<f64>,
        #[serde(default = "defaults::half_angle")]
        half_angle: f64,
        #[serde(default = "defaults::intensity")]
        intensity: f64,
        #[serde(default = "defaults::cone_height")]
        cone_height: f64,
    },
}

impl SceneDescription {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        let description = serde_json::from_reader(BufReader::new(file))?;

        Ok(description)
    }

    pub fn parse(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Ground plane, a purple sphere, one point light and one spotlight seen
    /// from the default camera.
    pub fn reference() -> Self {
        Self {
            background: Color::BLACK,
            shininess: defaults::shininess(),
            distance_metric: DistanceMetric::default(),
            image: ImageDescription::default(),
            camera: CameraDescription::default(),
            primitives: vec![
                PrimitiveDescription::Plane {
                    position: Vec3::new(0.0, -5.0, 0.0),
                    normal: Vec3::Y,
                    width: 600.0,
                    height: 400.0,
                    diffuse: named::dark_blue(),
                    specular: defaults::specular(),
                    casts_shadows: None,
                    receives_shadows: None,
                },
                PrimitiveDescription::Sphere {
                    position: Vec3::new(0.0, 1.0, -2.0),
                    radius: 1.0,
                    diffuse: named::purple(),
                    specular: defaults::specular(),
                    casts_shadows: None,
                    receives_shadows: None,
                },
            ],
            lights: vec![
                LightDescription::Point {
                    position: Vec3::new(100.0, 150.0, 150.0),
                    intensity: 0.2,
                },
                LightDescription::Spot {
                    position: Vec3::new(-20.0, 30.0, 45.0),
                    aim: Vec3::new(1.0, -5.0, 0.0),
                    half_angle: 15.0,
                    intensity: 0.2,
                    cone_height: CONE_HEIGHT,
                },
            ],
        }
    }

    /// Validates the description and builds the render inputs.
    pub fn build(&self) -> Result<(Scene, RenderCam, Resolution), ConfigError> {
        let resolution = self.resolution()?;
        let camera = self.camera()?;

        let raster = resolution.aspect();
        let view = camera.view.aspect();
        if ((raster - view) / view).abs() > ASPECT_TOLERANCE {
            return Err(ConfigError::AspectMismatch { raster, view });
        }

        if !(self.shininess > 0.0 && self.shininess.is_finite()) {
            return Err(ConfigError::Shininess(self.shininess));
        }

        let mut scene = Scene::new(self.background);
        scene.shininess = self.shininess;
        scene.metric = self.distance_metric;

        for (index, primitive) in self.primitives.iter().enumerate() {
            scene.add(primitive.build(index)?);
        }

        for (index, light) in self.lights.iter().enumerate() {
            match light.build(index)? {
                Light::Point(light) => scene.point_lights.push(light),
                Light::Spot(light) => scene.spot_lights.push(light),
            }
        }

        debug!(
            "built scene: {} primitives, {} point lights, {} spotlights, metric {:?}",
            scene.primitives.len(),
            scene.point_lights.len(),
            scene.spot_lights.len(),
            scene.metric,
        );

        Ok((scene, camera, resolution))
    }

    fn resolution(&self) -> Result<Resolution, ConfigError> {
        let ImageDescription { width, height } = self.image;
        if width == 0 || height == 0 {
            return Err(ConfigError::Resolution { width, height });
        }

        Ok(Resolution::new(width, height))
    }

    fn camera(&self) -> Result<RenderCam, ConfigError> {
        let CameraDescription { position, aim, view } = self.camera;

        // The view plane maps u to +X, which only reads left to right when
        // looking down -Z.
        let aim = aim.unit();
        if aim.x.abs() > 1e-6 || aim.y.abs() > 1e-6 || !(aim.z < 0.0) {
            return Err(ConfigError::CameraAxis);
        }

        let width = view.max.x - view.min.x;
        let height = view.max.y - view.min.y;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::ViewPlane { width, height });
        }
        if !(view.distance > 0.0) {
            return Err(ConfigError::ViewDistance(view.distance));
        }

        let z = position.z - view.distance;

        Ok(RenderCam::new(position, aim, ViewPlane::new(view.min, view.max, z)))
    }
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self::reference()
    }
}

enum Light {
    Point(PointLight),
    Spot(SpotLight),
}

fn shadow_policy(default: Shadows, casts: Option<bool>, receives: Option<bool>) -> Shadows {
    Shadows {
        casts: casts.unwrap_or(default.casts),
        receives: receives.unwrap_or(default.receives),
    }
}

impl PrimitiveDescription {
    fn build(&self, index: usize) -> Result<Primitive, ConfigError> {
        let primitive = match *self {
            PrimitiveDescription::Sphere {
                position,
                radius,
                diffuse,
                specular,
                casts_shadows,
                receives_shadows,
            } => {
                if !(radius > 0.0) {
                    return Err(ConfigError::SphereRadius { index, radius });
                }

                let primitive = Primitive::new(Sphere::new(position, radius), Material { diffuse, specular });
                let shadows = shadow_policy(primitive.shadows, casts_shadows, receives_shadows);
                primitive.with_shadows(shadows)
            }
            PrimitiveDescription::Plane {
                position,
                normal,
                width,
                height,
                diffuse,
                specular,
                casts_shadows,
                receives_shadows,
            } => {
                if !(width > 0.0 && height > 0.0) {
                    return Err(ConfigError::PlaneExtent { index, width, height });
                }
                if !(normal.len() > 0.0) {
                    return Err(ConfigError::PlaneNormal { index });
                }

                let plane = Plane::new(position, normal, width, height);
                let primitive = Primitive::new(plane, Material { diffuse, specular });
                let shadows = shadow_policy(primitive.shadows, casts_shadows, receives_shadows);
                primitive.with_shadows(shadows)
            }
        };

        Ok(primitive)
    }
}

impl LightDescription {
    fn build(&self, index: usize) -> Result<Light, ConfigError> {
        match *self {
            LightDescription::Point { position, intensity } => {
                check_intensity(index, intensity)?;

                Ok(Light::Point(PointLight::new(position, intensity)))
            }
            LightDescription::Spot {
                position,
                aim,
                half_angle,
                intensity,
                cone_height,
            } => {
                check_intensity(index, intensity)?;
                if !(half_angle > 0.0 && half_angle < 90.0) {
                    return Err(ConfigError::SpotAngle { index, angle: half_angle });
                }
                if !(cone_height > 0.0) {
                    return Err(ConfigError::ConeHeight { index, height: cone_height });
                }

                let mut light = SpotLight::new(position, aim, half_angle, intensity);
                light.cone_height = cone_height;

                Ok(Light::Spot(light))
            }
        }
    }
}

fn check_intensity(index: usize, intensity: f64) -> Result<(), ConfigError> {
    if intensity >= 0.0 && intensity.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::LightIntensity { index, intensity })
    }
}

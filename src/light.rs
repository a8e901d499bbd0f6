use crate::vec3::Vec3;

/// Radius of the sphere an editor uses to pick a light.
pub const PICK_RADIUS: f64 = 1.5;

/// Default distance from a spotlight to the base of its cone.
pub const CONE_HEIGHT: f64 = 50.0;

/// Omnidirectional light.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3<f64>,
    pub intensity: f64,
    /// Only used for interactive picking; plays no part in shading.
    pub radius: f64,
}

impl PointLight {
    pub fn new(position: Vec3<f64>, intensity: f64) -> Self {
        Self {
            position,
            intensity,
            radius: PICK_RADIUS,
        }
    }
}

/// Cone light aimed at a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3<f64>,
    pub aim: Vec3<f64>,
    pub half_angle: f64,
    pub intensity: f64,
    pub cone_height: f64,
}

impl SpotLight {
    pub fn new(position: Vec3<f64>, aim: Vec3<f64>, half_angle: f64, intensity: f64) -> Self {
        Self {
            position,
            aim,
            half_angle,
            intensity,
            cone_height: CONE_HEIGHT,
        }
    }

    /// Radius of the cone's base, `tan(half_angle) * cone_height`.
    pub fn cone_radius(&self) -> f64 {
        self.half_angle.to_radians().tan() * self.cone_height
    }

    /// Radius of the sphere around the aim point that stands in for the cone
    /// when deciding whether a point is lit.
    pub fn reach(&self) -> f64 {
        self.cone_height / 2.0
    }

    /// The same light treated as omnidirectional.
    pub fn as_point(&self) -> PointLight {
        PointLight::new(self.position, self.intensity)
    }
}

#[test]
fn cone_radius_follows_half_angle() {
    let spot = SpotLight::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0), 45.0, 1.0);
    assert!((spot.cone_radius() - 50.0).abs() < 1e-9);

    let narrow = SpotLight { half_angle: 15.0, ..spot };
    assert!((narrow.cone_radius() - 13.397_459_621).abs() < 1e-6);
}

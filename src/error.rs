use std::{error, fmt, io};

/// A scene description that cannot be rendered faithfully.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    SphereRadius { index: usize, radius: f64 },
    PlaneExtent { index: usize, width: f64, height: f64 },
    PlaneNormal { index: usize },
    LightIntensity { index: usize, intensity: f64 },
    SpotAngle { index: usize, angle: f64 },
    ConeHeight { index: usize, height: f64 },
    Shininess(f64),
    ViewPlane { width: f64, height: f64 },
    ViewDistance(f64),
    CameraAxis,
    Resolution { width: u32, height: u32 },
    AspectMismatch { raster: f64, view: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigError::SphereRadius { index, radius } => {
                write!(f, "primitive #{}: sphere radius must be positive, got {}", index, radius)
            }
            ConfigError::PlaneExtent { index, width, height } => write!(
                f,
                "primitive #{}: plane extent must be positive, got {}x{}",
                index, width, height
            ),
            ConfigError::PlaneNormal { index } => write!(f, "primitive #{}: plane normal has zero length", index),
            ConfigError::LightIntensity { index, intensity } => {
                write!(f, "light #{}: intensity must not be negative, got {}", index, intensity)
            }
            ConfigError::SpotAngle { index, angle } => write!(
                f,
                "light #{}: spotlight half-angle must be within (0, 90) degrees, got {}",
                index, angle
            ),
            ConfigError::ConeHeight { index, height } => {
                write!(f, "light #{}: cone height must be positive, got {}", index, height)
            }
            ConfigError::Shininess(power) => write!(f, "shininess must be positive, got {}", power),
            ConfigError::ViewPlane { width, height } => {
                write!(f, "view plane must have positive size, got {}x{}", width, height)
            }
            ConfigError::ViewDistance(distance) => {
                write!(f, "view plane distance must be positive, got {}", distance)
            }
            ConfigError::CameraAxis => write!(f, "camera must aim down the negative Z axis"),
            ConfigError::Resolution { width, height } => {
                write!(f, "image size must be positive, got {}x{}", width, height)
            }
            ConfigError::AspectMismatch { raster, view } => write!(
                f,
                "image aspect ratio {:.4} does not match view plane aspect ratio {:.4}",
                raster, view
            ),
        }
    }
}

impl error::Error for ConfigError {}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Json(serde_json::Error),
    Image(image::ImageError),
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {}", err),
            Error::Json(err) => write!(f, "malformed scene: {}", err),
            Error::Image(err) => write!(f, "failed to write image: {}", err),
            Error::Config(err) => write!(f, "invalid scene: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Image(err) => Some(err),
            Error::Config(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

//! Frame driver: one primary ray per pixel, shaded or background.

use std::time::Instant;

use image::{ImageBuffer, Rgb, RgbImage};
use log::{debug, info};
use rayon::prelude::*;

use crate::{camera::RenderCam, color::Color, scene::Scene, shading};

/// Output raster dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    #[inline]
    pub fn pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Normalized view-plane coordinate of the center of pixel `(x, y)`.
    /// Row 0 is the top of the image, so `v` is flipped.
    #[inline]
    pub fn uv(&self, x: u32, y: u32) -> (f64, f64) {
        let u = (x as f64 + 0.5) / self.width as f64;
        let v = 1.0 - (y as f64 + 0.5) / self.height as f64;
        (u, v)
    }
}

/// Row-major grid of unclamped colors.
#[derive(Clone, Debug)]
pub struct Framebuffer {
    resolution: Resolution,
    pixels: Vec<Color>,
}

impl Framebuffer {
    pub fn new(resolution: Resolution, fill: Color) -> Self {
        Self {
            resolution,
            pixels: vec![fill; resolution.pixels()],
        }
    }

    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.resolution.width as usize + x as usize]
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Clamps every channel into 8-bit range.
    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.resolution.width, self.resolution.height, |x, y| self.get(x, y).to_rgb())
    }

    pub fn rgb(&self, x: u32, y: u32) -> Rgb<u8> {
        self.get(x, y).to_rgb()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Idle,
    Rendering,
    Done,
}

/// Drives a render pass over an immutable scene snapshot.
///
/// `Idle -> Rendering -> Done`. A finished frame is handed out with
/// [`Renderer::take`], which returns the driver to `Idle`.
#[derive(Debug)]
pub struct Renderer {
    resolution: Resolution,
    state: State,
    frame: Option<Framebuffer>,
}

impl Renderer {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            state: State::Idle,
            frame: None,
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn transition(&mut self, to: State) {
        debug!("renderer {:?} -> {:?}", self.state, to);
        self.state = to;
    }

    /// Renders every pixel and keeps the result until it is taken. Starting
    /// a new pass discards any frame that was never taken.
    pub fn render(&mut self, scene: &Scene, camera: &RenderCam) -> &Framebuffer {
        if self.frame.is_some() {
            debug!("discarding a frame that was never taken");
        }
        self.transition(State::Rendering);

        info!(
            "rendering {}x{}: {} primitives, {} point lights, {} spotlights",
            self.resolution.width,
            self.resolution.height,
            scene.primitives.len(),
            scene.point_lights.len(),
            scene.spot_lights.len(),
        );
        let now = Instant::now();

        let frame = render_frame(scene, camera, self.resolution);

        info!("finished, elapsed: {} ms", now.elapsed().as_millis());
        self.transition(State::Done);

        self.frame.insert(frame)
    }

    /// Hands the finished frame to the caller.
    pub fn take(&mut self) -> Option<Framebuffer> {
        let frame = self.frame.take();
        if frame.is_some() {
            self.transition(State::Idle);
        }

        frame
    }
}

/// Color seen through pixel `(x, y)`.
pub fn trace(scene: &Scene, camera: &RenderCam, resolution: Resolution, x: u32, y: u32) -> Color {
    let (u, v) = resolution.uv(x, y);
    let ray = camera.ray(u, v);

    scene
        .closest_intersection(&ray)
        .map(|hit| shading::shade(scene, camera.position, &hit))
        .unwrap_or(scene.background)
}

/// Renders a full frame. Rows are shaded in parallel; every pixel depends
/// only on the snapshot and its own coordinates.
pub fn render_frame(scene: &Scene, camera: &RenderCam, resolution: Resolution) -> Framebuffer {
    let mut frame = Framebuffer::new(resolution, scene.background);
    let width = resolution.width as usize;

    if width == 0 {
        return frame;
    }

    frame.pixels.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = trace(scene, camera, resolution, x as u32, y as u32);
        }
    });

    frame
}

//! Sphere-tracing camera
//!
//! The camera casts a `width × height` grid of rays, each with `depth`
//! samples stacked along the viewing direction, and paints the composited
//! colors onto an [`OutputSink`].
//!
//! Orientation is a single heading `facing` in the xy plane, measured
//! clockwise from +y. World z is up; every ray also climbs along w by
//! `ana_slope` per unit of horizontal travel, so the view is a slanted
//! 3D slice through 4D space.

use std::f32::consts::FRAC_PI_2;

use hypermarch_core::{Color, Scene, Vec4};
use log::info;
use rayon::prelude::*;

use crate::composite::composite_samples;
use crate::ray::{MarchSettings, Ray};
use crate::sink::OutputSink;
use crate::RenderError;

/// Projection and marching parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    /// Horizontal field of view in radians
    pub horizontal_fov: f32,
    /// W component of every ray direction before normalization
    pub ana_slope: f32,
    pub march: MarchSettings,
    /// Compute pixels on the rayon thread pool
    pub parallel: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            horizontal_fov: FRAC_PI_2,
            ana_slope: 1.0,
            march: MarchSettings::default(),
            parallel: true,
        }
    }
}

/// Camera that owns its output surface and the scene it renders
pub struct Camera<S: OutputSink> {
    sink: S,
    scene: Scene,
    width: u32,
    depth: u32,
    height: u32,
    facing: f32,
    location: Vec4,
    settings: CameraSettings,
}

impl<S: OutputSink> Camera<S> {
    /// Create a camera with `width × height` logical pixels and `depth`
    /// samples per pixel, facing `facing` radians from +y
    pub fn new(
        sink: S,
        scene: Scene,
        width: u32,
        depth: u32,
        height: u32,
        facing: f32,
        location: Vec4,
    ) -> Self {
        Self {
            sink,
            scene,
            width,
            depth,
            height,
            facing,
            location,
            settings: CameraSettings::default(),
        }
    }

    /// Replace the projection and marching parameters
    pub fn with_settings(mut self, settings: CameraSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Move the camera between frames
    pub fn update_location(&mut self, facing: f32, location: Vec4) {
        self.facing = facing;
        self.location = location;
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access for edits between frames
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Give up the camera and keep the painted surface
    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    #[inline]
    pub fn facing(&self) -> f32 {
        self.facing
    }

    #[inline]
    pub fn location(&self) -> Vec4 {
        self.location
    }

    /// Logical resolution as (width, height, depth)
    pub fn resolution(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.depth)
    }

    /// Unit vector along the heading
    pub fn forward(&self) -> Vec4 {
        heading_forward(self.facing)
    }

    /// Unit vector to the right of the heading
    pub fn right(&self) -> Vec4 {
        heading_right(self.facing)
    }

    /// Ray for logical pixel `(i, j)` and depth sample `k`
    ///
    /// `j` counts upwards from the bottom row.
    pub fn ray(&self, i: u32, j: u32, k: u32) -> Ray<'_> {
        self.projection().ray(i, j, k)
    }

    /// Every ray of the frame, indexed `[i][j][k]`
    pub fn rays(&self) -> Vec<Vec<Vec<Ray<'_>>>> {
        let projection = self.projection();
        (0..self.width)
            .map(|i| {
                (0..self.height)
                    .map(|j| (0..self.depth).map(|k| projection.ray(i, j, k)).collect())
                    .collect()
            })
            .collect()
    }

    /// Composited color of every logical pixel, indexed `[i][j]`
    pub fn pixel_colors(&self) -> Result<Vec<Vec<Color>>, RenderError> {
        let projection = self.projection();
        if self.settings.parallel {
            (0..self.width)
                .into_par_iter()
                .map(|i| projection.column_colors(i))
                .collect()
        } else {
            (0..self.width).map(|i| projection.column_colors(i)).collect()
        }
    }

    /// Render the frame onto the sink
    ///
    /// Nothing is painted when a solid turns out to be malformed.
    pub fn render(&mut self) -> Result<(), RenderError> {
        let (sink_width, sink_height) = self.sink.dimensions();
        info!(
            "Rendering {}x{}x{} rays onto {}x{} surface{}",
            self.width,
            self.height,
            self.depth,
            sink_width,
            sink_height,
            if self.settings.parallel {
                format!(" using {} CPU cores", rayon::current_num_threads())
            } else {
                String::new()
            }
        );
        let start = std::time::Instant::now();

        let colors = self.pixel_colors()?;

        for (i, column) in colors.iter().enumerate() {
            for (j, color) in column.iter().enumerate() {
                let (x0, x1) = scale_span(i as u32, self.width, sink_width);
                let (y0, y1) = scale_span(self.height - j as u32 - 1, self.height, sink_height);
                self.sink.fill_rect(x0, y0, x1 - x0, y1 - y0, color.to_rgba8());
            }
        }

        info!("Frame rendered in {:.2?}", start.elapsed());
        Ok(())
    }

    fn projection(&self) -> Projection<'_> {
        let (w, h) = self.sink.dimensions();
        Projection {
            scene: &self.scene,
            width: self.width,
            depth: self.depth,
            height: self.height,
            facing: self.facing,
            location: self.location,
            settings: self.settings,
            // Device height over device width, 1 for an empty surface
            aspect_ratio: if w == 0 { 1.0 } else { h as f32 / w as f32 },
        }
    }
}

/// Everything needed to cast the frame's rays, without the sink
#[derive(Clone, Copy)]
struct Projection<'a> {
    scene: &'a Scene,
    width: u32,
    depth: u32,
    height: u32,
    facing: f32,
    location: Vec4,
    settings: CameraSettings,
    aspect_ratio: f32,
}

impl<'a> Projection<'a> {
    fn ray(&self, i: u32, j: u32, k: u32) -> Ray<'a> {
        let u = i as f32 - self.width as f32 / 2.0;
        let v = j as f32 - self.height as f32 / 2.0;

        let start = self.location
            + heading_right(self.facing) * u
            + Vec4::Z * v
            + heading_forward(self.facing) * k as f32;

        let fov = self.settings.horizontal_fov;
        let heading = self.facing + u / self.width as f32 * fov;
        let pitch = v / self.height as f32 * fov * self.aspect_ratio;
        let direction = Vec4::new(heading.sin(), heading.cos(), pitch.sin(), self.settings.ana_slope);

        Ray::new(self.scene, start, direction, self.settings.march)
    }

    fn column_colors(&self, i: u32) -> Result<Vec<Color>, RenderError> {
        (0..self.height)
            .map(|j| {
                let samples = (0..self.depth)
                    .map(|k| self.ray(i, j, k).trace())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(composite_samples(&samples))
            })
            .collect()
    }
}

fn heading_forward(facing: f32) -> Vec4 {
    let (sin, cos) = facing.sin_cos();
    Vec4::new(sin, cos, 0.0, 0.0)
}

fn heading_right(facing: f32) -> Vec4 {
    let (sin, cos) = facing.sin_cos();
    Vec4::new(cos, -sin, 0.0, 0.0)
}

/// Device-pixel span `[start, end)` covered by logical cell `index` of `count`
fn scale_span(index: u32, count: u32, device: u32) -> (u32, u32) {
    let scale = |n: u32| (n as u64 * device as u64 / count as u64) as u32;
    (scale(index), scale(index + 1))
}

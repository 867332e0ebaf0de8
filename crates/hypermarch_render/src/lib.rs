//! Sphere-tracing renderer for 4D scenes
//!
//! - [`Camera`] - Casts rays from a pose and paints an [`OutputSink`]
//! - [`Ray`] - Marches through a [`Scene`](hypermarch_core::Scene)
//! - [`blend_colors`] - Alpha compositing of depth samples
//! - [`Framebuffer`] - In-memory RGBA8 sink

pub mod camera;
pub mod composite;
pub mod ray;
pub mod sink;
mod error;

pub use camera::{Camera, CameraSettings};
pub use composite::{blend_colors, composite_samples, ALPHA_EPSILON};
pub use error::RenderError;
pub use ray::{MarchOutcome, MarchSettings, Ray};
pub use sink::{Framebuffer, OutputSink};

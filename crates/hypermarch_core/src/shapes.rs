//! Serializable solid templates
//!
//! SolidTemplate is the scene-file form of a [`Solid`]. Each variant stores
//! the construction parameters plus an optional name and color. Solids are
//! placed directly in world space.

use serde::{Serialize, Deserialize};
use hypermarch_math::{SolveError, Vec4};

use crate::{Color, HyperCube, HyperSphere, Parallelepiped, Solid};

/// Serializable solid template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SolidTemplate {
    /// A 3-cell anchored at `origin` and spanned by three edge vectors
    Parallelepiped {
        #[serde(default)]
        name: Option<String>,
        origin: [f32; 4],
        directions: [[f32; 4]; 3],
        #[serde(default)]
        color: Option<Color>,
    },
    /// An axis-aligned hypercube with its minimum corner at `origin`
    HyperCube {
        #[serde(default)]
        name: Option<String>,
        origin: [f32; 4],
        width: f32,
        #[serde(default)]
        color: Option<Color>,
    },
    /// A hypersphere
    HyperSphere {
        #[serde(default)]
        name: Option<String>,
        center: [f32; 4],
        radius: f32,
        #[serde(default)]
        color: Option<Color>,
    },
}

impl SolidTemplate {
    /// Create the solid described by this template
    ///
    /// Missing colors fall back to the per-variant default.
    pub fn create_solid(&self) -> Result<Solid, SolveError> {
        let solid = match self {
            SolidTemplate::Parallelepiped { origin, directions, color, .. } => {
                Parallelepiped::from_directions(
                    Vec4::from_array(*origin),
                    directions.map(Vec4::from_array),
                    color.unwrap_or(Parallelepiped::DEFAULT_COLOR),
                )?
                .into()
            }
            SolidTemplate::HyperCube { origin, width, color, .. } => HyperCube::new(
                Vec4::from_array(*origin),
                *width,
                color.unwrap_or(HyperCube::DEFAULT_COLOR),
            )?
            .into(),
            SolidTemplate::HyperSphere { center, radius, color, .. } => HyperSphere::new(
                Vec4::from_array(*center),
                *radius,
                color.unwrap_or(HyperSphere::DEFAULT_COLOR),
            )
            .into(),
        };
        Ok(solid)
    }

    /// Create a parallelepiped template
    pub fn parallelepiped(origin: [f32; 4], directions: [[f32; 4]; 3]) -> Self {
        SolidTemplate::Parallelepiped { name: None, origin, directions, color: None }
    }

    /// Create a hypercube template
    pub fn hyper_cube(origin: [f32; 4], width: f32) -> Self {
        SolidTemplate::HyperCube { name: None, origin, width, color: None }
    }

    /// Create a hypersphere template
    pub fn hyper_sphere(center: [f32; 4], radius: f32) -> Self {
        SolidTemplate::HyperSphere { name: None, center, radius, color: None }
    }

    /// Set the name
    pub fn with_name(mut self, new_name: impl Into<String>) -> Self {
        match &mut self {
            SolidTemplate::Parallelepiped { name, .. }
            | SolidTemplate::HyperCube { name, .. }
            | SolidTemplate::HyperSphere { name, .. } => *name = Some(new_name.into()),
        }
        self
    }

    /// Set the color
    pub fn with_color(mut self, new_color: Color) -> Self {
        match &mut self {
            SolidTemplate::Parallelepiped { color, .. }
            | SolidTemplate::HyperCube { color, .. }
            | SolidTemplate::HyperSphere { color, .. } => *color = Some(new_color),
        }
        self
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            SolidTemplate::Parallelepiped { name, .. }
            | SolidTemplate::HyperCube { name, .. }
            | SolidTemplate::HyperSphere { name, .. } => name.as_deref(),
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            SolidTemplate::Parallelepiped { color, .. }
            | SolidTemplate::HyperCube { color, .. }
            | SolidTemplate::HyperSphere { color, .. } => *color,
        }
    }
}

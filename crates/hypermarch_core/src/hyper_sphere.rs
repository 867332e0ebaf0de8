//! 4D hypersphere

use hypermarch_math::{SolveError, Vec4};

use crate::{Color, DistanceField};

/// Solid ball of the given radius around `center`
#[derive(Clone, Debug, PartialEq)]
pub struct HyperSphere {
    center: Vec4,
    radius: f32,
    color: Color,
}

impl HyperSphere {
    /// Default hypersphere color (143, 206, 0)
    pub const DEFAULT_COLOR: Color = Color::new(143.0 / 255.0, 206.0 / 255.0, 0.0, 1.0);

    pub fn new(center: Vec4, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec4 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl DistanceField for HyperSphere {
    /// Distance to the surface, zero anywhere inside
    fn distance_to(&self, point: Vec4) -> Result<f32, SolveError> {
        Ok((self.center.distance(point) - self.radius).max(0.0))
    }

    fn color(&self) -> Color {
        self.color
    }
}

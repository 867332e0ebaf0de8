//! Sphere-tracing rays

use hypermarch_core::{Color, DistanceField, QueryError, Scene, SolveError, Vec4};

use crate::RenderError;

/// Marching limits
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarchSettings {
    /// A nearest distance below this counts as a hit; must be positive
    pub hit_threshold: f32,
    /// Rays that travel this far without a hit miss
    pub max_ray_length: f32,
}

impl Default for MarchSettings {
    fn default() -> Self {
        Self {
            hit_threshold: 0.03,
            max_ray_length: 40.0,
        }
    }
}

/// Result of marching a single ray
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarchOutcome {
    Hit {
        color: Color,
        distance_traveled: f32,
        steps: u32,
    },
    Miss,
}

impl MarchOutcome {
    /// Color the ray contributes, transparent on a miss
    pub fn color(&self) -> Color {
        match self {
            MarchOutcome::Hit { color, .. } => *color,
            MarchOutcome::Miss => Color::TRANSPARENT,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, MarchOutcome::Hit { .. })
    }
}

/// A ray through a scene
#[derive(Clone, Debug)]
pub struct Ray<'a> {
    scene: &'a Scene,
    start: Vec4,
    direction: Vec4,
    settings: MarchSettings,
}

impl<'a> Ray<'a> {
    /// Create a ray; `direction` is normalized
    pub fn new(scene: &'a Scene, start: Vec4, direction: Vec4, settings: MarchSettings) -> Self {
        Self {
            scene,
            start,
            direction: direction.normalized(),
            settings,
        }
    }

    #[inline]
    pub fn start(&self) -> Vec4 {
        self.start
    }

    /// Unit direction
    #[inline]
    pub fn direction(&self) -> Vec4 {
        self.direction
    }

    /// Step along the ray until it hits a surface or runs out of length
    ///
    /// Solids that fail numerically are skipped by the scene query, so they
    /// never hide other solids. An empty scene turns the ray into a miss. A
    /// structurally singular frame means the scene itself is broken and aborts
    /// with [`RenderError::MalformedScene`].
    pub fn march(&self) -> Result<MarchOutcome, RenderError> {
        let mut point = self.start;
        let mut distance_traveled = 0.0;
        let mut steps = 0;

        while distance_traveled < self.settings.max_ray_length {
            let (object, distance) = match self.scene.nearest_object_and_distance(point) {
                Ok(nearest) => nearest,
                Err(e) => {
                    log::trace!("Ray from {:?} stopped at {:?}: {}", self.start, point, e);
                    return outcome_after_query_error(e);
                }
            };
            steps += 1;

            if distance < self.settings.hit_threshold {
                return Ok(MarchOutcome::Hit {
                    color: object.color(),
                    distance_traveled,
                    steps,
                });
            }

            distance_traveled += distance;
            point += self.direction * distance;
        }

        Ok(MarchOutcome::Miss)
    }

    /// Color seen along the ray, transparent on a miss
    pub fn trace(&self) -> Result<Color, RenderError> {
        Ok(self.march()?.color())
    }
}

/// What a failed scene query means for the ray
fn outcome_after_query_error(e: QueryError) -> Result<MarchOutcome, RenderError> {
    match e {
        QueryError::Solver(SolveError::StructuralSingularity) => {
            Err(RenderError::MalformedScene(SolveError::StructuralSingularity))
        }
        QueryError::EmptyScene | QueryError::Solver(SolveError::NumericSingularity { .. }) => {
            Ok(MarchOutcome::Miss)
        }
    }
}

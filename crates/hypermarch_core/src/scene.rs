//! Scene container and nearest-object query
//!
//! The [`Scene`] is an ordered list of solids. Rays query it for the solid
//! nearest to a point; ties go to whichever solid was added first.

use hypermarch_math::{SolveError, Vec4};

use crate::{DistanceField, Solid};

/// Error answering a nearest-object query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryError {
    /// The scene has no objects to measure against
    EmptyScene,
    /// A solid could not project the point into its local frame
    Solver(SolveError),
}

impl From<SolveError> for QueryError {
    fn from(e: SolveError) -> Self {
        QueryError::Solver(e)
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::EmptyScene => write!(f, "Scene has no objects"),
            QueryError::Solver(e) => write!(f, "Distance query failed: {}", e),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Solver(e) => Some(e),
            QueryError::EmptyScene => None,
        }
    }
}

/// The set of solids a camera renders
///
/// Solids are read-only while a frame renders; add or remove them between
/// frames through `objects` or [`Scene::push`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Solids in insertion order
    pub objects: Vec<Solid>,
}

impl Scene {
    /// Create a scene from an initial list of solids
    pub fn new(objects: Vec<Solid>) -> Self {
        Self { objects }
    }

    /// Add a solid to the end of the scene
    pub fn push(&mut self, solid: impl Into<Solid>) {
        self.objects.push(solid.into());
    }

    /// Get the number of solids
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over all solids
    pub fn iter(&self) -> impl Iterator<Item = &Solid> {
        self.objects.iter()
    }

    /// Find the solid nearest to `point` and its distance
    ///
    /// Only a strictly smaller distance replaces the current best, so ties go
    /// to the earlier solid. A solid whose distance is NaN or numerically
    /// singular counts as infinitely far; when no solid reports a finite
    /// distance the first one is returned with `f32::INFINITY`. A structurally
    /// singular solid fails the whole query.
    pub fn nearest_object_and_distance(&self, point: Vec4) -> Result<(&Solid, f32), QueryError> {
        nearest_by(&self.objects, |object| object.distance_to(point))
    }
}

impl FromIterator<Solid> for Scene {
    fn from_iter<I: IntoIterator<Item = Solid>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Solid;
    type IntoIter = std::slice::Iter<'a, Solid>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

/// Linear scan for the item with the smallest distance
fn nearest_by<T>(
    items: &[T],
    distance_to: impl Fn(&T) -> Result<f32, SolveError>,
) -> Result<(&T, f32), QueryError> {
    let (first, rest) = items.split_first().ok_or(QueryError::EmptyScene)?;

    let mut nearest = first;
    let mut best = usable_distance(distance_to(first))?;
    for item in rest {
        let distance = usable_distance(distance_to(item))?;
        if distance < best {
            nearest = item;
            best = distance;
        }
    }

    Ok((nearest, best))
}

/// Map per-solid failures that only affect that solid to `f32::INFINITY`
fn usable_distance(result: Result<f32, SolveError>) -> Result<f32, QueryError> {
    match result {
        Ok(distance) if distance.is_nan() => Ok(f32::INFINITY),
        Ok(distance) => Ok(distance),
        Err(e @ SolveError::NumericSingularity { .. }) => {
            log::trace!("Skipping solid in nearest-object scan: {}", e);
            Ok(f32::INFINITY)
        }
        Err(e @ SolveError::StructuralSingularity) => Err(e.into()),
    }
}

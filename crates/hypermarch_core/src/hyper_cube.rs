//! Axis-aligned 4D hypercube assembled from eight parallelepiped cells

use hypermarch_math::{SolveError, Vec4};

use crate::{Color, DistanceField, Parallelepiped};

/// Cell layout of a unit hypercube: anchor offset and the three edges,
/// both scaled by the cube width at construction
const CELLS: [([f32; 4], [[f32; 4]; 3]); 8] = [
    // w = 0 cap
    ([0.0, 0.0, 0.0, 0.0], [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]]),
    // w = 1 cap
    ([0.0, 0.0, 0.0, 1.0], [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]]),
    // z = 0 (bottom)
    ([0.0, 0.0, 0.0, 0.0], [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0]]),
    // x = 0 (left)
    ([0.0, 0.0, 0.0, 0.0], [[0.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]]),
    // y = 0 (front)
    ([0.0, 0.0, 0.0, 0.0], [[1.0, 0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 0.0]]),
    // z = 1 (top), anchored on the far w corner
    ([0.0, 0.0, 1.0, 1.0], [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 0.0, -1.0]]),
    // y = 1 (back)
    ([0.0, 1.0, 0.0, 0.0], [[1.0, 0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 0.0]]),
    // x = 1 (right)
    ([1.0, 0.0, 0.0, 0.0], [[0.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]]),
];

/// Hypercube spanning `origin .. origin + width` on every axis
///
/// Its boundary is the union of eight 3-cells, each an exact
/// [`Parallelepiped`]. The distance to the cube is the distance to the
/// nearest cell.
#[derive(Clone, Debug, PartialEq)]
pub struct HyperCube {
    origin: Vec4,
    width: f32,
    cells: Vec<Parallelepiped>,
    color: Color,
}

impl HyperCube {
    /// Default hypercube color (227, 141, 51)
    pub const DEFAULT_COLOR: Color = Color::new(227.0 / 255.0, 141.0 / 255.0, 51.0 / 255.0, 1.0);

    /// Create a hypercube from its minimum corner and edge length
    ///
    /// A zero or non-finite width collapses every cell and fails with
    /// [`SolveError::StructuralSingularity`].
    pub fn new(origin: Vec4, width: f32, color: Color) -> Result<Self, SolveError> {
        let cells = CELLS
            .iter()
            .map(|(offset, directions)| {
                Parallelepiped::from_directions(
                    origin + Vec4::from_array(*offset) * width,
                    directions.map(|d| Vec4::from_array(d) * width),
                    color,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            origin,
            width,
            cells,
            color,
        })
    }

    #[inline]
    pub fn origin(&self) -> Vec4 {
        self.origin
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The eight boundary cells
    pub fn cells(&self) -> &[Parallelepiped] {
        &self.cells
    }

    /// Center of the cube
    pub fn center(&self) -> Vec4 {
        self.origin + Vec4::splat(self.width * 0.5)
    }
}

impl DistanceField for HyperCube {
    fn distance_to(&self, point: Vec4) -> Result<f32, SolveError> {
        let mut nearest = f32::INFINITY;
        for cell in &self.cells {
            let distance = cell.distance_to(point)?;
            if distance < nearest {
                nearest = distance;
            }
        }
        Ok(nearest)
    }

    fn color(&self) -> Color {
        self.color
    }
}

//! Oriented 4D parallelepiped, the atomic solid
//!
//! A parallelepiped is the 3-dimensional slab
//! `{ origin + α·AB + β·AC + γ·AD : α, β, γ ∈ [0, 1] }` embedded in 4-space.
//! Distances are found by projecting a point into the local frame
//! `(AB, AC, AD, N)`, where `N` is the unit normal of the slab, and clamping
//! the first three coordinates to the unit cube.

use hypermarch_math::{triple_cross, Row, SolveError, Tableau, Vec4};

use crate::{Color, DistanceField};

/// Frames whose normal is shorter than this (relative to the edge lengths)
/// span less than a 3-flat and cannot be inverted
pub const DEGENERACY_EPSILON: f32 = 1e-6;

/// Where a local coordinate falls relative to `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisRegion {
    Below,
    Within,
    Above,
}

impl AxisRegion {
    /// Classify a single local coordinate
    pub fn of(t: f32) -> Self {
        if t < 0.0 {
            AxisRegion::Below
        } else if t > 1.0 {
            AxisRegion::Above
        } else {
            AxisRegion::Within
        }
    }

    /// Snap `t` onto the boundary of this region
    #[inline]
    pub fn clamp(self, t: f32) -> f32 {
        match self {
            AxisRegion::Below => 0.0,
            AxisRegion::Within => t,
            AxisRegion::Above => 1.0,
        }
    }

    /// True when the coordinate lies outside `[0, 1]`
    #[inline]
    pub fn is_clamped(self) -> bool {
        self != AxisRegion::Within
    }
}

/// Which feature of the unit cube a region touches
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Interior,
    Face,
    Edge,
    Corner,
}

/// One of the 27 regions around the unit cube `[0, 1]³`
///
/// 1 interior, 6 faces, 12 edges and 8 corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoxRegion {
    pub alpha: AxisRegion,
    pub beta: AxisRegion,
    pub gamma: AxisRegion,
}

impl BoxRegion {
    /// Classify local coordinates `(α, β, γ)`
    pub fn of(coords: [f32; 3]) -> Self {
        Self {
            alpha: AxisRegion::of(coords[0]),
            beta: AxisRegion::of(coords[1]),
            gamma: AxisRegion::of(coords[2]),
        }
    }

    /// Number of axes outside `[0, 1]`
    pub fn clamped_axes(&self) -> usize {
        [self.alpha, self.beta, self.gamma]
            .iter()
            .filter(|axis| axis.is_clamped())
            .count()
    }

    pub fn kind(&self) -> RegionKind {
        match self.clamped_axes() {
            0 => RegionKind::Interior,
            1 => RegionKind::Face,
            2 => RegionKind::Edge,
            _ => RegionKind::Corner,
        }
    }

    /// Clamp local coordinates onto the cube feature this region faces
    pub fn clamp(&self, coords: [f32; 3]) -> [f32; 3] {
        [
            self.alpha.clamp(coords[0]),
            self.beta.clamp(coords[1]),
            self.gamma.clamp(coords[2]),
        ]
    }
}

/// A 3-parameter affine slab in 4-space
///
/// The edge vectors and the unit normal are computed once at construction
/// and never change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Parallelepiped {
    origin: Vec4,
    edges: [Vec4; 3],
    normal: Vec4,
    color: Color,
}

impl Parallelepiped {
    /// Default parallelepiped color (9, 74, 254)
    pub const DEFAULT_COLOR: Color = Color::new(9.0 / 255.0, 74.0 / 255.0, 254.0 / 255.0, 1.0);

    /// Create a parallelepiped from an anchor corner and three edge vectors
    ///
    /// Fails with [`SolveError::StructuralSingularity`] when the edges do not
    /// span a 3-flat (zero volume), and with
    /// [`SolveError::NumericSingularity`] when the frame is too ill-conditioned
    /// to invert. A frame accepted here projects every point: pivots depend on
    /// the edges alone, never on the query point.
    pub fn from_directions(
        origin: Vec4,
        directions: [Vec4; 3],
        color: Color,
    ) -> Result<Self, SolveError> {
        if Self::is_degenerate_frame(directions) {
            log::debug!(
                "Rejecting degenerate parallelepiped at {:?} with edges {:?}",
                origin,
                directions
            );
            return Err(SolveError::StructuralSingularity);
        }

        let [b, c, d] = directions;
        let slab = Self {
            origin,
            edges: directions,
            normal: triple_cross(b, c, d).normalized(),
            color,
        };

        if let Err(e) = slab.local_coordinates(origin) {
            log::debug!("Rejecting ill-conditioned parallelepiped at {:?}: {}", origin, e);
            return Err(e);
        }
        Ok(slab)
    }

    /// Create a parallelepiped from its anchor corner `a` and the three
    /// corners `b`, `c`, `d` adjacent to it
    pub fn from_corners(corners: [Vec4; 4], color: Color) -> Result<Self, SolveError> {
        let [a, b, c, d] = corners;
        Self::from_directions(a, [b - a, c - a, d - a], color)
    }

    /// True when the three edges are too close to linearly dependent
    pub fn is_degenerate_frame(directions: [Vec4; 3]) -> bool {
        let [b, c, d] = directions;
        let scale = b.length() * c.length() * d.length();
        let volume = triple_cross(b, c, d).length();
        !(scale.is_finite() && scale > 0.0 && volume / scale >= DEGENERACY_EPSILON)
    }

    /// Replace the color, keeping the geometry
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The anchor corner `a`
    #[inline]
    pub fn origin(&self) -> Vec4 {
        self.origin
    }

    /// The edge vectors `AB`, `AC`, `AD`
    #[inline]
    pub fn edges(&self) -> [Vec4; 3] {
        self.edges
    }

    /// Unit normal of the 3-flat spanned by the edges
    #[inline]
    pub fn normal(&self) -> Vec4 {
        self.normal
    }

    /// Point at local coordinates `(α, β, γ)`
    pub fn point_at(&self, coords: [f32; 3]) -> Vec4 {
        let [ab, ac, ad] = self.edges;
        self.origin + ab * coords[0] + ac * coords[1] + ad * coords[2]
    }

    /// Project a point into the local frame
    ///
    /// Solves `origin + α·AB + β·AC + γ·AD + δ·N = point` and returns
    /// `(α, β, γ)`. The offset `δ` along the normal is discarded.
    pub fn local_coordinates(&self, point: Vec4) -> Result<[f32; 3], SolveError> {
        let [ab, ac, ad] = self.edges;
        let n = self.normal;
        let target = point - self.origin;

        let rows = [0, 1, 2, 3].map(|k| Row::new([ab[k], ac[k], ad[k], n[k]], [target[k]]));
        let [alpha, beta, gamma, _delta] = Tableau::from_rows(rows)?.solve()?.firsts();
        Ok([alpha, beta, gamma])
    }

    /// Which of the 27 regions around the slab the point projects into
    pub fn classify(&self, point: Vec4) -> Result<BoxRegion, SolveError> {
        Ok(BoxRegion::of(self.local_coordinates(point)?))
    }

    /// The point on the slab nearest to `point` along its local frame
    ///
    /// Coordinates outside `[0, 1]` snap to the face, edge or corner the
    /// region faces. A point that projects inside the slab maps to its foot
    /// on the 3-flat.
    pub fn nearest_point(&self, point: Vec4) -> Result<Vec4, SolveError> {
        let coords = self.local_coordinates(point)?;
        Ok(self.point_at(BoxRegion::of(coords).clamp(coords)))
    }

    /// True when the point projects inside the slab
    pub fn contains_point(&self, point: Vec4) -> Result<bool, SolveError> {
        Ok(self.classify(point)?.kind() == RegionKind::Interior)
    }
}

impl DistanceField for Parallelepiped {
    fn distance_to(&self, point: Vec4) -> Result<f32, SolveError> {
        Ok((self.nearest_point(point)? - point).length())
    }

    fn color(&self) -> Color {
        self.color
    }
}

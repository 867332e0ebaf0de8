//! Small square matrices (2x2 and 3x3)
//!
//! Matrices are column-major arrays: `m[col][row]`. They only exist to back the
//! cofactor expansion that produces the normal of a 3-flat in 4D space, so the
//! API is deliberately small: determinant, inverse, transpose, transform.

use crate::{Vec3, Vec4};

/// 2x2 matrix type (column-major)
pub type Mat2 = [[f32; 2]; 2];

/// 3x3 matrix type (column-major)
pub type Mat3 = [[f32; 3]; 3];

/// 3x3 identity matrix
pub const IDENTITY3: Mat3 = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Build a 3x3 matrix from three column vectors
#[inline]
pub fn from_columns3(c0: Vec3, c1: Vec3, c2: Vec3) -> Mat3 {
    [
        [c0.x, c0.y, c0.z],
        [c1.x, c1.y, c1.z],
        [c2.x, c2.y, c2.z],
    ]
}

/// Get a column vector from a 3x3 matrix
#[inline]
pub fn column3(m: Mat3, col: usize) -> Vec3 {
    Vec3::new(m[col][0], m[col][1], m[col][2])
}

/// Determinant of a 2x2 matrix
#[inline]
pub fn det2(m: Mat2) -> f32 {
    m[0][0] * m[1][1] - m[1][0] * m[0][1]
}

/// Determinant of a 3x3 matrix, as the scalar triple product of its columns
#[inline]
pub fn det3(m: Mat3) -> f32 {
    column3(m, 0).dot(column3(m, 1).cross(column3(m, 2)))
}

/// Transpose a 2x2 matrix
pub fn transpose2(m: Mat2) -> Mat2 {
    [
        [m[0][0], m[1][0]],
        [m[0][1], m[1][1]],
    ]
}

/// Transpose a 3x3 matrix
pub fn transpose3(m: Mat3) -> Mat3 {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

/// Inverse of a 2x2 matrix, or `None` when it is singular
pub fn inverse2(m: Mat2) -> Option<Mat2> {
    let det = det2(m);
    if det == 0.0 || !det.is_finite() {
        return None;
    }

    Some([
        [m[1][1] / det, -m[0][1] / det],
        [-m[1][0] / det, m[0][0] / det],
    ])
}

/// Inverse of a 3x3 matrix, or `None` when it is singular
///
/// The rows of the inverse are the pairwise cross products of the columns,
/// divided by the determinant.
pub fn inverse3(m: Mat3) -> Option<Mat3> {
    let (c0, c1, c2) = (column3(m, 0), column3(m, 1), column3(m, 2));
    let det = det3(m);
    if det == 0.0 || !det.is_finite() {
        return None;
    }

    let inv_det = 1.0 / det;
    let rows = from_columns3(
        c1.cross(c2) * inv_det,
        c2.cross(c0) * inv_det,
        c0.cross(c1) * inv_det,
    );
    Some(transpose3(rows))
}

/// Transform a Vec3 by a 3x3 matrix (column-major)
///
/// result = M * v
pub fn transform3(m: Mat3, v: Vec3) -> Vec3 {
    column3(m, 0) * v.x + column3(m, 1) * v.y + column3(m, 2) * v.z
}

/// Vector orthogonal to the three given 4D vectors (the 4D "cross product")
///
/// Formal cofactor expansion of the determinant
/// ```text
/// | e1  e2  e3  e4 |
/// | b.x b.y b.z b.w|
/// | c.x c.y c.z c.w|
/// | d.x d.y d.z d.w|
/// ```
/// along its first row. The result is zero when `b`, `c`, `d` are linearly
/// dependent, and its length equals the 3-volume they span otherwise.
pub fn triple_cross(b: Vec4, c: Vec4, d: Vec4) -> Vec4 {
    // Components kept by the minor that drops component `i`
    const KEEP: [[usize; 3]; 4] = [[1, 2, 3], [0, 2, 3], [0, 1, 3], [0, 1, 2]];

    let minor = |skip: usize| -> f32 {
        let [i, j, k] = KEEP[skip];
        let pick = |v: Vec4| Vec3::new(v[i], v[j], v[k]);
        det3(from_columns3(pick(b), pick(c), pick(d)))
    };

    Vec4::new(minor(0), -minor(1), minor(2), -minor(3))
}

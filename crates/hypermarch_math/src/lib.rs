//! 4D Mathematics Library
//!
//! This crate provides the numeric building blocks for the hypermarch renderer.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] - 3D vector, used as matrix columns
//! - [`mat`] - 2x2 / 3x3 determinants, inverses and the 4D triple cross product
//!
//! ## Linear Systems
//!
//! - [`Tableau`] - Gauss-Jordan solver with pivot-safe row ordering
//! - [`SolveError`] - Structural or numeric singularity

mod vec4;
mod vec3;
pub mod mat;
pub mod tableau;

pub use vec4::Vec4;
pub use vec3::Vec3;
pub use mat::{Mat2, Mat3, triple_cross};
pub use tableau::{Row, Solution, SolveError, Tableau, PIVOT_EPSILON};

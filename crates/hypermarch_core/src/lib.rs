//! Solids and scenes for the hypermarch renderer
//!
//! This crate provides everything a ray needs to measure distance:
//!
//! - [`Color`] - RGBA color with channels in `[0, 1]`
//! - [`DistanceField`] - Distance-to-point and color capability
//! - [`Parallelepiped`] - Oriented 3-cell in 4D, the atomic solid
//! - [`HyperCube`] - Hypercube assembled from eight parallelepipeds
//! - [`HyperSphere`] - Hypersphere
//! - [`Solid`] - The closed set of solids a scene holds
//! - [`Scene`] - Ordered solids with a nearest-object query
//! - [`SolidTemplate`] / [`SceneTemplate`] - Scene file representation
//! - [`SceneValidator`] - Checks templates before instantiation

mod color;
mod parallelepiped;
mod hyper_cube;
mod hyper_sphere;
mod solid;
mod scene;
mod shapes;
pub mod scene_template;
pub mod scene_validator;

pub use color::Color;
pub use parallelepiped::{AxisRegion, BoxRegion, Parallelepiped, RegionKind, DEGENERACY_EPSILON};
pub use hyper_cube::HyperCube;
pub use hyper_sphere::HyperSphere;
pub use solid::{DistanceField, Solid};
pub use scene::{QueryError, Scene};
pub use shapes::SolidTemplate;
pub use scene_template::{CameraPose, SceneLoadError, SceneTemplate};
pub use scene_validator::{SceneValidator, ValidationError};

// Re-export commonly used types from hypermarch_math for convenience
pub use hypermarch_math::{SolveError, Vec4};

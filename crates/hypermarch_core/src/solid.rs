//! The closed set of renderable solids

use hypermarch_math::{SolveError, Vec4};

use crate::{Color, HyperCube, HyperSphere, Parallelepiped};

/// Something a ray can march towards
///
/// `distance_to` must never overestimate the distance to the surface, or a
/// marching ray could step through it.
pub trait DistanceField: Send + Sync {
    /// Unsigned distance from `point` to the surface
    fn distance_to(&self, point: Vec4) -> Result<f32, SolveError>;

    /// Color reported when a ray hits this surface
    fn color(&self) -> Color;
}

/// A solid in the scene
#[derive(Clone, Debug, PartialEq)]
pub enum Solid {
    Parallelepiped(Parallelepiped),
    HyperCube(HyperCube),
    HyperSphere(HyperSphere),
}

impl Solid {
    /// Human-readable name of the variant
    pub fn kind_name(&self) -> &'static str {
        match self {
            Solid::Parallelepiped(_) => "Parallelepiped",
            Solid::HyperCube(_) => "HyperCube",
            Solid::HyperSphere(_) => "HyperSphere",
        }
    }
}

impl DistanceField for Solid {
    fn distance_to(&self, point: Vec4) -> Result<f32, SolveError> {
        match self {
            Solid::Parallelepiped(p) => p.distance_to(point),
            Solid::HyperCube(c) => c.distance_to(point),
            Solid::HyperSphere(s) => s.distance_to(point),
        }
    }

    fn color(&self) -> Color {
        match self {
            Solid::Parallelepiped(p) => p.color(),
            Solid::HyperCube(c) => c.color(),
            Solid::HyperSphere(s) => s.color(),
        }
    }
}

impl From<Parallelepiped> for Solid {
    fn from(p: Parallelepiped) -> Self {
        Solid::Parallelepiped(p)
    }
}

impl From<HyperCube> for Solid {
    fn from(c: HyperCube) -> Self {
        Solid::HyperCube(c)
    }
}

impl From<HyperSphere> for Solid {
    fn from(s: HyperSphere) -> Self {
        Solid::HyperSphere(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        let sphere = HyperSphere::new(Vec4::ZERO, 1.0, HyperSphere::DEFAULT_COLOR);
        let solid = Solid::from(sphere.clone());
        assert_eq!(solid.kind_name(), "HyperSphere");
        assert_eq!(solid.color(), sphere.color());
        assert_eq!(
            solid.distance_to(Vec4::new(3.0, 0.0, 0.0, 0.0)).unwrap(),
            sphere.distance_to(Vec4::new(3.0, 0.0, 0.0, 0.0)).unwrap()
        );
    }

    #[test]
    fn test_kind_names() {
        let cube = HyperCube::new(Vec4::ZERO, 1.0, Color::WHITE).unwrap();
        assert_eq!(Solid::from(cube).kind_name(), "HyperCube");

        let slab = Parallelepiped::from_directions(
            Vec4::ZERO,
            [Vec4::X, Vec4::Y, Vec4::W],
            Color::WHITE,
        )
        .unwrap();
        assert_eq!(Solid::from(slab).kind_name(), "Parallelepiped");
    }
}

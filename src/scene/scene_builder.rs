//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for building 4D scenes. Solids are collected as
//! templates and only built (and validated) in [`SceneBuilder::build`].

use hypermarch_core::{Color, Scene, SceneLoadError, SceneTemplate, SolidTemplate, Vec4};

/// Builder for constructing 4D scenes
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new("cubes")
///     .add_hyper_cube(Vec4::new(-5.0, 5.0, -5.0, 0.0), 10.0, "small")
///     .add_hyper_sphere(Vec4::new(15.0, 10.0, 9.0, 10.0), 4.0, "ball")
///     .build()?;
/// ```
pub struct SceneBuilder {
    template: SceneTemplate,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            template: SceneTemplate::new(name),
        }
    }

    /// Start from an existing template, e.g. one loaded from disk
    pub fn from_template(template: SceneTemplate) -> Self {
        Self { template }
    }

    /// The demo scene: two hypercubes and a hypersphere
    ///
    /// It carries no camera pose, so the configured camera applies.
    pub fn demo() -> Self {
        Self::new("demo")
            .add_hyper_cube(Vec4::new(-5.0, 5.0, -5.0, 0.0), 10.0, "near_cube")
            .add_hyper_cube_with_color(
                Vec4::new(-10.0, 15.0, -7.0, 0.0),
                20.0,
                "far_cube",
                Color::from_rgb255(201.0, 240.0, 124.0, 1.0),
            )
            .add_hyper_sphere(Vec4::new(15.0, 10.0, 9.0, 10.0), 4.0, "ball")
    }

    /// Add a hypercube with its minimum corner at `origin`
    pub fn add_hyper_cube(self, origin: Vec4, width: f32, name: &str) -> Self {
        self.add_solid(SolidTemplate::hyper_cube(origin.to_array(), width).with_name(name))
    }

    /// Add a hypercube with a custom color
    pub fn add_hyper_cube_with_color(self, origin: Vec4, width: f32, name: &str, color: Color) -> Self {
        self.add_solid(
            SolidTemplate::hyper_cube(origin.to_array(), width)
                .with_name(name)
                .with_color(color),
        )
    }

    /// Add a hypersphere
    pub fn add_hyper_sphere(self, center: Vec4, radius: f32, name: &str) -> Self {
        self.add_solid(SolidTemplate::hyper_sphere(center.to_array(), radius).with_name(name))
    }

    /// Add a parallelepiped anchored at `origin` with edges `directions`
    pub fn add_parallelepiped(self, origin: Vec4, directions: [Vec4; 3], name: &str) -> Self {
        self.add_solid(
            SolidTemplate::parallelepiped(origin.to_array(), directions.map(Vec4::to_array))
                .with_name(name),
        )
    }

    /// Add any solid template
    ///
    /// For solids that don't fit the standard patterns.
    pub fn add_solid(mut self, solid: SolidTemplate) -> Self {
        self.template.add_object(solid);
        self
    }

    /// Set the initial camera pose
    pub fn with_camera(mut self, facing_degrees: f32, location: Vec4) -> Self {
        self.template = self.template.with_camera(facing_degrees, location.to_array());
        self
    }

    /// The template collected so far
    pub fn template(&self) -> &SceneTemplate {
        &self.template
    }

    /// Validate the collected solids and build the scene
    pub fn build(self) -> Result<Scene, SceneLoadError> {
        self.template.instantiate()
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new("untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypermarch_core::{DistanceField, HyperCube, HyperSphere};

    #[test]
    fn test_empty_scene_is_rejected() {
        let result = SceneBuilder::default().build();
        assert!(matches!(result, Err(SceneLoadError::Invalid(_))));
    }

    #[test]
    fn test_scene_with_hyper_cube() {
        let scene = SceneBuilder::new("cube")
            .add_hyper_cube(Vec4::ZERO, 2.0, "cube")
            .build()
            .unwrap();

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.objects[0].color(), HyperCube::DEFAULT_COLOR);
    }

    #[test]
    fn test_scene_with_parallelepiped() {
        let scene = SceneBuilder::new("slab")
            .add_parallelepiped(Vec4::ZERO, [Vec4::X, Vec4::Y, Vec4::W], "slab")
            .build()
            .unwrap();

        assert_eq!(scene.objects[0].kind_name(), "Parallelepiped");
        let distance = scene.objects[0].distance_to(Vec4::new(0.5, 0.5, 3.0, 0.5)).unwrap();
        assert!((distance - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_with_camera() {
        let builder = SceneBuilder::new("posed")
            .add_hyper_sphere(Vec4::ZERO, 1.0, "ball")
            .with_camera(90.0, Vec4::new(0.0, -5.0, 0.0, 0.0));
        let camera = builder.template().camera.unwrap();
        assert_eq!(camera.facing_degrees, 90.0);
        assert_eq!(camera.location, [0.0, -5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_duplicate_names_fail_build() {
        let result = SceneBuilder::new("dupes")
            .add_hyper_sphere(Vec4::ZERO, 1.0, "ball")
            .add_hyper_sphere(Vec4::X, 1.0, "ball")
            .build();
        assert!(matches!(result, Err(SceneLoadError::Invalid(_))));
    }

    #[test]
    fn test_demo_scene() {
        let builder = SceneBuilder::demo();
        assert!(builder.template().camera.is_none());

        let scene = builder.build().unwrap();
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.objects[0].color(), HyperCube::DEFAULT_COLOR);
        assert_eq!(scene.objects[1].color(), Color::from_rgb255(201.0, 240.0, 124.0, 1.0));
        assert_eq!(scene.objects[2].color(), HyperSphere::DEFAULT_COLOR);
    }
}

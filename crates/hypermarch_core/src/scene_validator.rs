//! Scene validation
//!
//! Validates scene templates for common errors before any solid is built.
//! The [`SceneValidator`] checks for empty scenes, duplicate object names,
//! impossible dimensions, degenerate frames, bad colors and extreme camera
//! positions.

use std::collections::HashSet;

use hypermarch_math::Vec4;

use crate::scene_template::SceneTemplate;
use crate::shapes::SolidTemplate;
use crate::Parallelepiped;

/// Camera coordinates beyond this are almost certainly a typo
const EXTREME_COORDINATE: f32 = 10000.0;

/// Validation error found in a scene template
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Scene has no objects
    EmptyScene,
    /// Duplicate object name found
    DuplicateName(String),
    /// Hypersphere whose radius is negative or not finite
    InvalidRadius { index: usize, radius: f32 },
    /// Hypercube whose width is zero, negative or not finite
    NonPositiveWidth { index: usize, width: f32 },
    /// Parallelepiped whose edges do not span a 3-flat
    DegenerateFrame { index: usize },
    /// Color channel outside `[0, 1]`
    ColorOutOfRange { index: usize },
    /// Camera location has a component with absolute value > 10000
    ExtremeCameraLocation([f32; 4]),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyScene => write!(f, "Scene has no objects"),
            ValidationError::DuplicateName(name) => {
                write!(f, "Duplicate object name: '{}'", name)
            }
            ValidationError::InvalidRadius { index, radius } => {
                write!(f, "Object {} has invalid radius {}", index, radius)
            }
            ValidationError::NonPositiveWidth { index, width } => {
                write!(f, "Object {} has non-positive width {}", index, width)
            }
            ValidationError::DegenerateFrame { index } => {
                write!(f, "Object {} has linearly dependent edges", index)
            }
            ValidationError::ColorOutOfRange { index } => {
                write!(f, "Object {} has a color channel outside [0, 1]", index)
            }
            ValidationError::ExtremeCameraLocation(pos) => {
                write!(
                    f,
                    "Extreme camera location: [{}, {}, {}, {}] (component abs > 10000)",
                    pos[0], pos[1], pos[2], pos[3]
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Scene validator that checks for common errors
///
/// # Example
/// ```ignore
/// let errors = SceneValidator::validate(&template);
/// for error in &errors {
///     eprintln!("Validation error: {}", error);
/// }
/// ```
pub struct SceneValidator;

impl SceneValidator {
    /// Validate a scene template, returning all errors found
    ///
    /// Returns an empty vector if no validation errors are detected.
    pub fn validate(scene: &SceneTemplate) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if scene.objects.is_empty() {
            errors.push(ValidationError::EmptyScene);
        }

        let mut seen_names = HashSet::new();
        for (index, object) in scene.objects.iter().enumerate() {
            if let Some(name) = object.name() {
                if !seen_names.insert(name) {
                    errors.push(ValidationError::DuplicateName(name.to_string()));
                }
            }

            match object {
                SolidTemplate::HyperSphere { radius, .. } => {
                    if !(*radius >= 0.0 && radius.is_finite()) {
                        errors.push(ValidationError::InvalidRadius { index, radius: *radius });
                    }
                }
                SolidTemplate::HyperCube { width, .. } => {
                    if !(*width > 0.0 && width.is_finite()) {
                        errors.push(ValidationError::NonPositiveWidth { index, width: *width });
                    }
                }
                SolidTemplate::Parallelepiped { directions, .. } => {
                    if Parallelepiped::is_degenerate_frame(directions.map(Vec4::from_array)) {
                        errors.push(ValidationError::DegenerateFrame { index });
                    }
                }
            }

            if let Some(color) = object.color() {
                if !color.is_valid() {
                    errors.push(ValidationError::ColorOutOfRange { index });
                }
            }
        }

        if let Some(camera) = scene.camera {
            if camera.location.iter().any(|c| c.abs() > EXTREME_COORDINATE) {
                errors.push(ValidationError::ExtremeCameraLocation(camera.location));
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(scene: &SceneTemplate) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(scene);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn make_valid_scene() -> SceneTemplate {
        SceneTemplate::new("Valid Scene")
            .with_camera(-36.0, [10.0, -10.0, 0.0, 0.0])
            .with_object(SolidTemplate::hyper_cube([0.0; 4], 2.0).with_name("cube"))
            .with_object(SolidTemplate::hyper_sphere([5.0, 0.0, 0.0, 0.0], 1.0))
    }

    #[test]
    fn test_valid_scene_returns_no_errors() {
        let scene = make_valid_scene();
        let errors = SceneValidator::validate(&scene);
        assert!(errors.is_empty(), "Expected no errors, got: {:?}", errors);
        assert!(SceneValidator::validate_or_error(&scene).is_ok());
    }

    #[test]
    fn test_empty_scene_error() {
        let scene = SceneTemplate::new("Empty");
        let errors = SceneValidator::validate(&scene);
        assert!(errors.contains(&ValidationError::EmptyScene));
    }

    #[test]
    fn test_duplicate_names_detected() {
        let scene = SceneTemplate::new("Dupes")
            .with_object(SolidTemplate::hyper_cube([0.0; 4], 1.0).with_name("cube"))
            .with_object(SolidTemplate::hyper_cube([3.0; 4], 1.0).with_name("cube"));

        let errors = SceneValidator::validate(&scene);
        assert!(
            errors.contains(&ValidationError::DuplicateName("cube".to_string())),
            "Expected DuplicateName error, got: {:?}",
            errors
        );
    }

    #[test]
    fn test_unnamed_objects_dont_trigger_duplicate() {
        let scene = SceneTemplate::new("No Names")
            .with_object(SolidTemplate::hyper_cube([0.0; 4], 1.0))
            .with_object(SolidTemplate::hyper_cube([0.0; 4], 1.0));

        let errors = SceneValidator::validate(&scene);
        assert!(errors.is_empty(), "Unnamed objects should validate: {:?}", errors);
    }

    #[test]
    fn test_negative_radius_detected() {
        let scene = make_valid_scene()
            .with_object(SolidTemplate::hyper_sphere([0.0; 4], -1.0));
        let errors = SceneValidator::validate(&scene);
        assert_eq!(errors, vec![ValidationError::InvalidRadius { index: 2, radius: -1.0 }]);
    }

    #[test]
    fn test_non_finite_radius_detected() {
        let scene = make_valid_scene()
            .with_object(SolidTemplate::hyper_sphere([0.0; 4], f32::NAN).with_name("nan"))
            .with_object(SolidTemplate::hyper_sphere([0.0; 4], f32::INFINITY).with_name("inf"));
        let errors = SceneValidator::validate(&scene);
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::InvalidRadius { index: 2, radius } if radius.is_nan()));
        assert_eq!(errors[1], ValidationError::InvalidRadius { index: 3, radius: f32::INFINITY });
        assert!(errors[0].to_string().contains("invalid radius NaN"));
    }

    #[test]
    fn test_non_positive_width_detected() {
        let scene = SceneTemplate::new("Flat")
            .with_object(SolidTemplate::hyper_cube([0.0; 4], 0.0))
            .with_object(SolidTemplate::hyper_cube([0.0; 4], -2.0));
        let errors = SceneValidator::validate(&scene);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::NonPositiveWidth { index: 1, width: -2.0 }));
    }

    #[test]
    fn test_degenerate_frame_detected() {
        let scene = SceneTemplate::new("Flat").with_object(SolidTemplate::parallelepiped(
            [0.0; 4],
            [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [1.0, 1.0, 0.0, 0.0]],
        ));
        let errors = SceneValidator::validate(&scene);
        assert_eq!(errors, vec![ValidationError::DegenerateFrame { index: 0 }]);
    }

    #[test]
    fn test_color_out_of_range_detected() {
        // 0-255 palette values written without conversion
        let scene = SceneTemplate::new("Loud").with_object(
            SolidTemplate::hyper_sphere([0.0; 4], 1.0)
                .with_color(Color::new(227.0, 141.0, 51.0, 1.0)),
        );
        let errors = SceneValidator::validate(&scene);
        assert_eq!(errors, vec![ValidationError::ColorOutOfRange { index: 0 }]);
    }

    #[test]
    fn test_extreme_camera_location_detected() {
        let scene = make_valid_scene().with_camera(0.0, [99999.0, 0.0, 0.0, 0.0]);
        let errors = SceneValidator::validate(&scene);
        assert!(
            errors.contains(&ValidationError::ExtremeCameraLocation([99999.0, 0.0, 0.0, 0.0])),
            "Expected ExtremeCameraLocation, got: {:?}",
            errors
        );
    }

    #[test]
    fn test_multiple_errors_detected() {
        let scene = SceneTemplate::new("Broken").with_camera(0.0, [0.0, 50000.0, 0.0, 0.0]);
        let errors = SceneValidator::validate(&scene);
        assert_eq!(errors.len(), 2, "Expected 2 errors, got: {:?}", errors);

        let result = SceneValidator::validate_or_error(&scene);
        assert!(result.unwrap_err().contains(&ValidationError::EmptyScene));
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(format!("{}", ValidationError::EmptyScene), "Scene has no objects");
        assert_eq!(
            format!("{}", ValidationError::DuplicateName("foo".to_string())),
            "Duplicate object name: 'foo'"
        );
        assert!(format!("{}", ValidationError::InvalidRadius { index: 0, radius: -3.0 })
            .contains("-3"));
        assert!(
            format!("{}", ValidationError::ExtremeCameraLocation([1.0, 2.0, 3.0, 4.0]))
                .contains("1, 2, 3, 4")
        );
    }
}

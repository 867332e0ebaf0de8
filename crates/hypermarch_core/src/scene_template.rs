//! Scene files
//!
//! A [`SceneTemplate`] is the RON form of a scene: an ordered list of solid
//! templates and an optional camera pose. Loading validates the template and
//! instantiates it into a runtime [`Scene`].

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use std::io;

use hypermarch_math::SolveError;

use crate::scene_validator::{SceneValidator, ValidationError};
use crate::shapes::SolidTemplate;
use crate::Scene;

/// Where the camera stands when the scene opens
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Heading in the xy plane, degrees clockwise from +y
    pub facing_degrees: f32,
    /// Camera position [x, y, z, w]
    pub location: [f32; 4],
}

/// A serializable scene containing solid templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneTemplate {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Solids in draw order; ties in distance go to the earlier entry
    pub objects: Vec<SolidTemplate>,
    /// Initial camera pose
    #[serde(default)]
    pub camera: Option<CameraPose>,
}

impl SceneTemplate {
    /// Create a new empty scene template
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            camera: None,
        }
    }

    /// Load a scene template from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let template: Self = ron::from_str(&contents)?;
        log::info!(
            "Loaded scene '{}' ({} objects) from {}",
            template.name,
            template.objects.len(),
            path.display()
        );
        Ok(template)
    }

    /// Add a solid template to this scene
    pub fn add_object(&mut self, object: SolidTemplate) {
        self.objects.push(object);
    }

    /// Add a solid template, builder style
    pub fn with_object(mut self, object: SolidTemplate) -> Self {
        self.objects.push(object);
        self
    }

    /// Set the initial camera pose
    pub fn with_camera(mut self, facing_degrees: f32, location: [f32; 4]) -> Self {
        self.camera = Some(CameraPose { facing_degrees, location });
        self
    }

    /// Validate the template and build the runtime scene
    pub fn instantiate(&self) -> Result<Scene, SceneLoadError> {
        SceneValidator::validate_or_error(self).map_err(SceneLoadError::Invalid)?;

        let mut scene = Scene::default();
        for (index, object) in self.objects.iter().enumerate() {
            let solid = object
                .create_solid()
                .map_err(|source| SceneLoadError::Geometry { index, source })?;
            log::debug!("Scene '{}': object {} is a {}", self.name, index, solid.kind_name());
            scene.push(solid);
        }
        Ok(scene)
    }
}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// The template failed validation
    Invalid(Vec<ValidationError>),
    /// A solid could not be constructed
    Geometry {
        /// Position of the solid in the template
        index: usize,
        source: SolveError,
    },
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneLoadError::Invalid(errors) => {
                write!(f, "Invalid scene:")?;
                for error in errors {
                    write!(f, " {};", error)?;
                }
                Ok(())
            }
            SceneLoadError::Geometry { index, source } => {
                write!(f, "Object {} cannot be built: {}", index, source)
            }
        }
    }
}

impl std::error::Error for SceneLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneLoadError::Io(e) => Some(e),
            SceneLoadError::Parse(e) => Some(e),
            SceneLoadError::Geometry { source, .. } => Some(source),
            SceneLoadError::Invalid(_) => None,
        }
    }
}

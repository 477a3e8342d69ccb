//! Artifact kinds produced for every entity.
//!
//! Each kind ties together the project subfolder it is written to, the suffix
//! appended to the entity name to form the class (and file) name, and the
//! template that renders it. The orchestrator only ever iterates
//! [`ArtifactKind::all`], so adding a kind here is enough to have it
//! materialized, rendered and written.
//!
//! # Examples
//!
//! ```
//! use crudgen_core::templates::ArtifactKind;
//! use std::str::FromStr;
//!
//! let kind = ArtifactKind::from_str("service").unwrap();
//! assert_eq!(kind, ArtifactKind::Service);
//! assert_eq!(kind.subfolder(), "service");
//! assert_eq!(kind.file_name("User"), "UserService.java");
//! assert_eq!(kind.to_string(), "service");
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

/// Extension of every generated source file
pub const JAVA_EXTENSION: &str = "java";

/// The four layers of a generated CRUD module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// JPA entity with constructor, getters and setters
    Model,
    /// Spring Data repository interface
    Repository,
    /// Service with list/get/update/save/delete
    Service,
    /// REST controller bound at `/<entity>`
    Controller,
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "model" => Ok(ArtifactKind::Model),
            "repository" => Ok(ArtifactKind::Repository),
            "service" => Ok(ArtifactKind::Service),
            "controller" => Ok(ArtifactKind::Controller),
            _ => Err(format!("Unknown artifact kind: {}", s)),
        }
    }
}

impl ArtifactKind {
    /// Returns the kind identifier, which is also its subfolder name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::Controller => "controller",
        }
    }

    /// Directory under the project root the artifact is written to
    pub fn subfolder(&self) -> &'static str {
        self.as_str()
    }

    /// Appended to the entity name to form the class name
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Model => "",
            Self::Repository => "Repository",
            Self::Service => "Service",
            Self::Controller => "Controller",
        }
    }

    /// Name of the embedded template rendering this kind
    pub fn template_name(&self) -> &'static str {
        match self {
            Self::Model => "model.java.tera",
            Self::Repository => "repository.java.tera",
            Self::Service => "service.java.tera",
            Self::Controller => "controller.java.tera",
        }
    }

    /// Whether the rendered text depends on the field map
    pub fn uses_fields(&self) -> bool {
        matches!(self, Self::Model | Self::Service)
    }

    /// Class name generated for `entity`
    pub fn class_name(&self, entity: &str) -> String {
        format!("{}{}", entity, self.suffix())
    }

    /// `<Entity><Suffix>.java`
    pub fn file_name(&self, entity: &str) -> String {
        format!("{}.{}", self.class_name(entity), JAVA_EXTENSION)
    }

    /// Returns an iterator over all kinds in generation order
    pub fn all() -> impl Iterator<Item = Self> {
        use ArtifactKind::*;
        [Model, Repository, Service, Controller].iter().copied()
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

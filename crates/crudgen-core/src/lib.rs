//! crudgen Core Library
//!
//! This library turns an entity description (name, ordered field map, target
//! project path) into a layered Spring/JPA CRUD module: a model, a repository
//! interface, a service and a REST controller, each written to its own folder
//! under the project root. It also provides the HTTP front end that exposes the
//! generator as `POST /generate`.

pub mod config;
pub mod error;
pub mod generate;
pub mod layout;
pub mod request;
pub mod server;
pub mod templates;
pub mod utils;

pub use crate::{
    config::Config,
    error::{Error, Result},
    generate::{generate, GeneratedArtifact, Generator},
    request::{FieldMap, GenerationRequest},
    templates::{ArtifactKind, EntityContext, TemplateManager},
};

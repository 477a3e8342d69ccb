//! Template system for code generation

// Internal imports (std, crate)
use std::error::Error as StdError;
use std::sync::Arc;

use crate::{
    error::{Error, Result},
    request::FieldMap,
};

use super::{ArtifactKind, EntityContext};

// External imports (alphabetized)
use tera::{Context, Tera};

const MODEL_TEMPLATE: &str = include_str!("../../templates/spring_jpa/model.java.tera");
const REPOSITORY_TEMPLATE: &str = include_str!("../../templates/spring_jpa/repository.java.tera");
const SERVICE_TEMPLATE: &str = include_str!("../../templates/spring_jpa/service.java.tera");
const CONTROLLER_TEMPLATE: &str = include_str!("../../templates/spring_jpa/controller.java.tera");

/// Source text of the embedded template for `kind`
fn template_source(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Model => MODEL_TEMPLATE,
        ArtifactKind::Repository => REPOSITORY_TEMPLATE,
        ArtifactKind::Service => SERVICE_TEMPLATE,
        ArtifactKind::Controller => CONTROLLER_TEMPLATE,
    }
}

/// Holds the compiled templates and renders artifacts from them.
///
/// Rendering is pure: the same entity and field map always produce the same
/// text, and nothing here touches the filesystem.
#[derive(Debug, Clone)]
pub struct TemplateManager {
    /// Shared Tera instance with every artifact template registered
    tera: Arc<Tera>,
}

impl TemplateManager {
    /// Compile the embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        // Generated Java must come out verbatim
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(
            ArtifactKind::all().map(|kind| (kind.template_name(), template_source(kind))),
        )?;

        log::debug!(
            "Registered templates: {:?}",
            tera.get_template_names().collect::<Vec<_>>()
        );

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Get a reference to the Tera template engine
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Check if a template exists
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template(name).is_ok()
    }

    /// List templates with the file name pattern they produce
    pub fn list_templates(&self) -> Vec<(String, String)> {
        ArtifactKind::all()
            .filter(|kind| self.has_template(kind.template_name()))
            .map(|kind| {
                (
                    kind.template_name().to_string(),
                    format!("{}/{}", kind.subfolder(), kind.file_name("<Entity>")),
                )
            })
            .collect()
    }

    /// Render one artifact kind against a prepared context
    pub fn render(&self, kind: ArtifactKind, context: &EntityContext) -> Result<String> {
        let template_name = kind.template_name();
        let tera_context = Context::from_serialize(context)?;

        log::debug!("Rendering template: {} for {}", template_name, context.entity);

        self.tera
            .render(template_name, &tera_context)
            .map_err(|e| {
                log::error!("Template rendering failed for '{}': {}", template_name, e);
                Error::template(format!(
                    "Failed to render template '{}': {}",
                    template_name,
                    error_chain(&e)
                ))
            })
    }

    /// Render `kind` for an entity, passing the field map only to kinds that use it
    pub fn render_kind(
        &self,
        kind: ArtifactKind,
        entity: &str,
        fields: &FieldMap,
    ) -> Result<String> {
        let context = if kind.uses_fields() {
            EntityContext::new(entity, fields)
        } else {
            EntityContext::for_entity(entity)
        };
        self.render(kind, &context)
    }

    /// JPA entity class
    pub fn render_model(&self, entity: &str, fields: &FieldMap) -> Result<String> {
        self.render(ArtifactKind::Model, &EntityContext::new(entity, fields))
    }

    /// Spring Data repository interface
    pub fn render_repository(&self, entity: &str) -> Result<String> {
        self.render(ArtifactKind::Repository, &EntityContext::for_entity(entity))
    }

    /// Service class
    pub fn render_service(&self, entity: &str, fields: &FieldMap) -> Result<String> {
        self.render(ArtifactKind::Service, &EntityContext::new(entity, fields))
    }

    /// REST controller class
    pub fn render_controller(&self, entity: &str) -> Result<String> {
        self.render(ArtifactKind::Controller, &EntityContext::for_entity(entity))
    }
}

/// Tera reports the interesting part of a failure in the source chain
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

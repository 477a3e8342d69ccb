//! Code generation functionality for crudgen

// Internal imports (std, crate)
use std::io;
use std::path::{Path, PathBuf};

use crate::{
    error::Result,
    layout,
    request::GenerationRequest,
    templates::{ArtifactKind, TemplateManager},
};

/// One rendered source file, relative to the request's base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Which layer this file implements
    pub kind: ArtifactKind,
    /// `<project_name>/<subfolder>/<Entity><Suffix>.java`
    pub relative_path: PathBuf,
    /// Full source text
    pub content: String,
}

/// Renders requests and writes them into the project layout
#[derive(Debug, Clone)]
pub struct Generator {
    templates: TemplateManager,
}

impl Generator {
    /// Create a generator with the embedded templates
    pub fn new() -> Result<Self> {
        Ok(Self::with_templates(TemplateManager::new()?))
    }

    /// Create a generator from an existing template manager
    pub fn with_templates(templates: TemplateManager) -> Self {
        Self { templates }
    }

    /// Get the template manager
    pub fn templates(&self) -> &TemplateManager {
        &self.templates
    }

    /// Render every artifact for `request` without touching the filesystem
    pub fn render_all(&self, request: &GenerationRequest) -> Result<Vec<GeneratedArtifact>> {
        ArtifactKind::all()
            .map(|kind| -> Result<GeneratedArtifact> {
                let content = self
                    .templates
                    .render_kind(kind, &request.entity, &request.fields)?;
                Ok(GeneratedArtifact {
                    kind,
                    relative_path: Path::new(&request.project_name)
                        .join(kind.subfolder())
                        .join(kind.file_name(&request.entity)),
                    content,
                })
            })
            .collect()
    }

    /// Validate, materialize the layout and write all four artifacts.
    ///
    /// Existing files are overwritten. Returns the written paths in
    /// [`ArtifactKind::all`] order. A write failure leaves the files written
    /// before it on disk.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<PathBuf>> {
        request.validate()?;

        let project_root = layout::materialize(&request.base_path, &request.project_name).await?;
        log::debug!("Project root: {}", project_root.display());

        let artifacts = self.render_all(request)?;
        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let output_path = request.base_path.join(&artifact.relative_path);
            write_artifact(&output_path, &artifact.content).await?;
            log::info!(
                "{} {} created at {}",
                artifact.kind.file_name(&request.entity),
                artifact.kind,
                output_path.display()
            );
            written.push(output_path);
        }

        Ok(written)
    }
}

async fn write_artifact(output_path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(output_path, content).await.map_err(|e| {
        log::error!("Failed to write file {}: {}", output_path.display(), e);
        io::Error::new(
            e.kind(),
            format!("Failed to write {}: {}", output_path.display(), e),
        )
    })?;
    Ok(())
}

/// Main entry point for code generation
pub async fn generate(request: &GenerationRequest) -> Result<Vec<PathBuf>> {
    Generator::new()?.generate(request).await
}

//! crudgen CLI entrypoint
//! Parses command-line arguments and either serves the generator over HTTP or
//! runs a single generation from a request file.

// Internal imports (std, crate)
use std::net::SocketAddr;
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use crudgen_core::{Config, GenerationRequest, Generator};
use tokio::fs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Serve `POST /generate` over HTTP
    Serve {
        /// YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Listen address, overrides the config file (default: 0.0.0.0:5000)
        #[arg(long, env = "CRUDGEN_BIND")]
        bind: Option<SocketAddr>,
    },
    /// Generate a CRUD module from a JSON request file
    Generate {
        /// Path to a JSON file with `entity`, `fields`, `project_name` and `base_path`
        #[arg(long)]
        request: PathBuf,
        /// Override the request's base path
        #[arg(long)]
        base_path: Option<PathBuf>,
        /// Override the request's project name
        #[arg(long)]
        project_name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { config, bind } => {
            let mut server_config = match &config {
                Some(path) => Config::from_file(path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => Config::default(),
            };
            if let Some(addr) = bind {
                server_config.bind_address = addr;
            }

            tracing::info!(bind = %server_config.bind_address, "starting crudgen server");
            crudgen_core::server::serve(&server_config)
                .await
                .context("Server terminated with an error")?;
        }
        Commands::Generate {
            request,
            base_path,
            project_name,
        } => {
            let body = fs::read(&request)
                .await
                .with_context(|| format!("Failed to read request file {}", request.display()))?;
            let mut generation = GenerationRequest::from_slice(&body)
                .with_context(|| format!("Invalid request in {}", request.display()))?;

            if let Some(base_path) = base_path {
                generation.base_path = base_path;
            }
            if let Some(project_name) = project_name {
                generation.project_name = project_name;
            }

            let generator = Generator::new().context("Failed to initialize templates")?;
            let written = generator
                .generate(&generation)
                .await
                .with_context(|| format!("Failed to generate entity {}", generation.entity))?;

            for path in &written {
                println!("{}", path.display());
            }
            println!(
                "✅ Successfully generated {} in: {}",
                generation.entity,
                generation.project_root().display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_overrides() {
        let cli = Cli::try_parse_from([
            "crudgen",
            "generate",
            "--request",
            "user.json",
            "--base-path",
            "/tmp/out",
            "--project-name",
            "demo",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                request,
                base_path,
                project_name,
            } => {
                assert_eq!(request, PathBuf::from("user.json"));
                assert_eq!(base_path, Some(PathBuf::from("/tmp/out")));
                assert_eq!(project_name.as_deref(), Some("demo"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_bind() {
        let cli = Cli::try_parse_from(["crudgen", "serve", "--bind", "127.0.0.1:9000"]).unwrap();
        match cli.command {
            Commands::Serve { config, bind } => {
                assert!(config.is_none());
                assert_eq!(bind, Some("127.0.0.1:9000".parse().unwrap()));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

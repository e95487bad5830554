pub mod cli;
pub mod config;
pub mod generator;
pub mod parser;
pub mod providers;
pub mod utils;

// Re-export frequently used items for easier access
pub use cli::args::{ProviderKind, TestFramework};
pub use config::Config;
pub use generator::{DraftedTest, TestDrafter, TestWriter};
pub use parser::{load_spec, parse_swagger_file, SpecLocation, SwaggerSpec};
pub use providers::{create_provider, TextProvider};

use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load specification: {0}")]
    LoadError(#[from] parser::LoadError),

    #[error("Failed to generate tests: {0}")]
    ProviderError(#[from] providers::ProviderError),

    #[error("Failed to write tests: {0}")]
    WriteError(#[from] generator::WriteError),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Generate test suites for every operation of the configured specification.
///
/// Loads the spec, drafts each operation through the provider selected from
/// `config`, then writes one suite file per operation. Returns the paths of
/// the written files.
pub async fn generate_tests_from_spec(config: &Config) -> Result<Vec<PathBuf>> {
    info!("Starting test generation process...");

    // Parse the Swagger/OpenAPI specification
    info!("Parsing Swagger specification from {}", config.swagger_url);
    let spec = parser::load_spec(&SpecLocation::parse(&config.swagger_url)).await?;

    let provider = providers::create_provider(config)?;

    generate_tests_with_provider(config, &spec, provider.as_ref()).await
}

/// Draft and write suites for an already loaded spec with a given provider
pub async fn generate_tests_with_provider(
    config: &Config,
    spec: &SwaggerSpec,
    provider: &dyn TextProvider,
) -> Result<Vec<PathBuf>> {
    info!("Generating tests using AI...");
    let drafter = TestDrafter::new(provider, config.framework);
    let drafts = drafter.draft_all(&spec.operations).await?;

    info!("Writing {} tests...", config.framework.display_name());
    let writer = TestWriter::new(config.output_dir(), config.framework);
    let written = writer.write_tests(&drafts)?;

    info!("Test generation completed successfully!");
    Ok(written)
}

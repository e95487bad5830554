use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "swagger-ai-testgen",
    about = "Draft end-to-end tests from OpenAPI/Swagger specifications with an LLM",
    version
)]
pub struct Args {
    /// URL or path of the Swagger/OpenAPI specification (overrides SWAGGER_URL)
    #[clap(short, long, value_name = "LOCATION")]
    pub input: Option<String>,

    /// Output directory for generated tests (overrides OUTPUT_DIR)
    #[clap(short, long, value_name = "DIRECTORY")]
    pub output_dir: Option<PathBuf>,

    /// Testing framework to generate tests for
    #[clap(short, long, value_enum, default_value = "cypress")]
    pub framework: TestFramework,

    /// Provider to try first; the other one is used when its key is missing
    #[clap(short, long, value_enum, default_value = "anthropic")]
    pub provider: ProviderKind,

    /// Enable debug logging
    #[clap(long)]
    pub verbose: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TestFramework {
    /// Cypress `cy.request` suites (*.cy.js)
    Cypress,
    /// Jest suites driven by axios (*.test.js)
    Jest,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ProviderKind {
    /// Anthropic Messages API
    Anthropic,
    /// OpenAI Chat Completions API
    #[clap(name = "openai")]
    OpenAi,
}

// This is the entry point for the CLI application.
// It builds the run configuration from the environment and command line, then runs the pipeline.

use std::process;

use clap::Parser;
use swagger_ai_testgen::cli::Args;
use swagger_ai_testgen::{generate_tests_from_spec, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().with_args(&args);

    match generate_tests_from_spec(&config).await {
        Ok(written) => {
            println!(
                "Generated {} test files in {}",
                written.len(),
                config.output_dir().display()
            );
        }
        Err(err) => {
            tracing::error!("Error generating tests: {}", err);
            eprintln!("Error generating tests: {}", err);
            process::exit(1);
        }
    }
}

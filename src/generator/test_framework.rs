use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use super::drafter::DraftedTest;
use crate::cli::args::TestFramework;
use crate::parser::ApiOperation;
use crate::utils::{ensure_directory_exists, sanitize_path_for_filename, write_to_file};

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write test file {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, WriteError>;

impl TestFramework {
    /// Human readable name used in prompts
    pub fn display_name(self) -> &'static str {
        match self {
            TestFramework::Cypress => "Cypress",
            TestFramework::Jest => "Jest",
        }
    }

    /// Suffix of a generated suite file, including the leading dot
    pub fn suite_extension(self) -> &'static str {
        match self {
            TestFramework::Cypress => ".cy.js",
            TestFramework::Jest => ".test.js",
        }
    }

    /// Where suites go when no output directory is configured
    pub fn default_output_dir(self) -> PathBuf {
        match self {
            TestFramework::Cypress => PathBuf::from("cypress").join("e2e"),
            TestFramework::Jest => PathBuf::from("tests").join("e2e"),
        }
    }
}

/// File name for an operation's suite, e.g. `pets-id-get.cy.js`
pub fn file_name_for(operation: &ApiOperation, framework: TestFramework) -> String {
    format!(
        "{}-{}{}",
        sanitize_path_for_filename(&operation.path),
        operation.method.to_lowercase(),
        framework.suite_extension()
    )
}

/// Wrap drafted text in a suite block titled with the method and path
pub fn suite_content(operation: &ApiOperation, text: &str) -> String {
    format!(
        "describe('{} {}', () => {{\n    {}\n}});",
        operation.method.to_uppercase(),
        operation.path,
        text
    )
}

/// Writes one suite file per drafted operation
pub struct TestWriter {
    output_dir: PathBuf,
    framework: TestFramework,
}

impl TestWriter {
    pub fn new<P: Into<PathBuf>>(output_dir: P, framework: TestFramework) -> Self {
        TestWriter {
            output_dir: output_dir.into(),
            framework,
        }
    }

    /// Write every draft, overwriting existing files, and return the written paths
    pub fn write_tests(&self, drafts: &[DraftedTest<'_>]) -> Result<Vec<PathBuf>> {
        // Ensure the tests directory exists
        ensure_directory_exists(&self.output_dir).map_err(|source| WriteError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(drafts.len());

        for draft in drafts {
            let file_name = file_name_for(draft.operation, self.framework);
            let file_path = self.output_dir.join(&file_name);

            let content = suite_content(draft.operation, &draft.text);
            write_to_file(&file_path, content).map_err(|source| WriteError::WriteFile {
                path: file_path.clone(),
                source,
            })?;

            info!("Created test file: {}", file_name);
            written.push(file_path);
        }

        Ok(written)
    }
}

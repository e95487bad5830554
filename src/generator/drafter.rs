use tracing::{debug, info};

use super::prompt::build_prompt;
use crate::cli::args::TestFramework;
use crate::parser::ApiOperation;
use crate::providers::{self, TextProvider};

/// Raw provider text drafted for one operation.
///
/// The text is not parsed or checked; it is written out exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftedTest<'a> {
    pub operation: &'a ApiOperation,
    pub text: String,
}

/// Drafts test cases for operations through a single provider
pub struct TestDrafter<'p> {
    provider: &'p dyn TextProvider,
    framework: TestFramework,
}

impl<'p> TestDrafter<'p> {
    pub fn new(provider: &'p dyn TextProvider, framework: TestFramework) -> Self {
        TestDrafter {
            provider,
            framework,
        }
    }

    /// Draft one operation
    pub async fn draft<'a>(&self, operation: &'a ApiOperation) -> providers::Result<DraftedTest<'a>> {
        let prompt = build_prompt(operation, self.framework);
        debug!("Prompt for {} {}:\n{}", operation.method, operation.path, prompt);

        let text = self.provider.complete(&prompt).await?;

        Ok(DraftedTest { operation, text })
    }

    /// Draft every operation in order; the first failure stops the run
    pub async fn draft_all<'a>(
        &self,
        operations: &'a [ApiOperation],
    ) -> providers::Result<Vec<DraftedTest<'a>>> {
        let mut drafts = Vec::with_capacity(operations.len());

        for operation in operations {
            info!(
                "Generating tests for {} {} with {}",
                operation.method,
                operation.path,
                self.provider.name()
            );
            drafts.push(self.draft(operation).await?);
        }

        Ok(drafts)
    }
}

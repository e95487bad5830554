// Prompt construction for the drafting step. The output only depends on the
// operation and the framework, so the same spec always yields the same prompts.

use crate::cli::args::TestFramework;
use crate::parser::{ApiOperation, ApiParameter, ApiResponse};

pub const NO_SUMMARY: &str = "No description available";
pub const NO_PARAMETERS: &str = "No parameters defined";
pub const NO_RESPONSES: &str = "No response definitions available";
pub const NO_DESCRIPTION: &str = "No description";

/// Build the drafting prompt for one operation
pub fn build_prompt(operation: &ApiOperation, framework: TestFramework) -> String {
    let path = &operation.path;
    let method = &operation.method;
    let summary = operation.summary.as_deref().unwrap_or(NO_SUMMARY);
    let parameters = format_parameters(&operation.parameters);
    let responses = format_responses(&operation.responses);
    let framework_name = framework.display_name();
    let example = example_case(operation, framework);

    format!(
        r#"Generate {framework_name} test cases for the following API endpoint:

Endpoint Details:
- Path: {path}
- Method: {method}
- Description: {summary}

Parameters:
{parameters}

Expected Responses:
{responses}

Please generate {framework_name} test cases that cover:
1. Happy path scenarios (successful requests)
2. Error scenarios (invalid inputs, server errors)
3. Edge cases
4. Parameter validation

Format the output as {framework_name} test cases using the following structure:
{example}

Include multiple test cases with different scenarios."#
    )
}

/// One line per parameter, or a placeholder when there are none
pub fn format_parameters(parameters: &[ApiParameter]) -> String {
    if parameters.is_empty() {
        return NO_PARAMETERS.to_string();
    }

    parameters
        .iter()
        .map(|param| {
            format!(
                "- {} ({}): {}",
                param.name,
                param.location,
                param.description.as_deref().unwrap_or(NO_DESCRIPTION)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per response status, or a placeholder when there are none
pub fn format_responses(responses: &[ApiResponse]) -> String {
    if responses.is_empty() {
        return NO_RESPONSES.to_string();
    }

    responses
        .iter()
        .map(|resp| {
            format!(
                "- {}: {}",
                resp.status_code,
                resp.description.as_deref().unwrap_or(NO_DESCRIPTION)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn example_case(operation: &ApiOperation, framework: TestFramework) -> String {
    let method = &operation.method;
    let path = &operation.path;

    match framework {
        TestFramework::Cypress => format!(
            r#"it('should...', () => {{
    cy.request({{
        method: '{method}',
        url: urlRequest + '{path}',
        // Add request body/parameters as needed
    }}).then((response) => {{
        // Add assertions
    }});
}});"#
        ),
        TestFramework::Jest => format!(
            r#"it('should...', async () => {{
    const response = await axios.request({{
        method: '{method}',
        url: baseURL + '{path}',
        validateStatus: () => true,
        // Add request body/parameters as needed
    }});
    // Add assertions
}});"#
        ),
    }
}

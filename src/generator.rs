pub mod drafter;
pub mod prompt;
pub mod test_framework;

pub use drafter::{DraftedTest, TestDrafter};
pub use prompt::{build_prompt, format_parameters, format_responses};
pub use test_framework::{file_name_for, suite_content, TestWriter, WriteError};

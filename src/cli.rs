// Command line surface of the generator.

pub mod args;

pub use args::{Args, ProviderKind, TestFramework};

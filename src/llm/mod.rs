mod client;
mod types;

pub use client::{LlmRuntime, OpenAiRuntime, create_runtime};
#[cfg(test)]
pub use client::MockLlmRuntime;
pub use types::*;

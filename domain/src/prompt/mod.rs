//! Prompt framing for text-completion models.

mod template;

pub use template::PromptTemplate;

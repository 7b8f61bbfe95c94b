//! Prompt assembly and response refinement for faqbot.
//!
//! Turns retrieved FAQ documents into the model-facing prompt and the raw
//! completion into the user-facing response.

pub mod builder;
pub mod refine;

// Re-export the public surface
pub use builder::{build_context, build_prompt, ContextDocument, PROMPT_TEMPLATE};
pub use refine::{refine, RefinedResponse, NO_ANSWER_SENTINEL};

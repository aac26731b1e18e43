// Nursing notes: form collection, prompt templating, generation, and the web surface.
// All LLM calls go through llm_client; no direct HTTP calls here.

pub mod form;
pub mod generator;
pub mod handlers;
pub mod page;
pub mod prompts;

// Insurance adequacy advisory.
// Implements: coverage evaluation → coverage modeling pipeline, narrative advice, advisor chat.
// All LLM calls go through llm_client — no direct HTTP calls to model endpoints here.

pub mod chat;
pub mod currency;
pub mod evaluator;
pub mod formulas;
pub mod handlers;
pub mod modeler;
pub mod narrative;
pub mod pipeline;
pub mod profile;
pub mod prompts;
pub mod stage;

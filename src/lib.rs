//! llmprompts: prompt builders asking an LLM whether clinical-cohort
//! documentation carries actionable phenotype-definition details.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use adapters::joiners::{NewlineJoiner, resolve_joiner};
#[cfg(feature = "chain")]
pub use adapters::joiners::ChainJoiner;
pub use app::api::{
    DetailsView, IsRelevantOptions, IsRelevantOutput, build_is_relevant_prompt, details,
    is_relevant, is_relevant_at, render,
};
pub use domain::AppError;
pub use domain::prompt::{
    ANSWER_CONSTRAINT, DEFAULT_ACTIONABLE_BULLETS, IsRelevantRequest, NOT_RELEVANT_ANSWER,
    PromptFragments, RELEVANT_ANSWER, build_actionable_details_section,
};
pub use ports::FragmentJoiner;

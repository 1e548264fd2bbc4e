pub mod actionable;
pub mod is_relevant;

pub use actionable::{
    ACTIONABLE_DETAILS_LABEL, BULLET_MARKER, DEFAULT_ACTIONABLE_BULLETS,
    build_actionable_details_section,
};
pub use is_relevant::{
    ANSWER_CONSTRAINT, IS_RELEVANT_FOOTER, IsRelevantRequest, NOT_RELEVANT_ANSWER,
    PromptFragments, RELEVANT_ANSWER,
};

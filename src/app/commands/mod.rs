pub mod details;
pub mod is_relevant;

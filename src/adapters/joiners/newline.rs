use crate::ports::FragmentJoiner;

/// Built-in joiner: one newline between fragments, outer whitespace trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewlineJoiner;

impl NewlineJoiner {
    pub fn new() -> Self {
        Self
    }
}

impl FragmentJoiner for NewlineJoiner {
    fn name(&self) -> &'static str {
        "newline"
    }

    fn join(&self, fragments: &[&str]) -> String {
        fragments.join("\n").trim().to_string()
    }
}

//! Prompt asking an LLM whether a paragraph carries actionable
//! cohort/phenotype-definition details.
//!
//! The model is instructed to answer only with `{ "is_relevant": true }` or
//! `{ "is_relevant": false }`, booleans in lowercase.

use serde::{Deserialize, Serialize};

use crate::ports::FragmentJoiner;

use super::actionable::build_actionable_details_section;

/// Answer token for a paragraph that gives actionable details.
pub const RELEVANT_ANSWER: &str = r#"{ "is_relevant": true }"#;

/// Answer token for every other paragraph.
pub const NOT_RELEVANT_ANSWER: &str = r#"{ "is_relevant": false }"#;

/// Closing instruction; the trimmed prompt always ends with it.
pub const ANSWER_CONSTRAINT: &str = "Use lowercase booleans and nothing else.";

/// Trailing fragment, kept apart from the header so it can change on its own.
pub const IS_RELEVANT_FOOTER: &str = "Use lowercase booleans and nothing else.\n";

/// Inputs for an *is relevant* prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsRelevantRequest {
    /// Where the paragraph comes from, e.g. "routine health data (claims, EHR, registry)".
    pub data_origin: String,
    /// Why the paragraph matters, e.g. "building or validating a computable cohort/phenotype".
    pub purpose: String,
    /// Replacement for the default detail bullets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IsRelevantRequest {
    pub fn new(data_origin: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self { data_origin: data_origin.into(), purpose: purpose.into(), details: None }
    }

    /// Replace the default detail bullets.
    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details = Some(details.into_iter().map(Into::into).collect());
        self
    }

    /// Split the prompt into header, actionable section and footer.
    pub fn fragments(&self) -> PromptFragments {
        let details: Option<Vec<&str>> =
            self.details.as_ref().map(|d| d.iter().map(String::as_str).collect());

        PromptFragments {
            header: build_header(&self.data_origin, &self.purpose),
            actionable: build_actionable_details_section(details.as_deref()),
            footer: IS_RELEVANT_FOOTER.to_string(),
        }
    }

    /// Compose the final prompt with an explicit joiner.
    pub fn render_with(&self, joiner: &dyn FragmentJoiner) -> String {
        self.fragments().join(joiner)
    }
}

/// The ordered pieces of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptFragments {
    pub header: String,
    pub actionable: String,
    pub footer: String,
}

impl PromptFragments {
    pub fn as_slice(&self) -> [&str; 3] {
        [self.header.as_str(), self.actionable.as_str(), self.footer.as_str()]
    }

    pub fn join(&self, joiner: &dyn FragmentJoiner) -> String {
        joiner.join(&self.as_slice())
    }
}

/// Instructional header. `purpose` and `data_origin` are inserted verbatim.
fn build_header(data_origin: &str, purpose: &str) -> String {
    format!(
        "TASK: Read the text as an expert informatician. \
Think through the meaning of the content step by step.\n\n\
The purpose is {purpose}.\n\n\
The text is from {data_origin}.\n\n\
Return {RELEVANT_ANSWER} if the paragraph gives actionable details. \
Otherwise return {NOT_RELEVANT_ANSWER}. {ANSWER_CONSTRAINT}\n\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::DEFAULT_ACTIONABLE_BULLETS;

    /// Joiner that records the separator-free concatenation.
    struct ConcatJoiner;

    impl FragmentJoiner for ConcatJoiner {
        fn name(&self) -> &'static str {
            "concat"
        }

        fn join(&self, fragments: &[&str]) -> String {
            fragments.concat()
        }
    }

    #[test]
    fn header_states_role_inputs_and_answer_contract() {
        let fragments = IsRelevantRequest::new("claims data", "validating a phenotype").fragments();

        assert!(fragments.header.contains("expert informatician"));
        assert!(fragments.header.contains("The purpose is validating a phenotype."));
        assert!(fragments.header.contains("The text is from claims data."));
        assert!(fragments.header.contains(RELEVANT_ANSWER));
        assert!(fragments.header.contains(NOT_RELEVANT_ANSWER));
        assert!(fragments.header.contains(ANSWER_CONSTRAINT));
        assert!(!fragments.header.contains("Actionable details"));
    }

    #[test]
    fn footer_is_a_separate_fragment() {
        let fragments = IsRelevantRequest::new("o", "p").fragments();

        assert_eq!(fragments.footer, IS_RELEVANT_FOOTER);
        assert_eq!(fragments.footer.trim(), ANSWER_CONSTRAINT);
        assert!(!fragments.actionable.contains(ANSWER_CONSTRAINT));
    }

    #[test]
    fn fragments_are_ordered_header_actionable_footer() {
        let fragments = IsRelevantRequest::new("o", "p").fragments();
        let [header, actionable, footer] = fragments.as_slice();

        assert!(header.starts_with("TASK:"));
        assert!(actionable.starts_with("Actionable details = any of"));
        assert_eq!(footer, IS_RELEVANT_FOOTER);
    }

    #[test]
    fn default_details_used_without_override() {
        let fragments = IsRelevantRequest::new("o", "p").fragments();

        for bullet in DEFAULT_ACTIONABLE_BULLETS {
            assert!(fragments.actionable.contains(&format!("* {}\n", bullet)));
        }
    }

    #[test]
    fn custom_details_replace_defaults() {
        let request = IsRelevantRequest::new("claims data", "validating a phenotype")
            .with_details(["signal-noise ratio window", "hyper-specific eligibility criterion"]);
        let prompt = request.render_with(&ConcatJoiner);

        assert!(prompt.contains("* signal-noise ratio window\n"));
        assert!(prompt.contains("* hyper-specific eligibility criterion\n"));
        assert!(!prompt.contains("* data source or care setting"));
    }

    #[test]
    fn render_with_passes_fragments_to_joiner() {
        let request = IsRelevantRequest::new("o", "p");
        let fragments = request.fragments();

        assert_eq!(
            request.render_with(&ConcatJoiner),
            format!("{}{}{}", fragments.header, fragments.actionable, fragments.footer)
        );
    }

    #[test]
    fn request_round_trips_through_json_without_details() {
        let request = IsRelevantRequest::new("EHR", "cohort building");
        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(json, r#"{"data_origin":"EHR","purpose":"cohort building"}"#);
        let back: IsRelevantRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}

//! API Facade for the application.
//!
//! Prompt builders bound to the process-wide fragment joiner, plus the
//! command entry points used by the CLI.

use std::path::Path;

use crate::adapters::joiners::resolve_joiner;
use crate::app::commands::{details, is_relevant};
use crate::domain::IsRelevantRequest;

pub use crate::app::commands::details::DetailsView;
pub use crate::app::commands::is_relevant::{IsRelevantOptions, IsRelevantOutput};
pub use crate::domain::AppError;

/// Compose the *is relevant* prompt.
///
/// `data_origin` and `purpose` are interpolated verbatim. `details`, when
/// given, replaces the default bullets entirely.
///
/// # Examples
///
/// ```
/// let prompt = llmprompts::build_is_relevant_prompt(
///     "claims data",
///     "validating a phenotype",
///     Some(&["signal-noise ratio window"]),
/// );
/// assert!(prompt.contains("* signal-noise ratio window"));
/// assert!(!prompt.contains("* data source or care setting"));
/// ```
pub fn build_is_relevant_prompt(
    data_origin: &str,
    purpose: &str,
    details: Option<&[&str]>,
) -> String {
    let mut request = IsRelevantRequest::new(data_origin, purpose);
    if let Some(details) = details {
        request = request.with_details(details.iter().copied());
    }
    render(&request)
}

/// Render a request with the process-wide joiner.
pub fn render(request: &IsRelevantRequest) -> String {
    request.render_with(resolve_joiner())
}

/// Run `is-relevant` against the current directory.
pub fn is_relevant(options: IsRelevantOptions) -> Result<IsRelevantOutput, AppError> {
    is_relevant_at(&std::env::current_dir()?, options)
}

/// Run `is-relevant` with `root` as the config lookup directory.
pub fn is_relevant_at(
    root: &Path,
    options: IsRelevantOptions,
) -> Result<IsRelevantOutput, AppError> {
    is_relevant::execute(root, options, resolve_joiner())
}

/// Show the default actionable-detail bullets.
pub fn details(view: DetailsView) -> String {
    details::execute(view)
}

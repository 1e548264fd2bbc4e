//! `is-relevant`: merge CLI options with config and render the prompt.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::app::config::{load_config, load_details_file};
use crate::domain::{AppError, IsRelevantRequest, PromptConfig};
use crate::ports::FragmentJoiner;

/// Options for the `is-relevant` command.
#[derive(Debug, Clone, Default)]
pub struct IsRelevantOptions {
    pub data_origin: Option<String>,
    pub purpose: Option<String>,
    /// Inline details; non-empty replaces every other source.
    pub details: Vec<String>,
    pub details_file: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Rendered prompt together with the inputs that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct IsRelevantOutput {
    pub joiner: &'static str,
    pub request: IsRelevantRequest,
    pub prompt: String,
}

pub fn execute(
    root: &Path,
    options: IsRelevantOptions,
    joiner: &dyn FragmentJoiner,
) -> Result<IsRelevantOutput, AppError> {
    let config = load_config(root, options.config.as_deref())?;
    let request = resolve_request(options, config)?;
    let prompt = request.render_with(joiner);
    Ok(IsRelevantOutput { joiner: joiner.name(), request, prompt })
}

/// Precedence: inline flags, then details file, then config.
fn resolve_request(
    options: IsRelevantOptions,
    config: PromptConfig,
) -> Result<IsRelevantRequest, AppError> {
    let section = config.is_relevant;

    let data_origin = options
        .data_origin
        .or(section.data_origin)
        .ok_or(AppError::MissingInput("data origin"))?;
    let purpose = options.purpose.or(section.purpose).ok_or(AppError::MissingInput("purpose"))?;

    let details = if !options.details.is_empty() {
        Some(options.details)
    } else if let Some(path) = options.details_file.as_deref() {
        Some(load_details_file(path)?)
    } else {
        section.details
    };

    let request = IsRelevantRequest::new(data_origin, purpose);
    Ok(match details {
        Some(details) => request.with_details(details),
        None => request,
    })
}

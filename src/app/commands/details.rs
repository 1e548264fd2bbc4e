//! `details`: inspect the default actionable-detail bullets.

use crate::domain::prompt::{DEFAULT_ACTIONABLE_BULLETS, build_actionable_details_section};

/// What the `details` command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsView {
    /// One phrase per line.
    List,
    /// The section as embedded in the prompt.
    Section,
}

pub fn execute(view: DetailsView) -> String {
    match view {
        DetailsView::List => DEFAULT_ACTIONABLE_BULLETS.join("\n"),
        DetailsView::Section => build_actionable_details_section(None),
    }
}

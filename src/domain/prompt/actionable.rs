//! The *actionable details* bullet section.

/// Canonical categories of actionable phenotype-definition detail.
///
/// A paragraph mentioning any of these should be classified as relevant.
pub const DEFAULT_ACTIONABLE_BULLETS: &[&str] = &[
    "data source or care setting",
    "demographic filter (age, sex, insurance, etc.)",
    "entry/index event (diagnosis/procedure/drug/lab code, ≥ n codes, look‑back, first/second hit, etc.)",
    "extra inclusion / exclusion rule",
    "wash‑out or continuous‑enrollment window",
    "exit/censor rule",
    "outcome‑finding algorithm",
    "explicit medical codes (ICD, SNOMED, CPT, RxNorm, ATC, LOINC …)",
    "follow‑up / time‑at‑risk spec",
    "comparator or exposure logic",
    "validation stats (PPV, sensitivity)",
    "attrition counts",
];

/// Label line opening the section.
pub const ACTIONABLE_DETAILS_LABEL: &str = "Actionable details = any of";

/// Marker prefixed to every detail line.
pub const BULLET_MARKER: &str = "* ";

/// Render the *Actionable details* subsection of the prompt.
///
/// `None` selects [`DEFAULT_ACTIONABLE_BULLETS`]. A supplied slice replaces
/// the defaults entirely; an empty slice yields the label with no rows.
pub fn build_actionable_details_section(details: Option<&[&str]>) -> String {
    let details = details.unwrap_or(DEFAULT_ACTIONABLE_BULLETS);

    let mut section = format!("{}\n\n", ACTIONABLE_DETAILS_LABEL);
    for detail in details {
        section.push_str(BULLET_MARKER);
        section.push_str(detail);
        section.push('\n');
    }
    section
}

//! Fragment joiner adapters and one-time resolution of the active joiner.

#[cfg(feature = "chain")]
mod chain;
mod newline;

use std::sync::OnceLock;

#[cfg(feature = "chain")]
pub use chain::ChainJoiner;
pub use newline::NewlineJoiner;

use crate::ports::FragmentJoiner;

static JOINER: OnceLock<Box<dyn FragmentJoiner>> = OnceLock::new();

/// The process-wide joiner, resolved on first use.
///
/// Prefers [`ChainJoiner`] when the `chain` feature is compiled in and the
/// joiner can be constructed; otherwise binds [`NewlineJoiner`].
pub fn resolve_joiner() -> &'static dyn FragmentJoiner {
    JOINER.get_or_init(load_joiner).as_ref()
}

#[cfg(feature = "chain")]
fn load_joiner() -> Box<dyn FragmentJoiner> {
    match ChainJoiner::new() {
        Ok(joiner) => {
            tracing::debug!(joiner = joiner.name(), "fragment joiner resolved");
            Box::new(joiner)
        }
        Err(err) => {
            tracing::debug!(error = %err, "chain joiner unavailable; using newline joiner");
            Box::new(NewlineJoiner::new())
        }
    }
}

#[cfg(not(feature = "chain"))]
fn load_joiner() -> Box<dyn FragmentJoiner> {
    tracing::debug!("chain feature disabled; using newline joiner");
    Box::new(NewlineJoiner::new())
}

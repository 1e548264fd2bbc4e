/// Strategy for concatenating ordered prompt fragments into one string.
///
/// This abstraction allows swapping the composition engine (e.g. minijinja)
/// without the prompt builders knowing which one is bound.
pub trait FragmentJoiner: Send + Sync {
    /// Short identifier used in diagnostics and JSON output.
    fn name(&self) -> &'static str;

    /// Join `fragments` in order.
    ///
    /// Implementations must keep every fragment's text and ordering intact;
    /// only the whitespace between fragments may differ.
    fn join(&self, fragments: &[&str]) -> String;
}

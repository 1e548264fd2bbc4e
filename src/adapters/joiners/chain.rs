use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;
use crate::ports::FragmentJoiner;

const CHAIN_TEMPLATE_NAME: &str = "chain";

/// Emits each fragment in order with nothing between them.
const CHAIN_TEMPLATE: &str = "{% for fragment in fragments %}{{ fragment }}{% endfor %}";

/// Joiner backed by a precompiled minijinja template.
///
/// Fragments are concatenated as-is, so each one is expected to carry its own
/// trailing line breaks.
pub struct ChainJoiner {
    env: Environment<'static>,
}

impl ChainJoiner {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(CHAIN_TEMPLATE_NAME, CHAIN_TEMPLATE)
            .map_err(|err| AppError::Template(err.to_string()))?;
        Ok(Self { env })
    }

    fn render(&self, fragments: &[&str]) -> Result<String, minijinja::Error> {
        self.env.get_template(CHAIN_TEMPLATE_NAME)?.render(context! { fragments => fragments })
    }
}

impl FragmentJoiner for ChainJoiner {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn join(&self, fragments: &[&str]) -> String {
        match self.render(fragments) {
            Ok(joined) => joined,
            Err(err) => {
                tracing::debug!(error = %err, "chain render failed; concatenating directly");
                fragments.concat()
            }
        }
    }
}

mod catalog;
mod config;
mod directive;
mod error;
pub mod generators;
pub mod random;
mod resolver;
pub mod scanner;

use std::borrow::Cow;
use std::collections::HashSet;

use crate::random::{RandomSource, SecureRandom};
use crate::resolver::Resolver;

pub use catalog::Placeholder;
pub use config::{Config, UnknownDirective};
pub use directive::{Directive, Kind, ParamKind};
pub use error::Error;

/// Main entry point for the Tabby placeholder engine.
///
/// The engine holds no mutable state, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Tabby {
    config: Config,
}

impl Tabby {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace every `{{...}}` marker with a freshly generated value drawn
    /// from the secure random source.
    pub fn substitute<'b>(&self, template: &'b str) -> Cow<'b, str> {
        self.substitute_with(template, &mut SecureRandom)
    }

    /// Substitute using a caller supplied random source.
    pub fn substitute_with<'b>(&self, template: &'b str, rng: &mut dyn RandomSource) -> Cow<'b, str> {
        Resolver::new(&self.config).substitute(template, rng)
    }

    /// Find markers that would not resolve cleanly without substituting
    /// anything.
    pub fn diagnose(&self, template: &str) -> Vec<Error> {
        Resolver::new(&self.config).diagnose(template)
    }
}

/// Substitute with the default configuration.
pub fn substitute(template: &str) -> String {
    Tabby::default().substitute(template).into_owned()
}

/// Supported markers with a short description each, for display.
pub fn list_placeholders() -> &'static [Placeholder] {
    catalog::PLACEHOLDERS
}

/// Primary keywords of the recognised directive kinds used in `template`.
pub fn find_placeholders(template: &str) -> Vec<String> {
    let mut kinds = HashSet::new();

    for (token, _) in scanner::Scanner::new(template) {
        if let scanner::Token::Marker { directive, .. } = token {
            if let Some(kind) = Directive::parse(directive).resolve_kind() {
                kinds.insert(kind);
            }
        }
    }

    // Convert to sorted Vec for deterministic ordering
    let mut result: Vec<String> = kinds.into_iter().map(|k| k.keyword().to_string()).collect();
    result.sort();
    result
}

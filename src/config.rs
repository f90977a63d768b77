#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What an unrecognised directive turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnknownDirective {
    /// Rebuild `{{kind}}`, dropping any parameters (`{{foo:1:2}}` -> `{{foo}}`)
    #[default]
    Kind,
    /// Emit the original marker text untouched
    Verbatim,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Handling of markers whose kind is not in the catalog
    pub unknown: UnknownDirective,
    /// Upper bound on the decimals parameter of `float`
    pub max_decimals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unknown: UnknownDirective::Kind,
            max_decimals: 20,
        }
    }
}

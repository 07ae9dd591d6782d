pub mod error;
pub mod extension;
pub mod models;
pub mod rules;
pub mod validation;

pub use error::{Error, ErrorKind, Result, ValidationError};
pub use extension::{Extension, StringSchema};
pub use rules::{Rule, State};
pub use validation::disposable::DisposableDomains;
pub use validation::dnsmx::{MxChecker, MxConfig, MxLookup};
pub use validation::patterns::{Mode, Pattern, PatternSet};

#[cfg(test)]
mod pipeline_tests;

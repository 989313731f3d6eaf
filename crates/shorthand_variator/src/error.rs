use thiserror::Error;

/// Faults in the configuration of a variant table.
///
/// These indicate a bug in a shorthand strategy, never bad input data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariatorError {
  #[error("A variant table needs at least one variant")]
  EmptyTable,
  #[error("Longhand {name} is bound to more than one variant")]
  DuplicateLonghand { name: String },
  #[error("No inherit value for {class} (longhand {name})")]
  NoInheritValue { name: String, class: String },
}

//! Rule contract, registries and the built-in rules.

pub mod types;
pub mod registry;
pub mod pin_grid;
pub mod pin_length;
pub mod pin_numbers;
pub mod reference_field;

pub use types::*;
pub use registry::RuleRegistry;

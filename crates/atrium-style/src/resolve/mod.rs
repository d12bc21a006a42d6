//! Token substitution into renderer-ready rules.

mod substitute;

pub use substitute::{ResolvedDeclaration, ResolvedRule, ResolvedSheet};

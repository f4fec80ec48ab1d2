//! Record transformation module
//!
//! Reshapes each row to the schema emitted for its stream before the row is
//! written as a record message.
//!
//! # Overview
//!
//! - Every declared type is tried in order, `null` last
//! - Values are converted where the declared type differs from the runtime type
//! - Object keys the schema does not declare are dropped and reported

mod transformer;

pub use transformer::Transformer;

#[cfg(test)]
mod tests;

//! State module
//!
//! Carries the checkpoint passed in with `--state` through to the state
//! messages of the run. The tap never inspects or changes it.

mod types;

pub use types::State;

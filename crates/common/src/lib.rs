//! Shared building blocks: response envelopes and logging setup.

pub mod types;
pub mod utils;

//! Matching helpers

pub mod crossing;

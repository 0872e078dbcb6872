//! CLI command implementations

pub mod noise;
pub mod roll;
pub mod seed;
pub mod shuffle;

mod reporting;

//! Likes aggregation pipelines.
//!
//! Each pipeline reads the post export once, averages `Likes` per grouping
//! key, and writes the averages as a CSV table: per raw date string in
//! [`analyzer::by_date`], per platform and post type in
//! [`analyzer::by_platform`].

pub mod aggregate;
pub mod analyzer;
pub mod types;
pub mod utility;

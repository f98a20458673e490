//! Dataset container and column schema.
//!
//! The balancing components all operate on a [`Dataset`]: a sample-major
//! feature matrix paired with an integer label per sample. Inputs are
//! treated as read-only; every operation that changes row membership builds
//! a new owned dataset.

mod dataset;
mod schema;

pub use dataset::Dataset;
pub use schema::Schema;

//! The validated DSEM graph and its export views.

mod dag;
mod export;

// Re-export key types for convenient access
pub use dag::DsemGraph;
pub use export::EdgeLabel;

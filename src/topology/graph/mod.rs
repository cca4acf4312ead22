pub mod graph_trait;
pub mod in_memory;
pub mod mutable;

// Re-export the core traits and in-memory impl at top level
pub use graph_trait::ElementGraph;
pub use in_memory::{InMemoryElementGraph, RelationIter};
pub use mutable::MutableElementGraph;

#[cfg(test)]
mod tests;

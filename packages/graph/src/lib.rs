pub mod dependency;
pub mod error;
pub mod order;
pub mod path;
pub mod schedule;

pub use dependency::DependencyGraph;
pub use error::GraphError;
pub use path::WeightedPath;

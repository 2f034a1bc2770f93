pub mod classifier;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod neighbors;
pub mod params;
pub mod types;
pub mod vote;

pub use classifier::Classifier;
pub use error::ClassifyError;
pub use neighbors::nearest;
pub use params::Params;
pub use types::{Coords, LabeledPoint, Query, ScoredPoint};
pub use vote::majority;

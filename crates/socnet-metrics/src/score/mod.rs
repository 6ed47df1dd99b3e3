pub mod importance;
pub mod normalize;

pub use importance::{ImportanceRanker, NodeScore, RankerConfig};
pub use normalize::{DEFAULT_EPSILON, z_score};

pub mod history;
pub mod predictor;

// Re-export key types for convenience
#[allow(unused_imports)]
pub use history::{History, Sample};
#[allow(unused_imports)]
pub use predictor::{Predictor, ScoredTitle};

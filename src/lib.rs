pub mod error;
pub mod data;
pub mod model;
pub mod loss;
pub mod eval;

// Convenience re-exports
pub use error::SseError;
pub use data::{Dataset, Observation};
pub use model::{predict, AffineModel};
pub use loss::sse::SseLoss;
pub use eval::{evaluate, sum_of_squared_errors, Evaluation};

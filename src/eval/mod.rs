pub mod evaluation;

pub use evaluation::{evaluate, sum_of_squared_errors, Evaluation};

pub mod observation;
pub mod dataset;

pub use observation::Observation;
pub use dataset::Dataset;

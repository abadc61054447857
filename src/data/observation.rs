use serde::{Deserialize, Serialize};

/// One input row: two numeric features.
///
/// Serializes as a `[f1, f2]` pair so dataset files read like the table they
/// came from, e.g. `[[50, 10], [100, 5]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Observation {
    pub feature1: f64,
    pub feature2: f64,
}

impl Observation {
    pub fn new(feature1: f64, feature2: f64) -> Observation {
        Observation { feature1, feature2 }
    }
}

impl From<[f64; 2]> for Observation {
    fn from([feature1, feature2]: [f64; 2]) -> Self {
        Observation { feature1, feature2 }
    }
}

impl From<Observation> for [f64; 2] {
    fn from(o: Observation) -> Self {
        [o.feature1, o.feature2]
    }
}

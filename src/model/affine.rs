use crate::data::observation::Observation;

pub const W1: f64 = 10.0;
pub const W2: f64 = 2.0;
pub const INTERCEPT: f64 = 50.0;

/// The fixed predictor: `10·f1 + 2·f2 + 50`.
pub fn predict(feature1: f64, feature2: f64) -> f64 {
    W1 * feature1 + W2 * feature2 + INTERCEPT
}

/// Affine predictor over two features.
///
/// The coefficients are the fixed `W1`, `W2` and `INTERCEPT`; they can be read
/// but never set or fitted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AffineModel {
    _fixed: (),
}

impl AffineModel {
    pub fn new() -> AffineModel {
        AffineModel::default()
    }

    /// `(w1, w2, intercept)`
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (W1, W2, INTERCEPT)
    }

    pub fn predict(&self, obs: &Observation) -> f64 {
        predict(obs.feature1, obs.feature2)
    }

    /// One prediction per observation, in input order.
    pub fn predict_all(&self, observations: &[Observation]) -> Vec<f64> {
        observations.iter().map(|o| self.predict(o)).collect()
    }
}

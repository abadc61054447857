use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::loss::sse::SseLoss;
use crate::model::affine::AffineModel;

/// Outcome of running a model over a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Predictions, index-aligned with the dataset's observations.
    pub predicted: Vec<f64>,
    /// Normalized sum of squared errors.
    pub sse: f64,
    /// Divisor the raw sum was normalized by.
    pub divisor: f64,
}

/// Predicts every observation, then aggregates against the actual values.
pub fn evaluate(model: &AffineModel, dataset: &Dataset) -> Result<Evaluation> {
    dataset.validate()?;
    log::debug!("evaluating {} observations", dataset.len());

    let predicted = model.predict_all(&dataset.observations);
    let divisor = dataset.divisor();
    let sse = SseLoss::loss(&dataset.actual, &predicted, divisor)?;

    log::info!("sse = {sse} (divisor {divisor})");
    Ok(Evaluation { predicted, sse, divisor })
}

/// SSE of the default model over the built-in scenario.
pub fn sum_of_squared_errors() -> Result<f64> {
    Ok(evaluate(&AffineModel::default(), &Dataset::scenario())?.sse)
}

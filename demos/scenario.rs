use regression_sse::{evaluate, AffineModel, Dataset};

fn main() {
    let model = AffineModel::default();
    let dataset = Dataset::scenario();

    let result = match evaluate(&model, &dataset) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("evaluation failed: {e}");
            std::process::exit(1);
        }
    };

    for ((obs, actual), predicted) in dataset.observations.iter()
        .zip(dataset.actual.iter())
        .zip(result.predicted.iter())
    {
        println!(
            "Input: [{}, {}] -> Predicted: {:.1}  Actual: {:.1}  Residual: {:+.1}",
            obs.feature1, obs.feature2, predicted, actual, actual - predicted
        );
    }
    println!("SSE / {} = {:.4}", result.divisor, result.sse);
}

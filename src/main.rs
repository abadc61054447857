use regression_sse::{evaluate, AffineModel, Dataset, SseError};

// Prints the SSE of the fixed model over the built-in table, or over the
// dataset JSON file given as the only argument.
fn main() -> Result<(), SseError> {
    env_logger::try_init().unwrap_or_default();

    let dataset = match std::env::args().nth(1) {
        Some(path) => Dataset::load_json(&path)?,
        None => Dataset::scenario(),
    };

    let result = evaluate(&AffineModel::default(), &dataset)?;
    println!("{}", result.sse);
    Ok(())
}

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::data::observation::Observation;
use crate::error::{Result, SseError};

/// Observations paired index-for-index with their actual values.
///
/// `divisor` normalizes the aggregated error. When it is not set the
/// observation count is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub observations: Vec<Observation>,
    pub actual: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divisor: Option<f64>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>, actual: Vec<f64>) -> Dataset {
        Dataset { observations, actual, divisor: None }
    }

    pub fn with_divisor(mut self, divisor: f64) -> Dataset {
        self.divisor = Some(divisor);
        self
    }

    /// The five-row table the binary evaluates when no file is given.
    pub fn scenario() -> Dataset {
        let observations = [[50.0, 10.0], [100.0, 5.0], [75.0, 12.0], [200.0, 2.0], [125.0, 14.0]]
            .into_iter()
            .map(Observation::from)
            .collect();
        Dataset::new(observations, vec![500.0, 1200.0, 800.0, 2000.0, 1400.0])
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Explicit divisor, else the observation count.
    pub fn divisor(&self) -> f64 {
        self.divisor.unwrap_or(self.len() as f64)
    }

    /// Checks the length invariant and that the divisor can be divided by.
    pub fn validate(&self) -> Result<()> {
        if self.observations.len() != self.actual.len() {
            return Err(SseError::invalid(format!(
                "{} observations but {} actual values",
                self.observations.len(),
                self.actual.len()
            )));
        }
        let d = self.divisor();
        if d == 0.0 || !d.is_finite() {
            return Err(SseError::invalid(format!("divisor must be finite and nonzero, got {d}")));
        }
        Ok(())
    }

    /// Serializes the dataset to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        // Dropping a BufWriter discards flush errors.
        writer.flush()?;
        Ok(())
    }

    /// Reads a dataset written by `save_json` (or by hand) and validates it.
    pub fn load_json(path: &str) -> Result<Dataset> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let dataset: Dataset = serde_json::from_reader(reader)?;
        dataset.validate()?;
        log::debug!("loaded {} observations from {path}", dataset.len());
        Ok(dataset)
    }
}

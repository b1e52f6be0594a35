use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The uniform draw must exceed this for a positive call, giving a 40%
/// positive rate. Demo behavior, not a calibrated prior.
pub const POSITIVE_THRESHOLD: f64 = 0.6;
/// Lower bound of generated confidence values.
pub const CONFIDENCE_FLOOR: f64 = 0.75;
/// Width of the confidence range; the top stays strictly below 0.99.
pub const CONFIDENCE_SPAN: f64 = 0.24;
/// Fixed simulated inference latency in milliseconds.
pub const ANALYSIS_DELAY_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Prediction {
    Normal,
    Pneumonia,
}

impl Prediction {
    /// Whether this is the disease-present class.
    pub fn is_positive(self) -> bool {
        matches!(self, Prediction::Pneumonia)
    }
}

/// Raw classifier output: the winning class and the probability mass assigned
/// to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub prediction: Prediction,
    pub confidence: f64,
}

impl Outcome {
    pub fn normal_probability(&self) -> f64 {
        match self.prediction {
            Prediction::Normal => self.confidence,
            Prediction::Pneumonia => 1.0 - self.confidence,
        }
    }

    pub fn pneumonia_probability(&self) -> f64 {
        match self.prediction {
            Prediction::Pneumonia => self.confidence,
            Prediction::Normal => 1.0 - self.confidence,
        }
    }

    /// Stamp the outcome with its completion time. Per-class probabilities
    /// are derived here, so they always sum to one and the predicted class
    /// always carries the confidence mass.
    pub fn into_result(self, completed_at: String) -> AnalysisResult {
        AnalysisResult {
            prediction: self.prediction,
            confidence: self.confidence,
            normal_probability: self.normal_probability(),
            pneumonia_probability: self.pneumonia_probability(),
            completed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub prediction: Prediction,
    pub confidence: f64,
    pub normal_probability: f64,
    pub pneumonia_probability: f64,
    /// ISO-8601 wall-clock time of completion, supplied by the caller.
    pub completed_at: String,
}

/// Pluggable inference capability. The workflow never looks inside, so a real
/// model integration can replace [`SimulatedClassifier`] without touching the
/// surrounding state machine.
pub trait Classifier<I> {
    fn predict(&mut self, image: &I) -> Outcome;
}

/// Draws a prediction from an injected uniform source in `[0, 1)`. The image
/// is ignored; only the distribution matters here.
pub struct SimulatedClassifier<R> {
    uniform: R,
}

impl<R: FnMut() -> f64> SimulatedClassifier<R> {
    pub fn new(uniform: R) -> Self {
        Self { uniform }
    }
}

impl<I, R: FnMut() -> f64> Classifier<I> for SimulatedClassifier<R> {
    fn predict(&mut self, _image: &I) -> Outcome {
        let prediction = if (self.uniform)() > POSITIVE_THRESHOLD {
            Prediction::Pneumonia
        } else {
            Prediction::Normal
        };
        let confidence = CONFIDENCE_FLOOR + (self.uniform)() * CONFIDENCE_SPAN;

        Outcome {
            prediction,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Uniform source replaying a fixed sequence of draws.
    fn replay(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = values.into_iter();
        move || iter.next().expect("uniform sequence exhausted")
    }

    /// Cheap deterministic uniform source for the statistical checks.
    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn draw_above_threshold_is_pneumonia() {
        let mut classifier = SimulatedClassifier::new(replay(vec![0.61, 0.0]));
        let outcome = classifier.predict(&"xray");
        assert_eq!(outcome.prediction, Prediction::Pneumonia);
        assert_abs_diff_eq!(outcome.confidence, 0.75);
    }

    #[test]
    fn draw_at_threshold_is_normal() {
        // The comparison is strict: exactly 0.6 stays negative.
        let mut classifier = SimulatedClassifier::new(replay(vec![0.6, 0.5]));
        let outcome = classifier.predict(&"xray");
        assert_eq!(outcome.prediction, Prediction::Normal);
    }

    #[test]
    fn confidence_maps_second_draw_into_range() {
        let mut classifier = SimulatedClassifier::new(replay(vec![0.0, 0.999_999]));
        let outcome = classifier.predict(&"xray");
        assert!(outcome.confidence >= CONFIDENCE_FLOOR);
        assert!(outcome.confidence < 0.99);
    }

    #[test]
    fn probabilities_sum_to_one_and_track_the_predicted_class() {
        for draws in [vec![0.7, 0.1], vec![0.3, 0.9], vec![0.61, 0.0], vec![0.0, 0.999]] {
            let mut classifier = SimulatedClassifier::new(replay(draws));
            let outcome = classifier.predict(&"xray");
            let result = outcome.into_result("2026-08-07T12:00:00.000Z".into());

            assert_abs_diff_eq!(
                result.normal_probability + result.pneumonia_probability,
                1.0,
                epsilon = 1e-12
            );
            let predicted_probability = match result.prediction {
                Prediction::Normal => result.normal_probability,
                Prediction::Pneumonia => result.pneumonia_probability,
            };
            assert_abs_diff_eq!(result.confidence, predicted_probability);
        }
    }

    #[test]
    fn positive_rate_is_roughly_forty_percent() {
        let trials = 20_000;
        let mut classifier = SimulatedClassifier::new(lcg(0x5EED));
        let mut positives = 0;
        for _ in 0..trials {
            let outcome = classifier.predict(&"xray");
            if outcome.prediction.is_positive() {
                positives += 1;
            }
            assert!(outcome.confidence >= CONFIDENCE_FLOOR && outcome.confidence < 0.99);
        }

        let rate = positives as f64 / trials as f64;
        assert!((0.37..0.43).contains(&rate), "positive rate was {rate}");
    }

    #[test]
    fn prediction_displays_as_class_label() {
        assert_eq!(Prediction::Normal.to_string(), "Normal");
        assert_eq!(Prediction::Pneumonia.to_string(), "Pneumonia");
    }
}

//! Result and chart schemas shared by the provider and the presentation layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DemoError;

/// Supported demo problem sizes, in canonical order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub enum ProblemSize {
    #[default]
    N5,
    N20,
    N50,
}

impl ProblemSize {
    /// Canonical ordering; every chart series is index-aligned to it.
    pub const ALL: [ProblemSize; 3] = [ProblemSize::N5, ProblemSize::N20, ProblemSize::N50];

    /// Number of graph nodes this size stands for.
    pub fn nodes(self) -> u32 {
        match self {
            ProblemSize::N5 => 5,
            ProblemSize::N20 => 20,
            ProblemSize::N50 => 50,
        }
    }

    /// Position of this size in [`ProblemSize::ALL`].
    pub fn index(self) -> usize {
        match self {
            ProblemSize::N5 => 0,
            ProblemSize::N20 => 1,
            ProblemSize::N50 => 2,
        }
    }

    /// Chart axis label, e.g. `N=20`.
    pub fn label(self) -> String {
        format!("N={}", self.nodes())
    }
}

impl fmt::Display for ProblemSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes())
    }
}

impl TryFrom<i64> for ProblemSize {
    type Error = DemoError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(ProblemSize::N5),
            20 => Ok(ProblemSize::N20),
            50 => Ok(ProblemSize::N50),
            other => Err(DemoError::InvalidSize(other)),
        }
    }
}

impl From<ProblemSize> for i64 {
    fn from(size: ProblemSize) -> Self {
        i64::from(size.nodes())
    }
}

impl FromStr for ProblemSize {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| DemoError::Message(format!("invalid graph size '{s}'")))?;
        ProblemSize::try_from(n)
    }
}

/// Static per-size figures. Never mutated after startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRecord {
    pub cut_value: f64,
    pub approximation_ratio: f64,
    pub iterations: u32,
    pub target_time_s: f64,
    pub gradient_stability: f64,
    pub scalability_note: String,
}

/// Base figures plus the per-request measured execution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredResult {
    pub graph_size: ProblemSize,
    pub cut_value: f64,
    pub approximation_ratio: f64,
    pub iterations: u32,
    pub target_time_s: f64,
    pub gradient_stability: f64,
    pub scalability_note: String,
    /// Wall-clock duration of the simulated run, rounded to 4 decimals.
    pub execution_time_s: f64,
}

impl MeasuredResult {
    pub fn from_base(graph_size: ProblemSize, base: &BaseRecord, execution_time_s: f64) -> Self {
        MeasuredResult {
            graph_size,
            cut_value: base.cut_value,
            approximation_ratio: base.approximation_ratio,
            iterations: base.iterations,
            target_time_s: base.target_time_s,
            gradient_stability: base.gradient_stability,
            scalability_note: base.scalability_note.clone(),
            execution_time_s,
        }
    }

    /// The static part of this result, without the measured time.
    pub fn base(&self) -> BaseRecord {
        BaseRecord {
            cut_value: self.cut_value,
            approximation_ratio: self.approximation_ratio,
            iterations: self.iterations,
            target_time_s: self.target_time_s,
            gradient_stability: self.gradient_stability,
            scalability_note: self.scalability_note.clone(),
        }
    }
}

/// A fixed competitor baseline, index-aligned to [`ProblemSize::ALL`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompetitorSeries {
    pub name: &'static str,
    pub approximation_ratios: [f64; 3],
    pub execution_times: [f64; 3],
}

impl CompetitorSeries {
    pub fn values(&self) -> SeriesValues {
        SeriesValues {
            approximation_ratios: self.approximation_ratios.to_vec(),
            execution_times: self.execution_times.to_vec(),
        }
    }
}

/// Ratio and time series for one method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesValues {
    pub approximation_ratios: Vec<f64>,
    pub execution_times: Vec<f64>,
}

/// Everything the two comparison charts need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub structured_entropy: SeriesValues,
    pub goemans_williamson: SeriesValues,
    pub quantum_annealer: SeriesValues,
}

impl ChartDataset {
    /// `(method name, series)` pairs in legend order.
    pub fn methods(&self) -> [(&'static str, &SeriesValues); 3] {
        [
            (SUBJECT_METHOD, &self.structured_entropy),
            (GOEMANS_WILLIAMSON, &self.goemans_williamson),
            (QUANTUM_ANNEALER, &self.quantum_annealer),
        ]
    }

    /// True when every series has exactly one value per label.
    pub fn is_aligned(&self) -> bool {
        let n = self.labels.len();
        self.methods()
            .iter()
            .all(|(_, s)| s.approximation_ratios.len() == n && s.execution_times.len() == n)
    }
}

pub const SUBJECT_METHOD: &str = "Structured Entropy";
pub const GOEMANS_WILLIAMSON: &str = "Goemans-Williamson";
pub const QUANTUM_ANNEALER: &str = "Quantum Annealer";

/// What a single provider call resolves to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchOutcome {
    pub result: MeasuredResult,
    pub chart_data: ChartDataset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_size_rejects_unsupported() {
        for n in [7, 0, -1, 100] {
            let err = ProblemSize::try_from(n).unwrap_err();
            assert!(matches!(err, DemoError::InvalidSize(v) if v == n));
        }
    }

    #[test]
    fn test_problem_size_index_matches_canonical_order() {
        for (i, size) in ProblemSize::ALL.iter().enumerate() {
            assert_eq!(size.index(), i);
        }
        assert_eq!(ProblemSize::N20.label(), "N=20");
    }

    #[test]
    fn test_problem_size_parse() {
        assert_eq!("50".parse::<ProblemSize>().unwrap(), ProblemSize::N50);
        assert!("abc".parse::<ProblemSize>().is_err());
        assert!("21".parse::<ProblemSize>().is_err());
    }

    #[test]
    fn test_problem_size_serializes_as_integer() {
        let json = serde_json::to_string(&ProblemSize::N20).unwrap();
        assert_eq!(json, "20");
        let back: ProblemSize = serde_json::from_str("5").unwrap();
        assert_eq!(back, ProblemSize::N5);
        assert!(serde_json::from_str::<ProblemSize>("6").is_err());
    }

    #[test]
    fn test_misaligned_dataset_detected() {
        let values = SeriesValues {
            approximation_ratios: vec![0.9, 0.9],
            execution_times: vec![1.0, 1.0, 1.0],
        };
        let dataset = ChartDataset {
            labels: vec!["N=5".into(), "N=20".into(), "N=50".into()],
            structured_entropy: values.clone(),
            goemans_williamson: values.clone(),
            quantum_annealer: values,
        };
        assert!(!dataset.is_aligned());
    }
}

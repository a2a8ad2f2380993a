//! Temperature observations and range statistics.

use serde::{Deserialize, Serialize};

use crate::date::ObservationDate;

/// A single temperature observation, serialized as `[date, temperature]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(ObservationDate, f64)", into = "(ObservationDate, f64)")]
pub struct TemperatureReading {
    pub date: ObservationDate,
    pub temperature: f64,
}

impl TemperatureReading {
    #[must_use]
    pub fn new(date: ObservationDate, temperature: f64) -> Self {
        Self { date, temperature }
    }
}

impl From<(ObservationDate, f64)> for TemperatureReading {
    fn from((date, temperature): (ObservationDate, f64)) -> Self {
        Self { date, temperature }
    }
}

impl From<TemperatureReading> for (ObservationDate, f64) {
    fn from(reading: TemperatureReading) -> Self {
        (reading.date, reading.temperature)
    }
}

/// Minimum, average and maximum temperature over a date range.
///
/// All three are `None` when the range holds no observation, mirroring
/// SQL aggregates over an empty set. Serialized as `[min, avg, max]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "(Option<f64>, Option<f64>, Option<f64>)",
    into = "(Option<f64>, Option<f64>, Option<f64>)"
)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    /// Statistics of a range without observations.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

impl From<(Option<f64>, Option<f64>, Option<f64>)> for TemperatureStats {
    fn from((min, avg, max): (Option<f64>, Option<f64>, Option<f64>)) -> Self {
        Self { min, avg, max }
    }
}

impl From<TemperatureStats> for (Option<f64>, Option<f64>, Option<f64>) {
    fn from(stats: TemperatureStats) -> Self {
        (stats.min, stats.avg, stats.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_reading_as_pair() {
        let reading = TemperatureReading::new("2017-08-23".parse().unwrap(), 81.0);
        let json = serde_json::to_string(&reading).unwrap();
        assert_eq!(json, r#"["2017-08-23",81.0]"#);
    }

    #[test]
    fn should_serialize_stats_as_triple() {
        let stats = TemperatureStats {
            min: Some(58.0),
            avg: Some(74.5),
            max: Some(87.0),
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, "[58.0,74.5,87.0]");
    }

    #[test]
    fn should_serialize_empty_stats_as_nulls() {
        let stats = TemperatureStats::empty();
        assert!(stats.is_empty());
        assert_eq!(serde_json::to_string(&stats).unwrap(), "[null,null,null]");
    }

    #[test]
    fn should_deserialize_stats_triple() {
        let stats: TemperatureStats = serde_json::from_str("[60.0,60.0,60.0]").unwrap();
        assert_eq!(stats.min, Some(60.0));
        assert_eq!(stats.avg, Some(60.0));
        assert_eq!(stats.max, Some(60.0));
        assert!(!stats.is_empty());
    }
}

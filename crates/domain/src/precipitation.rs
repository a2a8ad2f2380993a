//! Precipitation readings and the date-keyed precipitation map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date::ObservationDate;

/// One precipitation value as stored, `None` when the reading is missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecipitationReading {
    pub date: ObservationDate,
    pub precipitation: Option<f64>,
}

impl PrecipitationReading {
    #[must_use]
    pub fn new(date: ObservationDate, precipitation: Option<f64>) -> Self {
        Self {
            date,
            precipitation,
        }
    }
}

/// Precipitation keyed by date, one value per date.
///
/// Several stations report on the same date but only one value is kept:
/// recording a reading for a date that is already present replaces the
/// earlier value. Serializes as a JSON object with keys in date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrecipitationByDate(BTreeMap<ObservationDate, Option<f64>>);

impl PrecipitationByDate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `reading`, replacing any value already held for its date.
    pub fn record(&mut self, reading: PrecipitationReading) {
        self.0.insert(reading.date, reading.precipitation);
    }

    /// Value held for `date`: `None` if the date is absent, `Some(None)`
    /// if the date is present with a missing reading.
    #[must_use]
    pub fn get(&self, date: ObservationDate) -> Option<Option<f64>> {
        self.0.get(&date).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PrecipitationReading> for PrecipitationByDate {
    fn from_iter<I: IntoIterator<Item = PrecipitationReading>>(iter: I) -> Self {
        let mut map = Self::new();
        for reading in iter {
            map.record(reading);
        }
        map
    }
}

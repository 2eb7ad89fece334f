//! The delivery fare worker.
//!
//! Cleans a delivery's pings, segments what remains, and prices
//! each segment under a [`Tariff`].

use std::fmt::{Display, Formatter};

use log::debug;

use crate::tariff::{MotionState, Period, StandardTariff, Tariff};
use crate::trip::{retain_plausible, segments, Ping};

#[cfg(test)]
mod test;

/// A delivery's total fare, in currency units.
///
/// The total is held at full precision. It is only rounded
/// to cents when displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Fare(f64);

impl Fare {
    pub fn new(total: f64) -> Self {
        Fare(total)
    }

    pub fn total(&self) -> f64 {
        self.0
    }
}

impl From<Fare> for f64 {
    fn from(fare: Fare) -> Self {
        fare.0
    }
}

impl Display for Fare {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Computes the fare of a single delivery run.
///
/// ```rust
/// use chrono::DateTime;
/// use tripfare::fare::FareCalculator;
/// use tripfare::trip::Ping;
///
/// let at = |secs| DateTime::from_timestamp(secs, 0).unwrap().fixed_offset();
/// let pings = vec![Ping::new("1", 35.0, 51.0, at(0))];
///
/// // A single ping has no segments, so only the minimum applies.
/// let calculator: FareCalculator = FareCalculator::default();
/// let fare = calculator.fare("1", &pings);
/// assert_eq!(fare.to_string(), "3.47");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FareCalculator<T: Tariff = StandardTariff> {
    tariff: T,
}

impl<T: Tariff> FareCalculator<T> {
    pub fn new(tariff: T) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &T {
        &self.tariff
    }

    /// Prices the run of pings belonging to `delivery`.
    ///
    /// Pings must be ordered oldest to newest. There is no failure
    /// path: runs without any segment are charged the tariff's floor.
    pub fn fare(&self, delivery: &str, pings: &[Ping]) -> Fare {
        let valid = retain_plausible(pings);

        let total = segments(&valid).fold(T::FLAG_DROP, |total, segment| {
            let rate = self.tariff.rate(&segment);
            debug!(
                "{delivery}: {} {} segment of {:.3}km over {:.3}h priced at {rate}, total {}",
                MotionState::from(&segment),
                Period::of(segment.start.hour()),
                segment.distance,
                segment.duration,
                total + rate
            );

            total + rate
        });

        Fare(self.tariff.clamp(total))
    }
}

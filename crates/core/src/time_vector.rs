use std::{cmp::Ordering, ops::Deref};

use thiserror::Error;
use uom::si::{
    f64::Time,
    time::{millisecond, second},
};

use crate::constraint::{ConstraintError, NonNegative};

/// Errors raised when building a [`TimeVector`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeVectorError {
    #[error("sample {index} is invalid")]
    Sample {
        index: usize,
        #[source]
        source: ConstraintError,
    },

    #[error("sample {index} ({time} s) precedes the sample before it")]
    Unordered { index: usize, time: f64 },

    #[error("stop time {stop} s precedes start time {start} s")]
    Reversed { start: f64, stop: f64 },

    #[error("stop time {stop} s is not finite")]
    Unbounded { stop: f64 },
}

/// An ordered sequence of non-negative sample times.
///
/// Dereferences to `[Time]`, so it can be passed straight to
/// [`Response::sample`](crate::Response::sample).
#[derive(Debug, Clone, PartialEq)]
pub struct TimeVector(Vec<Time>);

impl TimeVector {
    /// Wraps the given samples after checking they are non-negative and
    /// non-decreasing.
    ///
    /// # Errors
    ///
    /// Returns an error identifying the first offending sample.
    pub fn new(samples: Vec<Time>) -> Result<Self, TimeVectorError> {
        for (index, &time) in samples.iter().enumerate() {
            NonNegative::new(time).map_err(|source| TimeVectorError::Sample { index, source })?;

            if index > 0 && time < samples[index - 1] {
                return Err(TimeVectorError::Unordered {
                    index,
                    time: time.get::<second>(),
                });
            }
        }
        Ok(Self(samples))
    }

    /// Evenly spaced samples from `start` to `stop`, both included.
    ///
    /// Zero samples gives an empty vector and a single sample gives
    /// `[start]`. Otherwise the last sample is exactly `stop`.
    ///
    /// # Errors
    ///
    /// Fails if `start` is negative or NaN, if `stop` is infinite, or if
    /// `stop` precedes `start`.
    ///
    /// # Example
    ///
    /// ```
    /// use tau_core::TimeVector;
    /// use uom::si::{f64::Time, time::millisecond};
    ///
    /// let t = TimeVector::linspace(
    ///     Time::new::<millisecond>(0.0),
    ///     Time::new::<millisecond>(5.0),
    ///     500,
    /// )
    /// .unwrap();
    /// assert_eq!(t.len(), 500);
    /// assert_eq!(t[499], Time::new::<millisecond>(5.0));
    /// ```
    pub fn linspace(start: Time, stop: Time, samples: usize) -> Result<Self, TimeVectorError> {
        NonNegative::new(start).map_err(|source| TimeVectorError::Sample { index: 0, source })?;

        if stop.get::<second>().is_infinite() {
            return Err(TimeVectorError::Unbounded {
                stop: stop.get::<second>(),
            });
        }

        // A NaN stop compares as unordered.
        if let Some(Ordering::Less) | None = stop.partial_cmp(&start) {
            return Err(TimeVectorError::Reversed {
                start: start.get::<second>(),
                stop: stop.get::<second>(),
            });
        }

        let times = match samples {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                #[allow(clippy::cast_precision_loss)]
                let step = (stop - start) / (n - 1) as f64;
                #[allow(clippy::cast_precision_loss)]
                let mut times: Vec<Time> = (0..n).map(|i| start + step * i as f64).collect();
                times[n - 1] = stop;
                times
            }
        };

        Ok(Self(times))
    }

    /// The samples expressed in milliseconds, the unit used on plot axes.
    #[must_use]
    pub fn to_millis(&self) -> Vec<f64> {
        self.0.iter().map(|t| t.get::<millisecond>()).collect()
    }

    /// Consumes the vector and returns the underlying samples.
    #[must_use]
    pub fn into_inner(self) -> Vec<Time> {
        self.0
    }
}

impl Deref for TimeVector {
    type Target = [Time];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

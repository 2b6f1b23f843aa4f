use uom::si::f64::Time;

/// A transient response evaluated at points in time.
///
/// Implementors are pure: the output depends only on the response's own
/// parameters and the time passed in, so repeated calls with the same time
/// give bit-identical results.
pub trait Response {
    /// The quantity the response produces, such as a voltage or current.
    type Output: Copy;

    /// Evaluates the response at a single time.
    fn at(&self, time: Time) -> Self::Output;

    /// Evaluates the response at each time in `times`.
    ///
    /// The result has one entry per input sample, in the same order.
    fn sample(&self, times: &[Time]) -> Vec<Self::Output> {
        times.iter().map(|&time| self.at(time)).collect()
    }
}

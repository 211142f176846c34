use ndarray::{Array1, Array2};
use rand_mt::Mt;

/// 2⁵³, the number of distinct doubles produced by [`RandomStream::next_f64`].
const TWO_POW_53: f64 = 9_007_199_254_740_992.0;

/// 2²⁶, the weight of the high word in [`RandomStream::next_f64`].
const TWO_POW_26: f64 = 67_108_864.0;

/// A seedable pseudo-random stream owned by the caller.
///
/// The stream is a 32-bit Mersenne Twister (MT19937) initialized with the
/// classic `init_genrand` scheme. Doubles are built from two consecutive
/// 32-bit outputs with 53 bits of precision. This is the same contract as
/// numpy's legacy `RandomState` seeded with an integer, so a given seed yields
/// the same coefficient draws as the reference benchmark data.
///
/// Every generator reseeds the stream before drawing, which makes each
/// generated problem a pure function of its family, qudits, and seed.
/// Give each thread its own stream to generate in parallel.
#[derive(Debug, Clone)]
pub struct RandomStream {
    mt: Mt,
}

impl RandomStream {
    /// Creates a stream seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u32) -> Self {
        Self { mt: Mt::new(seed) }
    }

    /// Resets the stream to the state produced by [`RandomStream::seeded`].
    pub fn reseed(&mut self, seed: u32) {
        self.mt = Mt::new(seed);
    }

    /// Returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.mt.next_u32()
    }

    /// Returns a double uniformly distributed in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let high = f64::from(self.next_u32() >> 5);
        let low = f64::from(self.next_u32() >> 6);
        (high * TWO_POW_26 + low) / TWO_POW_53
    }

    /// Returns a double uniformly distributed between `low` and `high`.
    ///
    /// `high` may be smaller than `low`, in which case the value lies in
    /// `(high, low]`.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    /// Draws `len` independent uniform values.
    pub fn uniform_vector(&mut self, low: f64, high: f64, len: usize) -> Array1<f64> {
        Array1::from_shape_simple_fn(len, || self.uniform(low, high))
    }

    /// Draws an `n × n` matrix of independent uniform values in row-major order.
    pub fn uniform_matrix(&mut self, low: f64, high: f64, n: usize) -> Array2<f64> {
        // Standard layout, so elements are produced row by row.
        Array2::from_shape_simple_fn((n, n), || self.uniform(low, high))
    }
}

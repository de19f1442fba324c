/// A discrete state key produced by binning an observation, one bin index per dimension
pub type State = Vec<usize>;

/// Equal-width binning of a continuous observation space
///
/// Each observation dimension is assigned a fixed abstract range `(lo, hi)` —
/// an interval chosen by the designer to bound that signal in normal operation,
/// never fitted to observed data — which is split into `n_bins` equal-width
/// intervals. The resulting mapping from observations to bin-index tuples is
/// total, deterministic, and lossy by construction: the whole point is that
/// many nearby observations collapse into the same table key.
pub struct Discretizer {
    /// Interior cut points per dimension, `n_bins - 1` each, strictly increasing
    cuts: Vec<Vec<f32>>,
    n_bins: usize,
}

impl Discretizer {
    /// Initialize a discretizer from per-dimension value ranges and a shared bin count
    ///
    /// **Panics** if `n_bins` is zero, `ranges` is empty, or any range has `lo >= hi`
    pub fn new(ranges: &[(f32, f32)], n_bins: usize) -> Self {
        assert!(n_bins > 0, "`n_bins` must be positive");
        assert!(!ranges.is_empty(), "at least one observation dimension is required");

        let cuts = ranges
            .iter()
            .map(|&(lo, hi)| {
                assert!(
                    lo < hi,
                    "Invalid bin range [{}, {}]. Lower bound must be below upper bound.",
                    lo,
                    hi,
                );
                let width = (hi - lo) / n_bins as f32;
                (1..n_bins).map(|i| lo + width * i as f32).collect()
            })
            .collect();

        Self { cuts, n_bins }
    }

    /// Number of observation dimensions this discretizer expects
    pub fn dimensions(&self) -> usize {
        self.cuts.len()
    }

    /// Number of bins per dimension
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Map an observation to its bin-index tuple
    ///
    /// The index for each dimension is the number of interior cut points `<= x`,
    /// so intervals are right-inclusive at each cut. Values below the configured
    /// range land in bin `0` and values above it in bin `n_bins - 1`; every
    /// finite observation maps to a valid state.
    ///
    /// **Panics** if the observation's dimensionality does not match the
    /// configured ranges — a malformed observation is a contract violation,
    /// never silently truncated or padded.
    pub fn state(&self, observation: &[f32]) -> State {
        assert_eq!(
            observation.len(),
            self.cuts.len(),
            "Observation has {} dimensions but the discretizer was configured for {}.",
            observation.len(),
            self.cuts.len(),
        );

        observation
            .iter()
            .zip(&self.cuts)
            .map(|(&x, cuts)| cuts.partition_point(|&c| c <= x))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_indices() {
        // edges [-2.4, 0.0, 2.4], i.e. a single interior cut at 0.0
        let disc = Discretizer::new(&[(-2.4, 2.4)], 2);
        assert_eq!(disc.state(&[-3.0]), vec![0], "below range clamps to first bin");
        assert_eq!(disc.state(&[0.1]), vec![1], "interior value lands in its bin");
        assert_eq!(disc.state(&[10.0]), vec![1], "above range clamps to last bin");
    }

    #[test]
    fn total_over_extreme_values() {
        let disc = Discretizer::new(&[(-1.0, 1.0), (-3.5, 3.5)], 10);
        for obs in [
            [f32::MIN, f32::MAX],
            [-1e30, 1e30],
            [f32::NEG_INFINITY, f32::INFINITY],
        ] {
            let state = disc.state(&obs);
            assert!(state.iter().all(|&i| i < 10), "indices in range for {:?}", obs);
        }
    }

    #[test]
    fn deterministic() {
        let disc = Discretizer::new(&[(-2.4, 2.4), (-2.0, 2.0), (-1.0, 1.0), (-3.5, 3.5)], 10);
        let obs = [0.3, -1.99, 0.05, 3.2];
        assert_eq!(disc.state(&obs), disc.state(&obs), "same observation, same state");
    }

    #[test]
    fn distinct_bins_across_range() {
        let disc = Discretizer::new(&[(0.0, 1.0)], 4);
        assert_eq!(disc.state(&[0.1]), vec![0]);
        assert_eq!(disc.state(&[0.3]), vec![1]);
        assert_eq!(disc.state(&[0.6]), vec![2]);
        assert_eq!(disc.state(&[0.9]), vec![3]);
    }

    #[test]
    #[should_panic(expected = "dimensions")]
    fn dimensionality_mismatch_panics() {
        let disc = Discretizer::new(&[(-1.0, 1.0), (-1.0, 1.0)], 5);
        disc.state(&[0.0]);
    }

    #[test]
    #[should_panic(expected = "n_bins")]
    fn zero_bins_panics() {
        Discretizer::new(&[(-1.0, 1.0)], 0);
    }
}

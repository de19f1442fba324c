use rand::{
    distributions::{Distribution, WeightedIndex},
    thread_rng,
};

use crate::{
    assert_interval,
    decay::{self, Decay},
};

/// Epsilon greedy exploration policy with a time-decaying epsilon threshold
///
/// Rather than a bare explore/exploit coin flip, this policy exposes the full
/// action distribution it induces: every action carries a baseline probability
/// of `epsilon / nA`, and the greedy action receives the remaining `1 - epsilon`
/// mass on top. Sampling that distribution keeps exploration alive even when
/// the mass concentrates on the greedy action.
pub struct EpsilonGreedy<D: Decay> {
    epsilon: D,
}

impl<D: Decay> EpsilonGreedy<D> {
    /// Initialize epsilon greedy policy with a decay strategy
    ///
    /// The schedule should stay within `[0, 1]` over the episodes it will be
    /// evaluated at; a constant epsilon is validated up front by
    /// [`constant`](EpsilonGreedy::constant).
    pub fn new(decay: D) -> Self {
        Self { epsilon: decay }
    }

    /// The action probability distribution for a state with the given
    /// action-value row, at episode `t`
    ///
    /// Recomputed from the live row on every call so it always reflects the
    /// latest value estimates. Ties between equal-valued actions break toward
    /// the lowest action id. The result sums to 1 and has no negative entries
    /// for epsilon in `[0, 1]`.
    pub fn distribution(&self, t: u32, q_row: &[f32]) -> Vec<f32> {
        let epsilon = self.epsilon.evaluate(t as f32);
        let n = q_row.len();
        let mut probs = vec![epsilon / n as f32; n];
        probs[argmax(q_row)] += 1.0 - epsilon;
        probs
    }

    /// Sample an action id from a probability vector produced by
    /// [`distribution`](EpsilonGreedy::distribution)
    pub fn sample(&self, probs: &[f32]) -> usize {
        let dist = WeightedIndex::new(probs).expect("`probs` is a non-empty probability vector");
        dist.sample(&mut thread_rng())
    }
}

impl EpsilonGreedy<decay::Constant> {
    /// Initialize epsilon greedy policy with a fixed exploration rate
    ///
    /// **Panics** if `epsilon` is not in the interval `[0,1]`
    pub fn constant(epsilon: f32) -> Self {
        assert_interval!(epsilon, 0.0, 1.0);
        Self::new(decay::Constant::new(epsilon))
    }
}

/// Index of the largest value, first index wins ties
fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

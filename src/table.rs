use std::{collections::HashMap, hash::Hash};

/// A lazily populated action-value table
///
/// Maps discrete states to fixed-length vectors of action-value estimates,
/// one entry per action id. Rows for unseen states are implicitly zero and are
/// only materialized on first access, so the table stays sparse even when the
/// reachable state space is astronomically large.
///
/// ### Generics
/// - `S` - The discrete state key type. Must be `Eq + Hash` to be used as a
///   [`HashMap`] key; agents in this crate use the bin-index tuples produced by
///   [`Discretizer`](crate::discretize::Discretizer).
pub struct QTable<S> {
    values: HashMap<S, Vec<f32>>,
    num_actions: usize,
}

impl<S: Eq + Hash> QTable<S> {
    /// Initialize an empty table with the given row width
    ///
    /// **Panics** if `num_actions` is zero
    pub fn new(num_actions: usize) -> Self {
        assert!(num_actions > 0, "`num_actions` must be positive");
        Self {
            values: HashMap::new(),
            num_actions,
        }
    }

    /// The fixed length of every row
    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    /// Number of states materialized so far
    pub fn num_states(&self) -> usize {
        self.values.len()
    }

    /// The action-value row for `state`, materializing a zero row on first access
    ///
    /// Lookup and insertion are a single operation on the underlying map, so a
    /// state is never materialized twice.
    pub fn row(&mut self, state: S) -> &[f32] {
        self.row_mut(state)
    }

    /// Mutable access to the action-value row for `state`, materializing a zero
    /// row on first access
    pub fn row_mut(&mut self, state: S) -> &mut [f32] {
        let num_actions = self.num_actions;
        self.values
            .entry(state)
            .or_insert_with(|| vec![0.0; num_actions])
    }

    /// A read-only view of the underlying map
    pub fn as_map(&self) -> &HashMap<S, Vec<f32>> {
        &self.values
    }
}

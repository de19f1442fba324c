/// A continuous observation emitted by an environment, one entry per observed signal
pub type Observation = Vec<f32>;

/// The result of a single environment step
///
/// `info` is a diagnostic payload for the caller's benefit. Agents in this crate
/// never read it.
#[derive(Debug, Clone)]
pub struct Step<I> {
    /// The observation produced by executing the action
    pub observation: Observation,
    /// The reward received for the transition
    pub reward: f32,
    /// Whether the environment has reached a terminal state
    pub terminal: bool,
    /// Opaque per-step diagnostics
    pub info: I,
}

/// Represents a Markov decision process with a finite action space and a
/// continuous observation space, defining the dynamics of an environment in
/// which an agent can operate.
///
/// Actions are plain indices in `0..action_space_size()`. Observations are
/// real-valued vectors of length `observation_size()`; discretizing them into
/// something table-friendly is the agent's job, not the environment's.
pub trait Environment {
    /// Diagnostic data attached to each [`Step`], opaque to agents
    type Info;

    /// Reset the environment to an initial state
    ///
    /// **Returns** the initial observation
    fn reset(&mut self) -> Observation;

    /// Update the environment in response to an action taken by an agent
    ///
    /// Each step is attempted exactly once; an environment failure here aborts
    /// training, so implementations should panic only on genuine contract
    /// violations.
    fn step(&mut self, action: usize) -> Step<Self::Info>;

    /// Number of discrete actions available
    fn action_space_size(&self) -> usize;

    /// Length of the observation vectors produced by [`reset`](Environment::reset)
    /// and [`step`](Environment::step)
    fn observation_size(&self) -> usize;
}

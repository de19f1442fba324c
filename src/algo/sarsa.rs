use log::{debug, info};

use crate::{
    assert_interval,
    decay::{self, Decay},
    discretize::{Discretizer, State},
    env::Environment,
    exploration::EpsilonGreedy,
    record::TrainingRecord,
    table::QTable,
};

/// Configuration for the [`SarsaAgent`]
pub struct SarsaAgentConfig<D: Decay> {
    /// How many episodes to train for
    pub num_episodes: usize,
    /// The discount factor - must be between 0 and 1
    pub discount: f32,
    /// The learning rate - must be positive and at most 1
    pub alpha: f32,
    /// The exploration policy
    pub exploration: EpsilonGreedy<D>,
    /// Bins per observation dimension
    pub n_bins: usize,
    /// Abstract value range per observation dimension, one entry per dimension
    pub bin_ranges: Vec<(f32, f32)>,
}

impl Default for SarsaAgentConfig<decay::Constant> {
    /// The classic cart-pole setup: ranges bounding cart position, pole angle,
    /// cart velocity, and pole angular velocity
    fn default() -> Self {
        Self {
            num_episodes: 1000,
            discount: 1.0,
            alpha: 0.5,
            exploration: EpsilonGreedy::constant(0.1),
            n_bins: 10,
            bin_ranges: vec![(-2.4, 2.4), (-2.0, 2.0), (-1.0, 1.0), (-3.5, 3.5)],
        }
    }
}

/// A tabular on-policy TD(0) agent (SARSA) for environments with continuous
/// observation spaces
///
/// Observations are discretized into per-dimension bins and the action-value
/// table is keyed by the resulting bin tuples, so the environment's state space
/// never needs to be enumerated up front. Updates use the behavior policy's own
/// next action:
///
/// Q(s,a) ← Q(s,a) + α \[r + γQ(s',a') − Q(s,a)\]
///
/// ### Generics
/// - `D` - The [`Decay`] schedule driving the exploration rate. Use
///   [`decay::Constant`] to keep epsilon fixed for the whole run.
pub struct SarsaAgent<D: Decay> {
    q: QTable<State>,
    discretizer: Discretizer,
    exploration: EpsilonGreedy<D>,
    record: TrainingRecord,
    num_episodes: usize,
    discount: f32,
    alpha: f32,
    episode: u32,
}

impl<D: Decay> SarsaAgent<D> {
    /// Initialize a new `SarsaAgent` for a given environment
    ///
    /// The environment is only inspected for its action and observation space
    /// sizes here; it is passed back in explicitly for
    /// [`train`](SarsaAgent::train), so independent agents and environments can
    /// be combined freely.
    ///
    /// **Panics** if any configured parameter is out of range, or if
    /// `config.bin_ranges` does not cover every observation dimension the
    /// environment reports
    pub fn new<E: Environment>(env: &E, config: SarsaAgentConfig<D>) -> Self {
        assert!(config.num_episodes > 0, "`num_episodes` must be positive");
        assert_interval!(config.discount, 0.0, 1.0);
        assert!(
            config.alpha > 0.0 && config.alpha <= 1.0,
            "Invalid value for `alpha`. Must be in the interval (0, 1].",
        );
        assert_eq!(
            config.bin_ranges.len(),
            env.observation_size(),
            "Environment emits {} observation dimensions but {} bin ranges were configured.",
            env.observation_size(),
            config.bin_ranges.len(),
        );

        Self {
            q: QTable::new(env.action_space_size()),
            discretizer: Discretizer::new(&config.bin_ranges, config.n_bins),
            exploration: config.exploration,
            record: TrainingRecord::new(config.num_episodes),
            num_episodes: config.num_episodes,
            discount: config.discount,
            alpha: config.alpha,
            episode: 0,
        }
    }

    /// Choose an action for `state` by sampling the epsilon greedy distribution
    /// over the current action-value row
    fn act(&mut self, state: State) -> usize {
        let row = self.q.row(state);
        let probs = self.exploration.distribution(self.episode, row);
        self.exploration.sample(&probs)
    }

    /// Run a single episode to termination, updating the table after every step
    ///
    /// **Returns** `(cumulative_reward, steps)`
    pub fn run_episode<E: Environment>(&mut self, env: &mut E) -> (f32, u32) {
        let mut reward_total = 0.0;
        let mut steps = 0u32;

        let mut state = self.discretizer.state(&env.reset());
        let mut action = self.act(state.clone());

        loop {
            let step = env.step(action);
            reward_total += step.reward;
            steps += 1;

            let next_state = self.discretizer.state(&step.observation);
            let next_action = self.act(next_state.clone());

            // The terminating transition is updated like any other, with the
            // reward and next-pair estimate exactly as observed.
            let next_q = self.q.row(next_state.clone())[next_action];
            let row = self.q.row_mut(state);
            let td_target = step.reward + self.discount * next_q;
            let td_delta = td_target - row[action];
            row[action] += self.alpha * td_delta;

            if step.terminal {
                break;
            }
            state = next_state;
            action = next_action;
        }

        self.episode += 1;
        (reward_total, steps)
    }

    /// Train for the configured number of episodes
    ///
    /// Always runs the full episode count; there is no early stopping. Q-values
    /// are never clipped, so divergence under an ill-chosen `alpha`/`discount`
    /// surfaces as-is.
    ///
    /// **Returns** the per-episode statistics
    pub fn train<E: Environment>(&mut self, env: &mut E) -> &TrainingRecord {
        for episode in 0..self.num_episodes {
            let (reward, steps) = self.run_episode(env);
            self.record.record(episode, reward, steps);

            if (episode + 1) % 10 == 0 {
                debug!(
                    "episode {}/{}: {} steps, total reward {}",
                    episode + 1,
                    self.num_episodes,
                    steps,
                    reward
                );
            }
        }

        let mean_length = self.record.episode_lengths().iter().sum::<u32>() as f64
            / self.num_episodes as f64;
        info!(
            "trained for {} episodes over {} discrete states, mean episode length {:.1}",
            self.num_episodes,
            self.q.num_states(),
            mean_length
        );

        &self.record
    }

    /// The learned action-value table
    pub fn q_table(&self) -> &QTable<State> {
        &self.q
    }

    /// The statistics recorded so far
    pub fn record(&self) -> &TrainingRecord {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Observation, Step};

    /// Two states A and B. Action 0 in A moves to B with reward +1 and
    /// terminates; action 1 also moves to B but pays nothing.
    struct TwoState {
        at_start: bool,
    }

    impl TwoState {
        fn new() -> Self {
            Self { at_start: true }
        }
    }

    impl Environment for TwoState {
        type Info = ();

        fn reset(&mut self) -> Observation {
            self.at_start = true;
            vec![0.0]
        }

        fn step(&mut self, action: usize) -> Step<()> {
            assert!(self.at_start, "stepped after terminal");
            self.at_start = false;
            let (observation, reward) = match action {
                0 => (vec![1.0], 1.0),
                _ => (vec![1.0], 0.0),
            };
            Step {
                observation,
                reward,
                terminal: true,
                info: (),
            }
        }

        fn action_space_size(&self) -> usize {
            2
        }

        fn observation_size(&self) -> usize {
            1
        }
    }

    fn two_state_config() -> SarsaAgentConfig<decay::Constant> {
        SarsaAgentConfig {
            num_episodes: 500,
            discount: 1.0,
            alpha: 0.5,
            exploration: EpsilonGreedy::constant(0.1),
            n_bins: 2,
            bin_ranges: vec![(0.0, 1.0)],
        }
    }

    #[test]
    fn learns_rewarding_action() {
        let mut env = TwoState::new();
        let mut agent = SarsaAgent::new(&env, two_state_config());
        agent.train(&mut env);

        let q = agent.q_table();
        let start = q.as_map().get(&vec![0]).expect("start state was visited");
        assert!(
            start[0] > start[1],
            "rewarding action dominates: {:?}",
            start
        );
    }

    #[test]
    fn records_every_episode() {
        let mut env = TwoState::new();
        let mut agent = SarsaAgent::new(&env, two_state_config());
        let record = agent.train(&mut env);

        assert_eq!(record.num_episodes(), 500, "one slot per configured episode");
        assert!(
            record.episode_rewards().iter().all(|r| r.is_finite()),
            "rewards are finite"
        );
        assert!(
            record.episode_lengths().iter().all(|&l| l == 1),
            "every episode of this environment is one step long"
        );
    }

    #[test]
    fn episode_runner_returns_step_stats() {
        let mut env = TwoState::new();
        let mut agent = SarsaAgent::new(&env, two_state_config());
        let (reward, steps) = agent.run_episode(&mut env);

        assert_eq!(steps, 1, "episode terminates after one step");
        assert!(reward == 0.0 || reward == 1.0, "reward matches one of the two actions");
    }

    #[test]
    #[should_panic(expected = "bin ranges")]
    fn mismatched_bin_ranges_panic() {
        let env = TwoState::new();
        let config = SarsaAgentConfig {
            bin_ranges: vec![(0.0, 1.0), (0.0, 1.0)],
            ..two_state_config()
        };
        SarsaAgent::new(&env, config);
    }

    #[test]
    #[should_panic(expected = "discount")]
    fn invalid_discount_panics() {
        let env = TwoState::new();
        let config = SarsaAgentConfig {
            discount: 1.5,
            ..two_state_config()
        };
        SarsaAgent::new(&env, config);
    }

    #[test]
    #[should_panic(expected = "alpha")]
    fn zero_alpha_panics() {
        let env = TwoState::new();
        let config = SarsaAgentConfig {
            alpha: 0.0,
            ..two_state_config()
        };
        SarsaAgent::new(&env, config);
    }
}

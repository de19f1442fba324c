/// Per-episode statistics accumulated over a training run
///
/// Both sequences are preallocated to the configured episode count and written
/// exactly once per finished episode, by index. The core never reads them back;
/// they exist for whatever reporting consumes them after training ends.
pub struct TrainingRecord {
    episode_rewards: Vec<f32>,
    episode_lengths: Vec<u32>,
}

impl TrainingRecord {
    pub(crate) fn new(num_episodes: usize) -> Self {
        Self {
            episode_rewards: vec![0.0; num_episodes],
            episode_lengths: vec![0; num_episodes],
        }
    }

    /// Record a finished episode's cumulative reward and step count
    pub(crate) fn record(&mut self, episode: usize, reward: f32, length: u32) {
        self.episode_rewards[episode] = reward;
        self.episode_lengths[episode] = length;
    }

    /// Number of episodes this record was sized for
    pub fn num_episodes(&self) -> usize {
        self.episode_rewards.len()
    }

    /// Cumulative signed reward collected in each episode
    pub fn episode_rewards(&self) -> &[f32] {
        &self.episode_rewards
    }

    /// Number of environment steps taken in each episode
    pub fn episode_lengths(&self) -> &[u32] {
        &self.episode_lengths
    }
}

use gym_rs::core::{ActionReward, Env};
use gym_rs::envs::classical_control::cartpole::{CartPoleEnv, CartPoleObservation};
use gym_rs::utils::renderer::RenderMode;

use crate::env::{Environment, Observation, Step};

fn obs2vec(observation: CartPoleObservation) -> Observation {
    Vec::from(observation)
        .into_iter()
        .map(|x| x as f32)
        .collect()
}

/// The classic CartPole reinforcement learning environment
///
/// This implementation is a thin wrapper around [gym_rs](https://github.com/MathisWellmann/gym-rs).
/// Observations are the four continuous signals (cart position, pole angle,
/// cart velocity, pole angular velocity); action `0` pushes the cart left and
/// `1` pushes it right.
#[derive(Debug, Clone)]
pub struct CartPole {
    gym_env: CartPoleEnv,
}

impl CartPole {
    pub fn new(render_mode: RenderMode) -> Self {
        Self {
            gym_env: CartPoleEnv::new(render_mode),
        }
    }
}

impl Environment for CartPole {
    type Info = ();

    fn reset(&mut self) -> Observation {
        obs2vec(self.gym_env.reset(None, false, None).0)
    }

    fn step(&mut self, action: usize) -> Step<()> {
        let ActionReward {
            observation,
            reward,
            done,
            ..
        } = self.gym_env.step(action);

        Step {
            observation: obs2vec(observation),
            reward: *reward as f32,
            terminal: done,
            info: (),
        }
    }

    fn action_space_size(&self) -> usize {
        2
    }

    fn observation_size(&self) -> usize {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obs2vec_functional() {
        let obs = CartPoleObservation::new(0.0.into(), 1.0.into(), 2.0.into(), 3.0.into());
        let vec = obs2vec(obs);
        assert_eq!(vec, [0.0, 1.0, 2.0, 3.0], "obs2vec conversion works");
    }

    #[test]
    fn spaces_match_contract() {
        let env = CartPole::new(RenderMode::None);
        assert_eq!(env.action_space_size(), 2, "left and right");
        assert_eq!(env.observation_size(), 4, "four continuous signals");
    }
}

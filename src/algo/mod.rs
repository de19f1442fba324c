pub mod sarsa;

pub use sarsa::{SarsaAgent, SarsaAgentConfig};

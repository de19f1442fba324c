/// Implemented RL agents
pub mod algo;

/// Implementations of strategies for time-decaying hyperparameters
pub mod decay;

/// Discretization of continuous observation spaces
pub mod discretize;

/// Environment
pub mod env;

/// Exploration policies
pub mod exploration;

/// Per-episode training statistics
pub mod record;

/// Action-value tables
pub mod table;

/// Testing environments
#[cfg(feature = "gym")]
pub mod gym;

mod util;

use std::{error::Error, fs, path::Path};

use gym_rs::utils::renderer::RenderMode;
use sarsa::algo::{SarsaAgent, SarsaAgentConfig};
use sarsa::gym::CartPole;

fn main() -> Result<(), Box<dyn Error>> {
    let path = Path::new("demos/sarsa_cartpole");

    let mut env = CartPole::new(RenderMode::None);
    let mut agent = SarsaAgent::new(&env, SarsaAgentConfig::default());

    let record = agent.train(&mut env);

    fs::create_dir_all(path.join("out"))?;

    let mut wtr = csv::Writer::from_path(path.join("out/data.csv"))?;
    wtr.write_record(["episode", "steps", "reward"])?;
    for (i, (steps, reward)) in record
        .episode_lengths()
        .iter()
        .zip(record.episode_rewards())
        .enumerate()
    {
        wtr.write_record(&[i.to_string(), steps.to_string(), reward.to_string()])?;
    }
    wtr.flush()?;

    std::process::Command::new("python")
        .arg(path.join("plot.py"))
        .spawn()?
        .wait()?;

    Ok(())
}

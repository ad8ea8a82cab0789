//! Loads a map image, finds its points of interest and prints the path length between every pair
//! of components.
//!
//! Usage: `topology_report [--exact] [--moore] [IMAGE]`
use anyhow::Context;
use pixel_topology::{MovementRules, Strategy, Topology, TopologyConfig};
use std::io::Write;

const DEFAULT_IMAGE: &str = "minimetroid_concept.png";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let (config, image_path) = parse_args(std::env::args().skip(1))?;

    let topology = Topology::open(&image_path, config)
        .with_context(|| format!("could not load map image {}", image_path))?;
    let locations = topology.points_of_interest();
    println!("{}", locations.len());

    let components = topology.components(&locations)?;
    for pair in topology.pairwise_lengths(&components)? {
        println!("{}", pair.first);
        println!("{}", pair.second);
        println!("{}", pair.length);
    }
    Ok(())
}

/// Reads the flags and the optional image path, rejecting unknown flags.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<(TopologyConfig, String)> {
    let mut config = TopologyConfig::default();
    let mut image_path = None;
    for arg in args {
        match arg.as_str() {
            "--exact" => config.strategy = Strategy::UniformCost,
            "--moore" => config.movement = MovementRules::moore(),
            flag if flag.starts_with("--") => {
                anyhow::bail!("unknown flag {}, usage: topology_report [--exact] [--moore] [IMAGE]", flag)
            }
            _ => image_path = Some(arg),
        }
    }
    let image_path = image_path.unwrap_or_else(|| DEFAULT_IMAGE.to_owned());
    Ok((config, image_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let (config, image_path) = parse_args(args(&[])).unwrap();
        assert_eq!(config, TopologyConfig::default());
        assert_eq!(image_path, DEFAULT_IMAGE);
    }

    #[test]
    fn flags_and_image() {
        let (config, image_path) = parse_args(args(&["--moore", "map.png", "--exact"])).unwrap();
        assert_eq!(config.strategy, Strategy::UniformCost);
        assert_eq!(config.movement, MovementRules::moore());
        assert_eq!(image_path, "map.png");
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(parse_args(args(&["--help"])).is_err());
        assert!(parse_args(args(&["--mor", "map.png"])).is_err());
    }
}

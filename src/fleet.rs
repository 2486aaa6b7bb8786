use clap::ValueEnum;
use rand::Rng;
use serde::Deserialize;

use crate::aircraft::{Aircraft, AircraftType};

/// How aircraft types are assigned across the fleet. Random is the
/// production rule; round-robin gives reproducible mixes without a seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Composition {
    #[default]
    Random,
    RoundRobin,
}

/// Builds `size` aircraft with dense ids `0..size`.
pub fn build<R: Rng>(size: usize, composition: Composition, rng: &mut R) -> Vec<Aircraft> {
    (0..size)
        .map(|id| {
            let kind = match composition {
                Composition::Random => AircraftType::ALL[rng.gen_range(0..AircraftType::ALL.len())],
                Composition::RoundRobin => AircraftType::ALL[id % AircraftType::ALL.len()],
            };
            Aircraft::new(id, kind)
        })
        .collect()
}

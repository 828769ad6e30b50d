//! Game compatibility against catalog-defined system requirements

use crate::data::HardwareComponent;
use crate::error::{Result, RigcheckError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Minimum hardware for one requirement level. Missing fields mean no limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(default)]
    pub cpu_score: u32,
    #[serde(default)]
    pub gpu_score: u32,
    #[serde(default)]
    pub ram_gb: u32,
}

impl Requirement {
    pub fn met_by(&self, cpu_score: u32, gpu_score: u32, ram_gb: u32) -> bool {
        cpu_score >= self.cpu_score && gpu_score >= self.gpu_score && ram_gb >= self.ram_gb
    }

    fn within(&self, other: &Requirement) -> bool {
        self.cpu_score <= other.cpu_score
            && self.gpu_score <= other.gpu_score
            && self.ram_gb <= other.ram_gb
    }
}

/// `[[game]]` entry of the catalog
///
/// ```toml
/// [[game]]
/// name = "Cyberpunk 2077"
/// minimum = { cpu_score = 8000, gpu_score = 7000, ram_gb = 12 }
/// recommended = { cpu_score = 20000, gpu_score = 17000, ram_gb = 16 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRequirements {
    pub name: String,
    #[serde(default)]
    pub minimum: Requirement,
    #[serde(default)]
    pub recommended: Requirement,
}

impl GameRequirements {
    pub fn new(name: impl Into<String>, minimum: Requirement, recommended: Requirement) -> Self {
        Self {
            name: name.into(),
            minimum,
            recommended,
        }
    }
}

/// Reject unnamed or duplicate games and recommended specs below the minimum
pub fn validate_games(games: &[GameRequirements]) -> Result<()> {
    let mut seen = HashSet::new();
    for game in games {
        if game.name.trim().is_empty() {
            return Err(RigcheckError::Catalog("game with empty name".to_string()));
        }
        if !seen.insert(game.name.as_str()) {
            return Err(RigcheckError::Catalog(format!(
                "duplicate game '{}'",
                game.name
            )));
        }
        if !game.minimum.within(&game.recommended) {
            return Err(RigcheckError::Catalog(format!(
                "game '{}' has recommended requirements below its minimum",
                game.name
            )));
        }
    }
    Ok(())
}

/// Game names bucketed by how well a build runs them, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCompatibility {
    pub recommended: Vec<String>,
    pub playable: Vec<String>,
    pub below_minimum: Vec<String>,
}

impl GameCompatibility {
    pub fn total(&self) -> usize {
        self.recommended.len() + self.playable.len() + self.below_minimum.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Place every game in exactly one bucket for this build
pub fn analyze_game_compatibility(
    games: &[GameRequirements],
    cpu: &HardwareComponent,
    gpu: &HardwareComponent,
    ram: &HardwareComponent,
) -> GameCompatibility {
    let (cpu_score, gpu_score, ram_gb) = (cpu.score(), gpu.score(), ram.ram_capacity_gb());
    let mut result = GameCompatibility::default();

    for game in games {
        let bucket = if game.recommended.met_by(cpu_score, gpu_score, ram_gb) {
            &mut result.recommended
        } else if game.minimum.met_by(cpu_score, gpu_score, ram_gb) {
            &mut result.playable
        } else {
            &mut result.below_minimum
        };
        bucket.push(game.name.clone());
    }
    result
}

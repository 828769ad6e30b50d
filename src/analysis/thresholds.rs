//! Severity tier table for CPU/GPU imbalance and RAM limits

use crate::data::Severity;
use crate::error::RigcheckError;
use serde::{Deserialize, Serialize};

/// 3x difference = severe
pub const SEVERE_RATIO: f64 = 3.0;
/// 2x difference = moderate
pub const MODERATE_RATIO: f64 = 2.0;
/// 1.5x difference = mild
pub const MILD_RATIO: f64 = 1.5;

/// Below this much RAM the system is flagged
pub const RAM_RECOMMENDED_GB: u32 = 16;
/// Below this much RAM the flag is moderate instead of mild
pub const RAM_CRITICAL_GB: u32 = 8;
/// Upper bound accepted for either RAM limit
pub const MAX_RAM_GB: u32 = 1024;

/// One row of the tier table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub severity: Severity,
    /// Smallest strong/weak ratio that falls into this tier
    pub min_ratio: f64,
    /// Estimated performance loss reported for this tier
    pub percentage_loss: u8,
    /// Suggested replacement score, as a percentage of the strong component's score
    pub target_percent: u32,
}

impl Tier {
    /// Integer target score; floors like integer division
    pub fn target_score(&self, strong_score: u32) -> u32 {
        (u64::from(strong_score) * u64::from(self.target_percent) / 100) as u32
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawTierTable {
    #[serde(default = "default_tiers")]
    tiers: Vec<Tier>,
    #[serde(default = "default_ram_recommended")]
    ram_recommended_gb: u32,
    #[serde(default = "default_ram_critical")]
    ram_critical_gb: u32,
}

fn default_tiers() -> Vec<Tier> {
    vec![
        Tier {
            severity: Severity::Severe,
            min_ratio: SEVERE_RATIO,
            percentage_loss: 40,
            target_percent: 60,
        },
        Tier {
            severity: Severity::Moderate,
            min_ratio: MODERATE_RATIO,
            percentage_loss: 25,
            target_percent: 70,
        },
        Tier {
            severity: Severity::Mild,
            min_ratio: MILD_RATIO,
            percentage_loss: 10,
            target_percent: 80,
        },
    ]
}

fn default_ram_recommended() -> u32 {
    RAM_RECOMMENDED_GB
}

fn default_ram_critical() -> u32 {
    RAM_CRITICAL_GB
}

/// Validated tier table, rows kept highest threshold first.
///
/// Deserializes from the `[thresholds]` config section; every field is
/// optional and falls back to the built-in schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTierTable")]
pub struct TierTable {
    tiers: Vec<Tier>,
    ram_recommended_gb: u32,
    ram_critical_gb: u32,
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            ram_recommended_gb: RAM_RECOMMENDED_GB,
            ram_critical_gb: RAM_CRITICAL_GB,
        }
    }
}

impl TryFrom<RawTierTable> for TierTable {
    type Error = RigcheckError;

    fn try_from(raw: RawTierTable) -> Result<Self, Self::Error> {
        TierTable::new(raw.tiers, raw.ram_recommended_gb, raw.ram_critical_gb)
    }
}

impl TierTable {
    pub fn new(
        mut tiers: Vec<Tier>,
        ram_recommended_gb: u32,
        ram_critical_gb: u32,
    ) -> Result<Self, RigcheckError> {
        tiers.sort_by(|a, b| b.min_ratio.total_cmp(&a.min_ratio));
        let table = Self {
            tiers,
            ram_recommended_gb,
            ram_critical_gb,
        };
        table.validate()?;
        Ok(table)
    }

    /// Reject tables that could classify a balanced pair as imbalanced or
    /// that are not monotonic in severity and loss.
    pub fn validate(&self) -> Result<(), RigcheckError> {
        let err = |msg: String| Err(RigcheckError::Config(msg));

        if self.tiers.is_empty() {
            return err("tier table is empty".to_string());
        }
        for tier in &self.tiers {
            if !tier.min_ratio.is_finite() || tier.min_ratio <= 1.0 {
                return err(format!(
                    "tier '{}' has min_ratio {}, expected a finite value above 1.0",
                    tier.severity, tier.min_ratio
                ));
            }
            if tier.severity == Severity::None {
                return err("tiers cannot use severity 'none'".to_string());
            }
            if tier.target_percent == 0 || tier.target_percent > 100 {
                return err(format!(
                    "tier '{}' has target_percent {}, expected 1..=100",
                    tier.severity, tier.target_percent
                ));
            }
            if tier.percentage_loss > 100 {
                return err(format!(
                    "tier '{}' has percentage_loss {} above 100",
                    tier.severity, tier.percentage_loss
                ));
            }
        }
        for pair in self.tiers.windows(2) {
            let (higher, lower) = (&pair[0], &pair[1]);
            if higher.min_ratio == lower.min_ratio {
                return err(format!("duplicate min_ratio {}", higher.min_ratio));
            }
            if higher.severity <= lower.severity || higher.percentage_loss <= lower.percentage_loss {
                return err(format!(
                    "tier '{}' (ratio {}) must be more severe than tier '{}' (ratio {})",
                    higher.severity, higher.min_ratio, lower.severity, lower.min_ratio
                ));
            }
        }
        if self.ram_recommended_gb > MAX_RAM_GB {
            return err(format!(
                "ram_recommended_gb {} exceeds the {} GB limit",
                self.ram_recommended_gb, MAX_RAM_GB
            ));
        }
        if self.ram_critical_gb > self.ram_recommended_gb {
            return err(format!(
                "ram_critical_gb {} exceeds ram_recommended_gb {}",
                self.ram_critical_gb, self.ram_recommended_gb
            ));
        }
        Ok(())
    }

    /// Rows, highest threshold first
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Lowest ratio that counts as an imbalance
    pub fn mild_ratio(&self) -> f64 {
        self.tiers.last().map(|t| t.min_ratio).unwrap_or(MILD_RATIO)
    }

    /// First tier whose threshold `ratio` reaches, checked from the top
    pub fn classify(&self, ratio: f64) -> Option<&Tier> {
        self.tiers.iter().find(|tier| ratio >= tier.min_ratio)
    }

    pub fn ram_recommended_gb(&self) -> u32 {
        self.ram_recommended_gb
    }

    pub fn ram_critical_gb(&self) -> u32 {
        self.ram_critical_gb
    }

    /// RAM severity for an installed capacity, `None` when sufficient
    pub fn ram_severity(&self, capacity_gb: u32) -> Severity {
        if capacity_gb >= self.ram_recommended_gb {
            Severity::None
        } else if capacity_gb < self.ram_critical_gb {
            Severity::Moderate
        } else {
            Severity::Mild
        }
    }
}

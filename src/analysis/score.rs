//! Overall system score.
//!
//! Each component is normalized to 0-100 against a reference part, clamped,
//! then weighted:
//! - CPU: 35%
//! - GPU: 45%
//! - RAM: 20%

use crate::data::HardwareComponent;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CPU_REFERENCE_SCORE: f64 = 30_000.0;
pub const GPU_REFERENCE_SCORE: f64 = 30_000.0;
pub const RAM_REFERENCE_GB: f64 = 32.0;

pub const CPU_WEIGHT: f64 = 0.35;
pub const GPU_WEIGHT: f64 = 0.45;
pub const RAM_WEIGHT: f64 = 0.20;

/// Market segment a build lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemTier {
    Basic,
    Entry,
    Mid,
    High,
    Enthusiast,
}

impl SystemTier {
    pub fn from_total(total: u8) -> Self {
        match total {
            80.. => SystemTier::Enthusiast,
            60..=79 => SystemTier::High,
            40..=59 => SystemTier::Mid,
            20..=39 => SystemTier::Entry,
            _ => SystemTier::Basic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SystemTier::Basic => "basic",
            SystemTier::Entry => "entry",
            SystemTier::Mid => "mid-range",
            SystemTier::High => "high-end",
            SystemTier::Enthusiast => "enthusiast",
        }
    }
}

impl fmt::Display for SystemTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted score of a CPU/GPU/RAM selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemScore {
    /// Overall score (0-100)
    pub total: u8,
    /// CPU component points (0-100)
    pub cpu_points: f64,
    /// GPU component points (0-100)
    pub gpu_points: f64,
    /// RAM component points (0-100)
    pub ram_points: f64,
    pub tier: SystemTier,
}

fn normalize(value: f64, reference: f64) -> f64 {
    (value / reference * 100.0).clamp(0.0, 100.0)
}

/// Score a build. Unknown benchmark scores contribute nothing.
pub fn system_score(
    cpu: &HardwareComponent,
    gpu: &HardwareComponent,
    ram: &HardwareComponent,
) -> SystemScore {
    let cpu_points = normalize(f64::from(cpu.score()), CPU_REFERENCE_SCORE);
    let gpu_points = normalize(f64::from(gpu.score()), GPU_REFERENCE_SCORE);
    let ram_points = normalize(f64::from(ram.ram_capacity_gb()), RAM_REFERENCE_GB);

    let weighted = cpu_points * CPU_WEIGHT + gpu_points * GPU_WEIGHT + ram_points * RAM_WEIGHT;
    let total = weighted.round().clamp(0.0, 100.0) as u8;

    SystemScore {
        total,
        cpu_points,
        gpu_points,
        ram_points,
        tier: SystemTier::from_total(total),
    }
}

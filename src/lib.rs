//! rigcheck library
//!
//! Hardware bottleneck analysis for CPU/GPU/RAM builds: detects imbalance
//! between components, scores the system and produces upgrade advice.

pub mod error;
pub mod data;
pub mod analysis;
pub mod narrative;
pub mod catalog;
pub mod utils;
pub mod config;
pub mod display;
pub mod logging;

pub use error::{RigcheckError, Result};
pub use data::{
    BottleneckKind, BottleneckReport, Category, HardwareComponent, ImbalanceFinding, RamFinding,
    Severity,
};
pub use analysis::{
    detect, BottleneckAnalyzer, Evaluation, GameCompatibility, GameRequirements, SystemScore,
    SystemTier, TierTable,
};
pub use catalog::{Build, BuildReport, Catalog};

/// Detect bottlenecks, score the build, check game compatibility and
/// collect advice in one call
pub fn evaluate(
    analyzer: &BottleneckAnalyzer,
    cpu: &HardwareComponent,
    gpu: &HardwareComponent,
    ram: &HardwareComponent,
    games: &[GameRequirements],
) -> Evaluation {
    Evaluation::new(analyzer, cpu, gpu, ram, games)
}

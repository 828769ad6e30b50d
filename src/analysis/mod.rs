//! Build analysis: bottleneck detection, system scoring, game compatibility
//! and advice

pub mod advice;
pub mod bottleneck;
pub mod games;
pub mod score;
pub mod thresholds;

pub use advice::advise;
pub use bottleneck::{detect, BottleneckAnalyzer};
pub use games::{analyze_game_compatibility, GameCompatibility, GameRequirements, Requirement};
pub use score::{system_score, SystemScore, SystemTier};
pub use thresholds::{Tier, TierTable};

use crate::data::{BottleneckReport, HardwareComponent};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer shows for one build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: SystemScore,
    pub report: BottleneckReport,
    pub advice: Vec<String>,
    pub games: GameCompatibility,
}

impl Evaluation {
    pub fn new(
        analyzer: &BottleneckAnalyzer,
        cpu: &HardwareComponent,
        gpu: &HardwareComponent,
        ram: &HardwareComponent,
        games: &[GameRequirements],
    ) -> Self {
        let report = analyzer.detect(cpu, gpu, ram);
        let score = system_score(cpu, gpu, ram);
        let advice = advise(&report, &score);
        Self {
            score,
            report,
            advice,
            games: analyze_game_compatibility(games, cpu, gpu, ram),
        }
    }
}

//! Combined upgrade advice from a bottleneck report and a system score

use super::score::{SystemScore, SystemTier};
use crate::data::BottleneckReport;

const PLATFORM_UPGRADE: &str =
    "🖥️ This build sits at the low end overall; a newer platform will help more than any single part.";
const NO_UPGRADE_NEEDED: &str = "🏆 Top-tier, well balanced build. No upgrade needed.";

/// The report's own recommendations first, then one general note by tier.
/// Duplicates are dropped, order is kept.
pub fn advise(report: &BottleneckReport, score: &SystemScore) -> Vec<String> {
    let mut advice: Vec<String> = Vec::with_capacity(report.recommendations.len() + 1);
    for rec in &report.recommendations {
        push_unique(&mut advice, rec.clone());
    }

    match score.tier {
        SystemTier::Basic | SystemTier::Entry => {
            push_unique(&mut advice, PLATFORM_UPGRADE.to_string())
        }
        SystemTier::Enthusiast if !report.has_bottleneck && !report.insufficient_data => {
            push_unique(&mut advice, NO_UPGRADE_NEEDED.to_string())
        }
        _ => {}
    }

    advice
}

fn push_unique(advice: &mut Vec<String>, item: String) {
    if !advice.contains(&item) {
        advice.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(tier: SystemTier) -> SystemScore {
        SystemScore {
            total: 0,
            cpu_points: 0.0,
            gpu_points: 0.0,
            ram_points: 0.0,
            tier,
        }
    }

    #[test]
    fn report_recommendations_come_first() {
        let mut report = BottleneckReport::balanced();
        report.has_bottleneck = true;
        report.recommendations = vec!["upgrade cpu".to_string(), "upgrade ram".to_string()];

        let advice = advise(&report, &score(SystemTier::Entry));
        assert_eq!(advice.len(), 3);
        assert_eq!(advice[0], "upgrade cpu");
        assert_eq!(advice[2], PLATFORM_UPGRADE);
    }

    #[test]
    fn duplicates_are_dropped() {
        let mut report = BottleneckReport::balanced();
        report.recommendations = vec!["same".to_string(), "same".to_string()];
        assert_eq!(advise(&report, &score(SystemTier::Mid)), vec!["same".to_string()]);
    }

    #[test]
    fn balanced_enthusiast_build_needs_nothing() {
        let report = BottleneckReport::balanced();
        assert_eq!(
            advise(&report, &score(SystemTier::Enthusiast)),
            vec![NO_UPGRADE_NEEDED.to_string()]
        );
    }

    #[test]
    fn bottlenecked_enthusiast_build_gets_no_praise() {
        let mut report = BottleneckReport::balanced();
        report.has_bottleneck = true;
        report.recommendations = vec!["upgrade ram".to_string()];
        assert_eq!(advise(&report, &score(SystemTier::Enthusiast)).len(), 1);
    }
}

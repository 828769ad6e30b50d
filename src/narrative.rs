//! Report text.
//!
//! The analyzer only produces structured findings; everything a user reads
//! is built here from those findings.

use crate::data::{BottleneckKind, BottleneckReport, ImbalanceFinding, RamFinding, Severity};
use crate::utils::parsing::format_ratio;

pub const INSUFFICIENT_DATA: &str =
    "Insufficient benchmark data: both a CPU and a GPU benchmark score are needed for analysis.";

pub const BALANCED: &str = "✅ **Balanced system!**\n\n\
    Your configuration is well matched. There are no significant bottlenecks.";

/// Fill `description` and `recommendations` from the report's findings
pub fn compose(report: &mut BottleneckReport) {
    report.description.clear();
    report.recommendations.clear();

    if report.insufficient_data {
        report.description.push_str(INSUFFICIENT_DATA);
        return;
    }

    if let Some(finding) = &report.imbalance {
        report.description.push_str(&describe_imbalance(finding));
        report.recommendations.push(recommend_imbalance(finding));
    }

    if let Some(ram) = &report.ram {
        if !report.description.is_empty() {
            report.description.push_str("\n\n");
        }
        report.description.push_str(&describe_ram(ram));
        if let Some(finding) = &report.imbalance {
            if ram.severity > finding.severity {
                report.description.push_str(&format!(
                    "\nLow memory raises the overall severity from {} to {}.",
                    finding.severity, ram.severity
                ));
            }
        }
        report.recommendations.push(recommend_ram(ram));
    }

    if !report.has_bottleneck {
        report.description.push_str(BALANCED);
    }
}

fn heading(finding: &ImbalanceFinding) -> String {
    let (icon, label) = match finding.severity {
        Severity::Severe => ("⚠️", "SEVERE"),
        Severity::Moderate => ("⚠️", "MODERATE"),
        _ => ("ℹ️", "MILD"),
    };
    format!("{} **{} {} bottleneck**", icon, label, finding.weak.category)
}

pub fn describe_imbalance(finding: &ImbalanceFinding) -> String {
    let ratio = format_ratio(finding.ratio);
    let comparison = format!(
        "Your {} ({}) is {}x more powerful than your {} ({}).",
        finding.strong.category, finding.strong.name, ratio, finding.weak.category, finding.weak.name
    );

    let detail = match (finding.kind, finding.severity) {
        (BottleneckKind::Cpu, Severity::Severe) => {
            "The processor cannot keep the graphics card fed.\n\n\
             **Impact:** 30-50% GPU performance loss."
        }
        (BottleneckKind::Cpu, Severity::Moderate) => {
            "You will notice limits in demanding games.\n\n\
             **Impact:** 15-30% GPU performance loss."
        }
        (BottleneckKind::Cpu, _) => {
            "It will run well in most games.\n\n\
             **Impact:** 5-15% GPU performance loss in some games."
        }
        (_, Severity::Severe) => {
            "The graphics card is limiting rendering performance.\n\n\
             **Impact:** Severe limits on FPS and graphics quality."
        }
        (_, Severity::Moderate) => {
            "A better graphics card would make a significant difference.\n\n\
             **Impact:** Limited FPS in modern games."
        }
        _ => {
            "A better graphics card would make more of your processor.\n\n\
             **Impact:** Minor FPS limits."
        }
    };

    format!("{}\n\n{} {}", heading(finding), comparison, detail)
}

pub fn recommend_imbalance(finding: &ImbalanceFinding) -> String {
    let weak = finding.weak.category;
    match finding.severity {
        Severity::Severe => format!(
            "🔧 **URGENT:** Upgrade the {} to a benchmark score of ~{}+ to make full use of the {}.",
            weak, finding.target_score, finding.strong.category
        ),
        Severity::Moderate => format!(
            "🔧 Consider upgrading the {} to a benchmark score of ~{}+.",
            weak, finding.target_score
        ),
        _ => format!(
            "💡 A {} with a benchmark score of ~{}+ would optimize this system.",
            weak, finding.target_score
        ),
    }
}

pub fn describe_ram(ram: &RamFinding) -> String {
    format!(
        "⚠️ **Insufficient RAM**\n\
         Only {} GB of RAM installed. Modern games recommend {} GB.\n\
         **Impact:** Possible stutters and limits in demanding games.",
        ram.capacity_gb, ram.recommended_gb
    )
}

pub fn recommend_ram(ram: &RamFinding) -> String {
    format!(
        "💾 Upgrade to {} GB or {} GB of RAM for better performance.",
        ram.recommended_gb,
        ram.recommended_gb.saturating_mul(2)
    )
}

//! Bottleneck report structures

use super::hardware::{Category, HardwareComponent};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the system is holding the rest back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BottleneckKind {
    Balanced,
    Cpu,
    Gpu,
    Ram,
}

impl BottleneckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BottleneckKind::Balanced => "balanced",
            BottleneckKind::Cpu => "cpu",
            BottleneckKind::Gpu => "gpu",
            BottleneckKind::Ram => "ram",
        }
    }
}

impl fmt::Display for BottleneckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tier, ordered from `None` to `Severe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name and score of one side of an imbalance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub category: Category,
    pub name: String,
    pub score: u32,
}

impl ComponentSummary {
    pub fn of(component: &HardwareComponent) -> Self {
        Self {
            category: component.category,
            name: component.display_name(),
            score: component.score(),
        }
    }
}

/// A CPU/GPU imbalance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImbalanceFinding {
    /// `Cpu` when the CPU is the weak side, `Gpu` otherwise
    pub kind: BottleneckKind,
    pub severity: Severity,
    pub weak: ComponentSummary,
    pub strong: ComponentSummary,
    /// strong / weak, always at least the mild threshold
    pub ratio: f64,
    /// Suggested benchmark score for a replacement of the weak component
    pub target_score: u32,
}

/// Not enough memory installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamFinding {
    pub capacity_gb: u32,
    pub recommended_gb: u32,
    pub severity: Severity,
}

/// Result of one analyzer run.
///
/// `kind` is serialized as `type`. When `has_bottleneck` is false the kind is
/// `Balanced`, severity `None` and `percentage_loss` 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleneckReport {
    pub has_bottleneck: bool,
    #[serde(rename = "type")]
    pub kind: BottleneckKind,
    pub severity: Severity,
    pub description: String,
    pub recommendations: Vec<String>,
    pub percentage_loss: u8,
    /// Set when either CPU or GPU benchmark score was missing
    #[serde(default)]
    pub insufficient_data: bool,
    #[serde(default)]
    pub imbalance: Option<ImbalanceFinding>,
    #[serde(default)]
    pub ram: Option<RamFinding>,
}

impl BottleneckReport {
    /// Empty balanced report, text not yet filled in
    pub fn balanced() -> Self {
        Self {
            has_bottleneck: false,
            kind: BottleneckKind::Balanced,
            severity: Severity::None,
            description: String::new(),
            recommendations: Vec::new(),
            percentage_loss: 0,
            insufficient_data: false,
            imbalance: None,
            ram: None,
        }
    }

    pub fn insufficient_data() -> Self {
        Self {
            insufficient_data: true,
            ..Self::balanced()
        }
    }

    /// Record a CPU/GPU imbalance. The imbalance decides kind, severity and
    /// loss.
    pub fn record_imbalance(&mut self, finding: ImbalanceFinding, percentage_loss: u8) {
        self.has_bottleneck = true;
        self.kind = finding.kind;
        self.severity = finding.severity;
        self.percentage_loss = percentage_loss;
        self.imbalance = Some(finding);
    }

    /// Record insufficient RAM. Never replaces a CPU/GPU kind and never
    /// lowers severity.
    pub fn record_ram(&mut self, finding: RamFinding) {
        self.has_bottleneck = true;
        if self.kind == BottleneckKind::Balanced {
            self.kind = BottleneckKind::Ram;
        }
        self.severity = self.severity.max(finding.severity);
        self.ram = Some(finding);
    }
}

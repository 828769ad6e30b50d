//! CPU/GPU/RAM bottleneck detection

use super::thresholds::TierTable;
use crate::data::{
    BottleneckKind, BottleneckReport, ComponentSummary, HardwareComponent, ImbalanceFinding,
    RamFinding,
};
use crate::narrative;
use tracing::debug;

/// Detects imbalance between a CPU, GPU and RAM selection.
///
/// Stateless apart from its tier table; share one instance freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct BottleneckAnalyzer {
    table: TierTable,
}

impl BottleneckAnalyzer {
    pub fn new(table: TierTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TierTable {
        &self.table
    }

    /// Analyze one build. Never fails: missing scores give an
    /// insufficient-data report.
    pub fn detect(
        &self,
        cpu: &HardwareComponent,
        gpu: &HardwareComponent,
        ram: &HardwareComponent,
    ) -> BottleneckReport {
        let cpu_score = cpu.score();
        let gpu_score = gpu.score();

        if cpu_score == 0 || gpu_score == 0 {
            debug!(cpu = %cpu.id, gpu = %gpu.id, cpu_score, gpu_score, "missing benchmark data");
            let mut report = BottleneckReport::insufficient_data();
            narrative::compose(&mut report);
            return report;
        }

        let mut report = BottleneckReport::balanced();

        if let Some((finding, loss)) = self.imbalance(cpu, gpu) {
            debug!(
                kind = %finding.kind,
                severity = %finding.severity,
                ratio = finding.ratio,
                target = finding.target_score,
                "cpu/gpu imbalance"
            );
            report.record_imbalance(finding, loss);
        }

        let capacity_gb = ram.ram_capacity_gb();
        if capacity_gb < self.table.ram_recommended_gb() {
            let severity = self.table.ram_severity(capacity_gb);
            debug!(ram = %ram.id, capacity_gb, severity = %severity, "insufficient ram");
            report.record_ram(RamFinding {
                capacity_gb,
                recommended_gb: self.table.ram_recommended_gb(),
                severity,
            });
        }

        narrative::compose(&mut report);
        report
    }

    /// CPU-bound when the GPU outclasses the CPU by the mild ratio or more,
    /// GPU-bound in the mirrored case. Both directions compare strong/weak
    /// against the same thresholds.
    fn imbalance(
        &self,
        cpu: &HardwareComponent,
        gpu: &HardwareComponent,
    ) -> Option<(ImbalanceFinding, u8)> {
        let cpu_score = f64::from(cpu.score());
        let gpu_score = f64::from(gpu.score());
        let mild = self.table.mild_ratio();

        let (kind, weak, strong, ratio) = if gpu_score / cpu_score >= mild {
            (BottleneckKind::Cpu, cpu, gpu, gpu_score / cpu_score)
        } else if cpu_score / gpu_score >= mild {
            (BottleneckKind::Gpu, gpu, cpu, cpu_score / gpu_score)
        } else {
            return None;
        };

        let tier = self.table.classify(ratio)?;
        let finding = ImbalanceFinding {
            kind,
            severity: tier.severity,
            weak: ComponentSummary::of(weak),
            strong: ComponentSummary::of(strong),
            ratio,
            target_score: tier.target_score(strong.score()),
        };
        Some((finding, tier.percentage_loss))
    }
}

/// Analyze with the built-in 1.5 / 2.0 / 3.0 schedule
pub fn detect(
    cpu: &HardwareComponent,
    gpu: &HardwareComponent,
    ram: &HardwareComponent,
) -> BottleneckReport {
    BottleneckAnalyzer::default().detect(cpu, gpu, ram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Category, Severity};

    fn cpu(score: u32) -> HardwareComponent {
        HardwareComponent::new("cpu", Category::Cpu)
            .with_name("Intel", "Core i5-12400F")
            .with_score(score)
    }

    fn gpu(score: u32) -> HardwareComponent {
        HardwareComponent::new("gpu", Category::Gpu)
            .with_name("NVIDIA", "RTX 4060 Ti")
            .with_score(score)
    }

    fn ram(capacity_gb: u32) -> HardwareComponent {
        HardwareComponent::new("ram", Category::Ram).with_capacity_gb(capacity_gb)
    }

    #[test]
    fn severe_cpu_bottleneck() {
        let report = detect(&cpu(5000), &gpu(16000), &ram(16));
        assert!(report.has_bottleneck);
        assert_eq!(report.kind, BottleneckKind::Cpu);
        assert_eq!(report.severity, Severity::Severe);
        assert_eq!(report.percentage_loss, 40);
        assert_eq!(report.imbalance.as_ref().unwrap().target_score, 9600);
        assert_eq!(report.recommendations.len(), 1);
        assert!(report.recommendations[0].contains("9600"));
        assert!(report.description.contains("3.2x"));
    }

    #[test]
    fn moderate_gpu_bottleneck_with_low_ram() {
        let ram = HardwareComponent::new("ram", Category::Ram).with_spec("capacity", "8 GB");
        let report = detect(&cpu(20000), &gpu(9000), &ram);

        assert_eq!(report.kind, BottleneckKind::Gpu);
        assert_eq!(report.severity, Severity::Moderate);
        assert_eq!(report.percentage_loss, 25);
        assert_eq!(report.imbalance.as_ref().unwrap().target_score, 14000);
        assert_eq!(report.ram.unwrap().capacity_gb, 8);
        assert_eq!(report.recommendations.len(), 2);
        assert!(report.description.contains("2.2x"));
        assert!(report.description.contains("Insufficient RAM"));
    }

    #[test]
    fn critical_ram_raising_mild_imbalance_is_explained() {
        let report = detect(&cpu(10000), &gpu(16000), &ram(4));
        assert_eq!(report.kind, BottleneckKind::Cpu);
        assert_eq!(report.severity, Severity::Moderate);
        assert!(report.description.contains("MILD CPU bottleneck"));
        assert!(report
            .description
            .contains("raises the overall severity from mild to moderate"));
    }

    #[test]
    fn missing_score_is_insufficient_data() {
        let unknown = HardwareComponent::new("gpu", Category::Gpu);
        let report = detect(&cpu(5000), &unknown, &ram(4));
        assert!(!report.has_bottleneck);
        assert!(report.insufficient_data);
        assert!(report.recommendations.is_empty());
        assert!(report.ram.is_none());
        assert!(report
            .description
            .to_lowercase()
            .contains("insufficient benchmark data"));
    }

    #[test]
    fn equal_scores_are_balanced() {
        let report = detect(&cpu(10000), &gpu(10000), &ram(32));
        assert!(!report.has_bottleneck);
        assert_eq!(report.kind, BottleneckKind::Balanced);
        assert_eq!(report.severity, Severity::None);
        assert_eq!(report.percentage_loss, 0);
        assert_eq!(report.description, narrative::BALANCED);
    }

    #[test]
    fn ram_only_bottleneck() {
        let report = detect(&cpu(10000), &gpu(12000), &ram(4));
        assert!(report.has_bottleneck);
        assert_eq!(report.kind, BottleneckKind::Ram);
        assert_eq!(report.severity, Severity::Moderate);
        assert_eq!(report.percentage_loss, 0);
    }

    #[test]
    fn gpu_bound_boundary_is_exact() {
        let report = detect(&cpu(300), &gpu(200), &ram(16));
        assert_eq!(report.kind, BottleneckKind::Gpu);
        assert_eq!(report.severity, Severity::Mild);

        let report = detect(&cpu(299), &gpu(200), &ram(16));
        assert_eq!(report.kind, BottleneckKind::Balanced);
    }

    #[test]
    fn custom_table_changes_ram_limit() {
        let table: TierTable = toml::from_str("ram_recommended_gb = 32").unwrap();
        let analyzer = BottleneckAnalyzer::new(table);
        let report = analyzer.detect(&cpu(10000), &gpu(10000), &ram(16));
        assert_eq!(report.kind, BottleneckKind::Ram);
        assert_eq!(report.severity, Severity::Mild);
    }
}

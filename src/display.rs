use crate::analysis::Evaluation;
use crate::catalog::Build;
use crate::config::Config;
use crate::data::{HardwareComponent, Severity};
use crate::utils::parsing::strip_markup;
use std::io::{self, Write};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1b[0m";

pub fn hex_to_ansi(color: &str) -> String {
    // First try ANSI color names
    if let Some(ansi_code) = get_ansi_color_code(color) {
        return ansi_code;
    }

    // Fallback to hex color parsing for custom colors
    if color.is_ascii() && color.starts_with('#') && color.len() == 7 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&color[1..3], 16),
            u8::from_str_radix(&color[3..5], 16),
            u8::from_str_radix(&color[5..7], 16),
        ) {
            return format!("\x1b[38;2;{};{};{}m", r, g, b);
        }
    }

    warn!(color, "unknown color, use a name such as 'red' or a hex value like '#FF0000'");
    RESET.to_string()
}

fn get_ansi_color_code(color_name: &str) -> Option<String> {
    let code = match color_name.to_lowercase().as_str() {
        "black" => "30",
        "red" => "31",
        "green" => "32",
        "yellow" => "33",
        "blue" => "34",
        "magenta" | "purple" => "35",
        "cyan" => "36",
        "white" => "37",
        "bright_black" | "gray" | "grey" => "90",
        "bright_red" | "orange" => "91",
        "bright_green" => "92",
        "bright_yellow" => "93",
        "bright_blue" => "94",
        "bright_magenta" | "violet" => "95",
        "bright_cyan" => "96",
        "bright_white" => "97",
        "reset" | "default" => "0",
        _ => return None,
    };
    Some(format!("\x1b[{}m", code))
}

fn default_severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::None => "green",
        Severity::Mild => "yellow",
        Severity::Moderate => "orange",
        Severity::Severe => "red",
    }
}

/// Resolves color keys through the config's `[colors]` map
struct Palette<'a> {
    config: &'a Config,
    enabled: bool,
}

impl<'a> Palette<'a> {
    fn new(config: &'a Config, enabled: bool) -> Self {
        Self {
            config,
            enabled: enabled && config.display.color_enabled(),
        }
    }

    fn code(&self, key: &str, fallback: &str) -> String {
        if !self.enabled {
            return String::new();
        }
        let color = self.config.colors.get(key).map(String::as_str).unwrap_or(fallback);
        hex_to_ansi(color)
    }

    fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }

    fn severity(&self, severity: Severity) -> String {
        self.code(severity.as_str(), default_severity_color(severity))
    }

    fn key(&self) -> String {
        let fallback = self.config.display.key_color.as_deref().unwrap_or("cyan");
        self.code("key", fallback)
    }
}

fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

/// Write a human-readable summary of one build's evaluation
pub fn render_evaluation<W: Write>(
    out: &mut W,
    config: &Config,
    build: &Build<'_>,
    evaluation: &Evaluation,
    color: bool,
) -> io::Result<()> {
    let palette = Palette::new(config, color);
    let separator = config.display.separator();
    let report = &evaluation.report;
    let key = palette.key();
    let reset = palette.reset();
    let severity_color = palette.severity(report.severity);

    let mut rows: Vec<(&str, String)> = vec![
        ("CPU", component_line(build.cpu)),
        ("GPU", component_line(build.gpu)),
        ("RAM", format!("{} ({} GB)", build.ram.display_name(), build.ram.ram_capacity_gb())),
    ];
    if config.display.show_score() {
        rows.push((
            "Score",
            format!("{}/100 ({})", evaluation.score.total, evaluation.score.tier),
        ));
    }
    let games = &evaluation.games;
    if !games.is_empty() {
        rows.push((
            "Games",
            format!(
                "{} recommended, {} playable, {} below minimum",
                games.recommended.len(),
                games.playable.len(),
                games.below_minimum.len()
            ),
        ));
    }
    let width = rows
        .iter()
        .map(|(k, _)| UnicodeWidthStr::width(*k))
        .chain(["Bottleneck", "Severity", "Est. loss"].iter().map(|k| k.width()))
        .max()
        .unwrap_or(0);

    for (k, v) in &rows {
        writeln!(out, "{}{}{}{}{}", key, pad(k, width), reset, separator, v)?;
    }
    writeln!(
        out,
        "{}{}{}{}{}{}{}",
        key,
        pad("Bottleneck", width),
        reset,
        separator,
        severity_color,
        report.kind,
        reset
    )?;
    writeln!(
        out,
        "{}{}{}{}{}{}{}",
        key,
        pad("Severity", width),
        reset,
        separator,
        severity_color,
        report.severity,
        reset
    )?;
    writeln!(
        out,
        "{}{}{}{}~{}%",
        key,
        pad("Est. loss", width),
        reset,
        separator,
        report.percentage_loss
    )?;

    if config.display.show_description() {
        writeln!(out)?;
        for line in strip_markup(&report.description).lines() {
            writeln!(out, "  {}", line)?;
        }
    }

    if !evaluation.advice.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}Recommendations{}", key, reset)?;
        for item in &evaluation.advice {
            writeln!(out, "  - {}", strip_markup(item))?;
        }
    }

    Ok(())
}

fn component_line(component: &HardwareComponent) -> String {
    match component.benchmark_score {
        Some(score) => format!("{} (score {})", component.display_name(), score),
        None => format!("{} (no benchmark)", component.display_name()),
    }
}

/// Aligned table of catalog components
pub fn render_components<W: Write>(
    out: &mut W,
    components: &[&HardwareComponent],
) -> io::Result<()> {
    let id_width = components
        .iter()
        .map(|c| c.id.width())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let name_width = components
        .iter()
        .map(|c| c.display_name().width())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    writeln!(
        out,
        "{}  {}  {}  DETAIL",
        pad("ID", id_width),
        pad("CATEGORY", 11),
        pad("NAME", name_width)
    )?;
    for component in components {
        let detail = match (component.benchmark_score, component.capacity_gb) {
            (Some(score), _) => format!("score {}", score),
            (None, Some(gb)) => format!("{} GB", gb),
            (None, None) => "-".to_string(),
        };
        writeln!(
            out,
            "{}  {}  {}  {}",
            pad(&component.id, id_width),
            pad(component.category.as_str(), 11),
            pad(&component.display_name(), name_width),
            detail
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::BottleneckAnalyzer;
    use crate::data::{Category, HardwareComponent};

    #[test]
    fn named_and_hex_colors() {
        assert_eq!(hex_to_ansi("red"), "\x1b[31m");
        assert_eq!(hex_to_ansi("Orange"), "\x1b[91m");
        assert_eq!(hex_to_ansi("#ff8000"), "\x1b[38;2;255;128;0m");
        assert_eq!(hex_to_ansi("not-a-color"), RESET);
    }

    #[test]
    fn non_ascii_hex_value_falls_back_to_reset() {
        assert_eq!(hex_to_ansi("#0ü000"), RESET);
        assert_eq!(hex_to_ansi("#ééé"), RESET);
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("日本", 5), "日本 ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    fn sample_build() -> (HardwareComponent, HardwareComponent, HardwareComponent) {
        (
            HardwareComponent::new("cpu", Category::Cpu)
                .with_name("Intel", "Core i3-12100F")
                .with_score(5000),
            HardwareComponent::new("gpu", Category::Gpu)
                .with_name("NVIDIA", "RTX 4090")
                .with_score(16000),
            HardwareComponent::new("ram", Category::Ram)
                .with_name("Kingston", "Fury")
                .with_capacity_gb(8),
        )
    }

    #[test]
    fn plain_render_has_no_escape_codes() {
        let (cpu, gpu, ram) = sample_build();
        let build = Build {
            cpu: &cpu,
            gpu: &gpu,
            ram: &ram,
        };
        let evaluation = build.evaluate(&BottleneckAnalyzer::default(), &[]);

        let mut out = Vec::new();
        render_evaluation(&mut out, &Config::default(), &build, &evaluation, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains('\x1b'));
        assert!(!text.contains("**"));
        assert!(text.contains("Bottleneck: cpu"));
        assert!(text.contains("Severity  : severe"));
        assert!(text.contains("Est. loss : ~40%"));
        assert!(text.contains("9600"));
        assert!(text.contains("Insufficient RAM"));
        assert!(!text.contains("Games"));
    }

    #[test]
    fn games_row_summarizes_buckets() {
        use crate::analysis::{GameRequirements, Requirement};

        let (cpu, gpu, ram) = sample_build();
        let build = Build {
            cpu: &cpu,
            gpu: &gpu,
            ram: &ram,
        };
        let games = vec![
            GameRequirements::new("Light", Requirement::default(), Requirement::default()),
            GameRequirements::new(
                "Heavy",
                Requirement {
                    cpu_score: 20000,
                    gpu_score: 20000,
                    ram_gb: 16,
                },
                Requirement {
                    cpu_score: 30000,
                    gpu_score: 30000,
                    ram_gb: 32,
                },
            ),
        ];
        let evaluation = build.evaluate(&BottleneckAnalyzer::default(), &games);

        let mut out = Vec::new();
        render_evaluation(&mut out, &Config::default(), &build, &evaluation, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Games     : 1 recommended, 0 playable, 1 below minimum"));
    }

    #[test]
    fn colored_render_uses_configured_severity_color() {
        let (cpu, gpu, ram) = sample_build();
        let build = Build {
            cpu: &cpu,
            gpu: &gpu,
            ram: &ram,
        };
        let evaluation = build.evaluate(&BottleneckAnalyzer::default(), &[]);
        let mut config = Config::default();
        config.colors.insert("severe".to_string(), "#010203".to_string());

        let mut out = Vec::new();
        render_evaluation(&mut out, &config, &build, &evaluation, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[38;2;1;2;3msevere"));
    }

    #[test]
    fn component_table_is_aligned() {
        let cpu = HardwareComponent::new("cpu-1", Category::Cpu)
            .with_name("AMD", "Ryzen 5 5600X")
            .with_score(22000);
        let ram = HardwareComponent::new("ram-long-id", Category::Ram).with_capacity_gb(32);
        let mut out = Vec::new();
        render_components(&mut out, &[&cpu, &ram]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("cpu-1        CPU"));
        assert!(lines[1].ends_with("score 22000"));
        assert!(lines[2].ends_with("32 GB"));
    }
}

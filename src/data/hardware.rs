//! Hardware component records as supplied by the catalog

use crate::error::RigcheckError;
use crate::utils::parsing::parse_capacity_gb;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Capacity assumed for a RAM kit whose size cannot be determined
pub const DEFAULT_RAM_GB: u32 = 8;

/// Specification key holding a free-text RAM capacity such as `"16 GB"`
pub const CAPACITY_SPEC_KEY: &str = "capacity";

/// Component category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Cpu,
    Gpu,
    Ram,
    #[serde(alias = "Motherboard")]
    Motherboard,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Gpu => "GPU",
            Category::Ram => "RAM",
            Category::Motherboard => "Motherboard",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RigcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpu" => Ok(Category::Cpu),
            "gpu" => Ok(Category::Gpu),
            "ram" => Ok(Category::Ram),
            "motherboard" | "mobo" => Ok(Category::Motherboard),
            other => Err(RigcheckError::Parse(format!("Unknown category: {}", other))),
        }
    }
}

/// A single catalog entry.
///
/// Immutable input to the analyzer. `benchmark_score` of `None` is read as 0
/// (unknown); `capacity_gb` only matters for RAM and is normally resolved by
/// the catalog at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareComponent {
    pub id: String,
    pub category: Category,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub benchmark_score: Option<u32>,
    #[serde(default)]
    pub capacity_gb: Option<u32>,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
}

impl HardwareComponent {
    pub fn new(id: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            category,
            brand: String::new(),
            model: String::new(),
            benchmark_score: None,
            capacity_gb: None,
            specifications: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, brand: impl Into<String>, model: impl Into<String>) -> Self {
        self.brand = brand.into();
        self.model = model.into();
        self
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.benchmark_score = Some(score);
        self
    }

    pub fn with_capacity_gb(mut self, capacity_gb: u32) -> Self {
        self.capacity_gb = Some(capacity_gb);
        self
    }

    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.insert(key.into(), value.into());
        self
    }

    /// Benchmark score, 0 when unknown
    pub fn score(&self) -> u32 {
        self.benchmark_score.unwrap_or(0)
    }

    /// "Brand Model", or the id when neither is set
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.brand.trim(), self.model.trim());
        let name = name.trim();
        if name.is_empty() {
            self.id.clone()
        } else {
            name.to_string()
        }
    }

    /// Capacity parsed from the free-text specification, if any
    pub fn spec_capacity_gb(&self) -> Option<u32> {
        self.specifications
            .get(CAPACITY_SPEC_KEY)
            .and_then(|text| parse_capacity_gb(text))
    }

    /// RAM capacity in GB: the typed field first, then the specification
    /// text, then [`DEFAULT_RAM_GB`].
    pub fn ram_capacity_gb(&self) -> u32 {
        self.capacity_gb
            .or_else(|| self.spec_capacity_gb())
            .unwrap_or(DEFAULT_RAM_GB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_score_reads_as_zero() {
        let cpu = HardwareComponent::new("cpu-1", Category::Cpu);
        assert_eq!(cpu.score(), 0);
        assert_eq!(cpu.with_score(1200).score(), 1200);
    }

    #[test]
    fn ram_capacity_prefers_typed_field() {
        let ram = HardwareComponent::new("ram-1", Category::Ram)
            .with_capacity_gb(32)
            .with_spec("capacity", "16 GB");
        assert_eq!(ram.ram_capacity_gb(), 32);
    }

    #[test]
    fn ram_capacity_falls_back_to_spec_then_default() {
        let ram = HardwareComponent::new("ram-1", Category::Ram).with_spec("capacity", "32gb");
        assert_eq!(ram.ram_capacity_gb(), 32);

        let unknown = HardwareComponent::new("ram-2", Category::Ram).with_spec("capacity", "lots");
        assert_eq!(unknown.ram_capacity_gb(), DEFAULT_RAM_GB);

        let bare = HardwareComponent::new("ram-3", Category::Ram);
        assert_eq!(bare.ram_capacity_gb(), DEFAULT_RAM_GB);
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let gpu = HardwareComponent::new("gpu-7", Category::Gpu);
        assert_eq!(gpu.display_name(), "gpu-7");
        assert_eq!(gpu.with_name("NVIDIA", "RTX 4060 Ti").display_name(), "NVIDIA RTX 4060 Ti");
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("gpu".parse::<Category>().unwrap(), Category::Gpu);
        assert_eq!("Motherboard".parse::<Category>().unwrap(), Category::Motherboard);
        assert!("psu".parse::<Category>().is_err());
    }
}

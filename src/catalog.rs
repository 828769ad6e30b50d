//! Hardware catalog loaded from a TOML file
//!
//! ```toml
//! [[component]]
//! id = "ram-ddr4-16"
//! category = "RAM"
//! brand = "Corsair"
//! model = "Vengeance LPX"
//! [component.specifications]
//! capacity = "16 GB"
//!
//! [[game]]
//! name = "Cyberpunk 2077"
//! minimum = { cpu_score = 8000, gpu_score = 7000, ram_gb = 12 }
//! recommended = { cpu_score = 20000, gpu_score = 17000, ram_gb = 16 }
//! ```

use crate::analysis::games::validate_games;
use crate::analysis::{BottleneckAnalyzer, Evaluation, GameRequirements};
use crate::data::{Category, HardwareComponent, DEFAULT_RAM_GB};
use crate::error::{Result, RigcheckError};
use crate::utils::file::read_file_safe;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "component")]
    components: Vec<HardwareComponent>,
    #[serde(default, rename = "game")]
    games: Vec<GameRequirements>,
}

/// All known components and games, in file order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    components: Vec<HardwareComponent>,
    games: Vec<GameRequirements>,
}

/// One CPU/GPU/RAM combination drawn from the catalog
#[derive(Debug, Clone, Copy)]
pub struct Build<'a> {
    pub cpu: &'a HardwareComponent,
    pub gpu: &'a HardwareComponent,
    pub ram: &'a HardwareComponent,
}

impl Build<'_> {
    pub fn evaluate(&self, analyzer: &BottleneckAnalyzer, games: &[GameRequirements]) -> Evaluation {
        Evaluation::new(analyzer, self.cpu, self.gpu, self.ram, games)
    }
}

/// Evaluation of one catalog build, keyed by component ids
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildReport {
    pub cpu_id: String,
    pub gpu_id: String,
    pub ram_id: String,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and resolving every RAM
    /// capacity to a plain integer.
    pub fn from_components(components: Vec<HardwareComponent>) -> Result<Self> {
        {
            let mut seen = HashSet::new();
            for component in &components {
                if component.id.trim().is_empty() {
                    return Err(RigcheckError::Catalog("component with empty id".to_string()));
                }
                if !seen.insert(component.id.as_str()) {
                    return Err(RigcheckError::Catalog(format!(
                        "duplicate component id '{}'",
                        component.id
                    )));
                }
            }
        }

        let components = components.into_iter().map(resolve_capacity).collect();
        Ok(Self {
            components,
            games: Vec::new(),
        })
    }

    /// Attach game requirements, rejecting unnamed or duplicate games
    pub fn with_games(mut self, games: Vec<GameRequirements>) -> Result<Self> {
        validate_games(&games)?;
        self.games = games;
        Ok(self)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text)?;
        Self::from_components(file.components)?.with_games(file.games)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading catalog");
        let text = read_file_safe(path)?;
        Self::from_toml_str(&text)
    }

    pub fn components(&self) -> &[HardwareComponent] {
        &self.components
    }

    pub fn games(&self) -> &[GameRequirements] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&HardwareComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &HardwareComponent> {
        self.components.iter().filter(move |c| c.category == category)
    }

    fn expect_category(&self, id: &str, category: Category) -> Result<&HardwareComponent> {
        let component = self
            .get(id)
            .ok_or_else(|| RigcheckError::Catalog(format!("unknown component id '{}'", id)))?;
        if component.category != category {
            return Err(RigcheckError::Catalog(format!(
                "component '{}' is a {}, expected a {}",
                id, component.category, category
            )));
        }
        Ok(component)
    }

    /// Look up a build by ids, checking each has the right category
    pub fn pick(&self, cpu_id: &str, gpu_id: &str, ram_id: &str) -> Result<Build<'_>> {
        Ok(Build {
            cpu: self.expect_category(cpu_id, Category::Cpu)?,
            gpu: self.expect_category(gpu_id, Category::Gpu)?,
            ram: self.expect_category(ram_id, Category::Ram)?,
        })
    }

    /// Every CPU x GPU x RAM combination, CPU-major in file order
    pub fn builds(&self) -> Vec<Build<'_>> {
        let mut builds = Vec::new();
        for cpu in self.by_category(Category::Cpu) {
            for gpu in self.by_category(Category::Gpu) {
                for ram in self.by_category(Category::Ram) {
                    builds.push(Build { cpu, gpu, ram });
                }
            }
        }
        builds
    }

    /// Evaluate every build in parallel. Output order matches [`Catalog::builds`].
    pub fn scan(&self, analyzer: &BottleneckAnalyzer) -> Vec<BuildReport> {
        self.builds()
            .par_iter()
            .map(|build| BuildReport {
                cpu_id: build.cpu.id.clone(),
                gpu_id: build.gpu.id.clone(),
                ram_id: build.ram.id.clone(),
                evaluation: build.evaluate(analyzer, &self.games),
            })
            .collect()
    }
}

fn resolve_capacity(mut component: HardwareComponent) -> HardwareComponent {
    if component.category == Category::Ram && component.capacity_gb.is_none() {
        let capacity = component.spec_capacity_gb().unwrap_or_else(|| {
            warn!(
                id = %component.id,
                "RAM capacity not found in specifications, assuming {} GB",
                DEFAULT_RAM_GB
            );
            DEFAULT_RAM_GB
        });
        component.capacity_gb = Some(capacity);
    }
    component
}

//! Data structures shared by the analyzer, catalog and display layers

pub mod hardware;
pub mod report;

pub use hardware::{Category, HardwareComponent, CAPACITY_SPEC_KEY, DEFAULT_RAM_GB};
pub use report::{
    BottleneckKind, BottleneckReport, ComponentSummary, ImbalanceFinding, RamFinding, Severity,
};

use clap::{Parser, Subcommand};
use rigcheck::{
    catalog::BuildReport, config, display, logging, BottleneckAnalyzer, Catalog, Category, Result,
};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "rigcheck", version, about = "Find bottlenecks in a CPU/GPU/RAM build")]
struct Cli {
    /// Hardware catalog (TOML); overrides catalog_path from the config
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Config file; defaults to ~/.config/rigcheck/config.toml when present
    #[arg(long, global = true)]
    config: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one CPU/GPU/RAM combination
    Analyze {
        #[arg(long)]
        cpu: String,
        #[arg(long)]
        gpu: String,
        #[arg(long)]
        ram: String,
    },
    /// Analyze every combination in the catalog
    Scan {
        /// Only show builds with a bottleneck
        #[arg(long)]
        only_bottlenecked: bool,
    },
    /// List catalog components
    List {
        #[arg(long)]
        category: Option<Category>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("rigcheck: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    let catalog_path = config.resolve_catalog_path(cli.catalog.as_deref())?;
    let catalog = Catalog::load(&catalog_path)?;
    info!(components = catalog.len(), games = catalog.games().len(), path = %catalog_path.display(), "catalog loaded");

    let analyzer = BottleneckAnalyzer::new(config.thresholds.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let color = !cli.no_color && !cli.json;

    match cli.command {
        Command::Analyze { cpu, gpu, ram } => {
            let build = catalog.pick(&cpu, &gpu, &ram)?;
            let evaluation = build.evaluate(&analyzer, catalog.games());
            if cli.json {
                let report = BuildReport {
                    cpu_id: cpu,
                    gpu_id: gpu,
                    ram_id: ram,
                    evaluation,
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                display::render_evaluation(&mut out, &config, &build, &evaluation, color)?;
            }
        }
        Command::Scan { only_bottlenecked } => {
            let builds = catalog.builds();
            let reports = catalog.scan(&analyzer);
            info!(builds = reports.len(), "scan finished");

            let selected: Vec<_> = builds
                .iter()
                .zip(reports.iter())
                .filter(|(_, r)| !only_bottlenecked || r.evaluation.report.has_bottleneck)
                .collect();

            if cli.json {
                let payload: Vec<&BuildReport> = selected.iter().map(|(_, r)| *r).collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
            } else {
                for (i, (build, report)) in selected.iter().enumerate() {
                    if i > 0 {
                        writeln!(out, "\n{}", "-".repeat(40))?;
                    }
                    display::render_evaluation(&mut out, &config, build, &report.evaluation, color)?;
                }
            }
        }
        Command::List { category } => {
            let components: Vec<_> = catalog
                .components()
                .iter()
                .filter(|c| category.map_or(true, |cat| c.category == cat))
                .collect();
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&components)?)?;
            } else {
                display::render_components(&mut out, &components)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

//! # Stope Designer CLI
//!
//! Command-line front end for `stope_core`. It validates inputs, runs the
//! design pipeline, prints results (text or JSON) and manages `.stope`
//! project files.
//!
//! ```text
//! stope design --dip 55 --thickness 2 --rqd 80 --depth 400
//! stope interactive
//! stope project new level3.stope --engineer "A. Sharma" --mine Zawar
//! stope project add level3.stope --label 12N --dip 55 --thickness 2 --rqd 80 --depth 400
//! stope project run level3.stope
//! stope config --print-default
//! ```

mod logging;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing::debug;

use stope_core::calculations::StopeDesigner;
use stope_core::file_io::{load_config, load_project, project_path, save_project, save_report};
use stope_core::inputs::{Advisory, DesignInputs, OreType};
use stope_core::project::Project;
use stope_core::report;
use stope_core::rock_mass::RockMassClassifier;
use stope_core::{CalcError, DesignConfig, StopeDesignResult};

#[derive(Parser)]
#[command(name = "stope")]
#[command(author, version, about = "Underground stope design for Indian metalliferous mines")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Design a single stope
    Design(DesignArgs),

    /// Prompt for inputs and design a single stope
    Interactive {
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Manage design project files
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Configuration helpers
    Config {
        /// Print the default configuration as TOML
        #[arg(long)]
        print_default: bool,
    },
}

#[derive(Args, Clone, Debug)]
struct InputArgs {
    /// Dip of the orebody from horizontal (degrees)
    #[arg(long)]
    dip: f64,

    /// Orebody thickness (m)
    #[arg(long)]
    thickness: f64,

    /// Rock Quality Designation (%)
    #[arg(long)]
    rqd: f64,

    /// Depth below surface (m)
    #[arg(long)]
    depth: f64,

    /// Ore density (t/m³), default 2.7
    #[arg(long)]
    density: Option<f64>,

    /// Ore type, e.g. zinc, gold, iron
    #[arg(long, value_name = "NAME")]
    ore_type: Option<String>,

    /// Measured uniaxial compressive strength (MPa)
    #[arg(long, value_name = "MPA")]
    ucs: Option<f64>,
}

#[derive(Args, Clone, Debug)]
struct DesignArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Write a text report to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Notes to include in the report
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// Create an empty project file
    New {
        path: PathBuf,
        #[arg(long, default_value = "")]
        engineer: String,
        #[arg(long, default_value = "")]
        mine: String,
        /// TOML configuration to store in the project
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Add a design to a project
    Add {
        path: PathBuf,
        #[arg(long)]
        label: String,
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Design every entry in a project
    Run {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },

    /// List the designs in a project
    List { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Design(args) => run_design(args),
        Commands::Interactive { config } => run_interactive(config.as_deref()),
        Commands::Project(cmd) => run_project(cmd),
        Commands::Config { print_default } => {
            if !print_default {
                bail!("nothing to do; try `stope config --print-default`");
            }
            print!("{}", DesignConfig::default().to_toml_string()?);
            Ok(())
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn run_design(args: DesignArgs) -> Result<()> {
    let as_json = args.json;
    design_command(args).inspect_err(|err| {
        if as_json {
            if let Some(json) = error_json(err) {
                println!("{}", json);
            }
        }
    })
}

fn design_command(args: DesignArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let (inputs, mut advisories) = build_inputs(&args.inputs);

    let errors = inputs.validate_all();
    if !errors.is_empty() {
        report_invalid(&errors, args.json);
        bail!("{} invalid input(s)", errors.len());
    }
    advisories.extend(inputs.advisories());

    let designer = StopeDesigner::with_config(config)?;
    let result = designer.design(&inputs);

    if args.json {
        let out = json!({
            "inputs": inputs,
            "result": result,
            "tonnage": result.tonnage(inputs.density()),
            "cost_per_ton": result.cost_per_ton(inputs.density()),
            "advisories": advisories.iter().map(|a| a.message.as_str()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_result(&inputs, &result, &advisories);
    }

    if let Some(path) = args.report {
        write_report(&path, &result, &advisories, args.notes.as_deref())?;
    }
    Ok(())
}

fn run_interactive(config: Option<&Path>) -> Result<()> {
    let config = resolve_config(config)?;

    println!("Stope Designer - Interactive Mode");
    println!("=================================");
    println!();

    let dip = prompt_f64("Dip angle (degrees) [55.0]: ", 55.0);
    let thickness = prompt_f64("Ore thickness (m) [2.0]: ", 2.0);
    let rqd = prompt_f64("RQD (%) [80.0]: ", 80.0);
    let depth = prompt_f64("Mining depth (m) [400.0]: ", 400.0);
    let density = prompt_f64("Ore density (t/m³) [2.7]: ", 2.7);
    let ore_type = prompt_line("Ore type [generic]: ");

    let (ore_type, advisory) = OreType::parse_or_generic(ore_type.as_deref().unwrap_or("generic"));
    let inputs = DesignInputs::new(dip, thickness, rqd, depth)
        .with_density(density)
        .with_ore_type(ore_type);

    if let Err(e) = inputs.validate() {
        eprintln!("Error: {}", e);
        bail!("invalid input");
    }

    let mut advisories: Vec<Advisory> = advisory.into_iter().collect();
    advisories.extend(inputs.advisories());

    println!();
    let result = StopeDesigner::with_config(config)?.design(&inputs);
    print_result(&inputs, &result, &advisories);

    if let Some(path) = prompt_line("Save text report to (blank to skip): ") {
        let notes = prompt_line("Notes (blank for none): ");
        write_report(Path::new(&path), &result, &advisories, notes.as_deref())?;
    }
    Ok(())
}

fn run_project(cmd: ProjectCommands) -> Result<()> {
    match cmd {
        ProjectCommands::New {
            path,
            engineer,
            mine,
            config,
        } => {
            let path = project_path(&path);
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            let mut project = Project::new(engineer, mine);
            project.set_config(resolve_config(config.as_deref())?)?;
            save_project(&project, &path)?;
            println!("Created {}", path.display());
        }
        ProjectCommands::Add { path, label, inputs } => {
            let path = project_path(&path);
            let mut project = open_project(&path)?;
            let (inputs, advisories) = build_inputs(&inputs);
            for advisory in &advisories {
                eprintln!("Note: {}", advisory);
            }
            inputs.validate()?;
            let id = project.add_design(label.clone(), inputs);
            save_project(&project, &path)?;
            println!("Added '{}' ({})", label, id);
        }
        ProjectCommands::Run { path, json } => {
            let project = open_project(&path)?;
            let runs = project.run_all();
            debug!(designs = runs.len(), "project evaluated");

            if json {
                let out: Vec<serde_json::Value> = runs
                    .iter()
                    .map(|run| match &run.result {
                        Ok(result) => json!({ "id": run.id, "label": run.label, "result": result }),
                        Err(e) => json!({ "id": run.id, "label": run.label, "error": e }),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
                return Ok(());
            }

            println!(
                "{:<16} {:<24} {:>22} {:>6} {:>16}",
                "Label", "Method", "L × W × H (m)", "SF", "Total (INR)"
            );
            for run in &runs {
                match &run.result {
                    Ok(r) => println!(
                        "{:<16} {:<24} {:>22} {:>4.2} {} {:>16.2}",
                        run.label,
                        r.stope_type.to_string(),
                        format!("{:.2} × {:.2} × {:.2}", r.dimensions.length, r.dimensions.width, r.dimensions.height),
                        r.stability.safety_factor,
                        status_icon(r.stability.dgms_compliant),
                        r.costs.total,
                    ),
                    Err(e) => println!("{:<16} ERROR: {}", run.label, e),
                }
            }
        }
        ProjectCommands::List { path } => {
            let project = open_project(&path)?;
            println!("{} - {} ({} designs)", project.meta.mine, project.meta.engineer, project.design_count());
            for (id, item) in project.sorted_designs() {
                let i = &item.inputs;
                println!(
                    "  {:<16} dip {:>5.1}°  t {:>5.2} m  RQD {:>5.1}%  depth {:>6.1} m  {}  [{}]",
                    item.label, i.dip_angle, i.ore_thickness, i.rqd, i.mining_depth, i.ore_type, id
                );
            }
        }
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn resolve_config(path: Option<&Path>) -> Result<DesignConfig> {
    match path {
        Some(path) => load_config(path).with_context(|| format!("loading config {}", path.display())),
        None => Ok(DesignConfig::default()),
    }
}

fn open_project(path: &Path) -> Result<Project> {
    let path = project_path(path);
    load_project(&path).with_context(|| format!("opening project {}", path.display()))
}

fn build_inputs(args: &InputArgs) -> (DesignInputs, Vec<Advisory>) {
    let mut inputs = DesignInputs::new(args.dip, args.thickness, args.rqd, args.depth);
    let mut advisories = Vec::new();

    if let Some(density) = args.density {
        inputs = inputs.with_density(density);
    }
    if let Some(ucs) = args.ucs {
        inputs = inputs.with_ucs(ucs);
    }
    if let Some(name) = &args.ore_type {
        let (ore_type, advisory) = OreType::parse_or_generic(name);
        inputs = inputs.with_ore_type(ore_type);
        advisories.extend(advisory);
    }
    (inputs, advisories)
}

/// Structured JSON for the first `CalcError` in an error chain.
fn error_json(err: &anyhow::Error) -> Option<String> {
    let calc = err.chain().find_map(|cause| cause.downcast_ref::<CalcError>())?;
    let out = json!({ "error_code": calc.error_code(), "error": calc });
    serde_json::to_string_pretty(&out).ok()
}

fn report_invalid(errors: &[CalcError], as_json: bool) {
    if as_json {
        if let Ok(json) = serde_json::to_string_pretty(errors) {
            println!("{}", json);
        }
        return;
    }
    for e in errors {
        eprintln!("Error: {}", e);
    }
}

fn write_report(path: &Path, result: &StopeDesignResult, advisories: &[Advisory], notes: Option<&str>) -> Result<()> {
    let text = report::summary_text(result, advisories, notes);
    save_report(&text, path).with_context(|| format!("writing report {}", path.display()))?;
    println!("Report written to {}", path.display());
    Ok(())
}

fn print_result(inputs: &DesignInputs, result: &StopeDesignResult, advisories: &[Advisory]) {
    let d = &result.dimensions;
    let s = &result.stability;
    let c = &result.costs;
    let density = inputs.density();

    println!("═══════════════════════════════════════");
    println!("  STOPE DESIGN RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Dip:        {:.1}°", inputs.dip_angle);
    println!("  Thickness:  {:.2} m", inputs.ore_thickness);
    println!("  RQD:        {:.1}%", inputs.rqd);
    println!("  Depth:      {:.1} m", inputs.mining_depth);
    println!("  Ore:        {} ({:.2} t/m³)", inputs.ore_type, density);
    println!();
    println!("Rock Mass:");
    println!("  RMR = {:.2} ({})", d.rmr, RockMassClassifier::rmr_class(d.rmr));
    println!("  Q   = {:.2}", d.q_value);
    println!("  N'  = {:.2}", d.stability_number);
    println!();
    println!("Method: {}", result.stope_type);
    println!();
    println!("Geometry:");
    println!("  L × W × H = {:.2} × {:.2} × {:.2} m", d.length, d.width, d.height);
    println!("  Volume    = {:.2} m³ ({:.2} t)", d.volume, result.tonnage(density));
    println!("  HR        = {:.2} m (design {:.2} m)", d.hydraulic_radius, d.design_hydraulic_radius);
    println!();
    println!("Stability:");
    println!("  σv = {:.2} MPa, σh = {:.2} MPa (k = {:.2})", s.vertical_stress, s.horizontal_stress, s.k_ratio);
    println!("  σcm = {:.2} MPa", s.rock_strength);
    println!(
        "  Safety factor: {:.2} {} ({})",
        s.safety_factor,
        status_icon(s.dgms_compliant),
        s.stability_class
    );
    println!();
    println!("Costs (INR):");
    println!("  Labor:       {:>16.2}", c.labor);
    println!("  Equipment:   {:>16.2}", c.equipment);
    println!("  Support:     {:>16.2}", c.support);
    println!("  Ventilation: {:>16.2}", c.ventilation);
    println!("  Total:       {:>16.2}", c.total);
    println!("  Per tonne:   {:>16.2}", result.cost_per_ton(density));
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {}",
        if s.dgms_compliant { "DGMS COMPLIANT" } else { "BELOW DGMS MINIMUM" }
    );
    println!("═══════════════════════════════════════");

    if !advisories.is_empty() {
        println!();
        println!("Notes:");
        for advisory in advisories {
            println!("  - {}", advisory);
        }
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// Read one trimmed line; `None` on EOF, error or blank input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn status_icon(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}

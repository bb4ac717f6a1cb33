use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{ensure, Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use mop_algo::dispatch::ROUND_STEP_MW;
use mop_algo::{DispatchSolution, DispatchSolver};
use mop_cli::cli::{Cli, Commands};
use mop_io::{payload, PlantProduction};
use tabwriter::TabWriter;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        // keep stdout clean for piping the plan JSON
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let result = match &cli.command {
        Commands::Plan { payload, out } => run_plan(payload, out.as_deref()),
        Commands::Completions { shell, out } => {
            let mut cmd = Cli::command();
            match out {
                Some(path) => {
                    let mut file = match fs::File::create(path) {
                        Ok(file) => file,
                        Err(e) => {
                            error!("cannot create {}: {e}", path.display());
                            std::process::exit(1);
                        }
                    };
                    generate(*shell, &mut cmd, "mop-cli", &mut file);
                }
                None => generate(*shell, &mut cmd, "mop-cli", &mut io::stdout()),
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run_plan(payload_path: &Path, out: Option<&Path>) -> Result<()> {
    let request = payload::load_plan_request(payload_path)?;
    let (fleet, fuels, load) = request.into_model()?;
    info!(
        "Planning production for {} plants, load {}",
        fleet.len(),
        load
    );

    let solution = DispatchSolver::new().solve(&fleet, &fuels, load)?;

    // the solver guarantees this for any Ok result; re-checked here because
    // the caller is promised a plan that matches the requested load
    ensure!(
        (solution.total_mw - load.value()).abs() <= ROUND_STEP_MW + 1e-9,
        "plan total {:.1} MW does not match requested load {}",
        solution.total_mw,
        load
    );
    info!(
        "Plan cost {:.2} euro/h, solved in {} ms",
        solution.objective_value, solution.solve_time_ms
    );

    print_summary(&solution)?;

    let response: Vec<PlantProduction> = solution
        .assignments
        .iter()
        .map(|a| PlantProduction {
            name: a.name.clone(),
            p: a.p_mw,
        })
        .collect();
    let rendered = serde_json::to_string_pretty(&response)?;

    match out {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing plan to {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Human-readable plan table, written to stderr so stdout stays machine-clean
fn print_summary(solution: &DispatchSolution) -> Result<()> {
    let mut tw = TabWriter::new(io::stderr());
    writeln!(tw, "plant\tMW")?;
    for a in &solution.assignments {
        writeln!(tw, "{}\t{:.1}", a.name, a.p_mw)?;
    }
    writeln!(tw, "total\t{:.1}", solution.total_mw)?;
    tw.flush()?;
    Ok(())
}

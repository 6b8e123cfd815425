/*!
 * FCFS Simulator - Main Entry Point
 *
 * Reads a workload from the file given as the first argument (or stdin),
 * runs the simulation and prints the report to stdout.
 */

use std::io::Read;

use fcfs_sim::{init_tracing, OutputFormat, Report, SimConfig, SimError, Workload};
use tracing::{debug, info};

fn main() -> miette::Result<()> {
    let config = SimConfig::from_env()?;
    init_tracing(config.trace_json);

    debug!(?config, "Configuration loaded");

    let workload = match &config.input {
        Some(path) => Workload::load(path)?,
        None => {
            info!("Reading workload from stdin");
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(SimError::from)?;
            Workload::from_text(&input)?
        }
    };

    let outcome = fcfs_sim::simulate(workload)?;
    let report = Report::from_outcome(&outcome);

    let rendered = match config.output {
        OutputFormat::Table if config.show_timeline => report.render_table_with_timeline(),
        OutputFormat::Table => report.render_table(),
        OutputFormat::Json => report.to_json()?,
    };
    println!("{}", rendered.trim_end());

    Ok(())
}

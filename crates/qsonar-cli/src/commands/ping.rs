//! Ping command implementation.

use anyhow::Result;
use console::style;

use qsonar_engine::ping_circuit;

use super::common::{print_circuit, print_counts, simulator_engine};

/// Ping a single cell whose occupancy is given directly.
///
/// With `show_circuit`, the circuit is also listed and sampled `shots` times
/// so its raw counts can be compared with the decoded answer.
pub async fn execute(
    present: bool,
    show_circuit: bool,
    shots: u32,
    seed: Option<u64>,
) -> Result<()> {
    let engine = simulator_engine(seed)?;

    if show_circuit {
        let circuit = ping_circuit(present)?;
        print_circuit(&circuit);
        print_counts(&engine.backend().execute(&circuit, shots).await?);
    }

    let result = engine.ping(present).await?;

    let verdict = if result == 1 {
        style("SHIP").red().bold()
    } else {
        style("WATER").cyan()
    };
    println!("{} Ping result: {} ({})", style("✓").green().bold(), result, verdict);
    Ok(())
}

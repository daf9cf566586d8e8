//! Counting scan command implementation.

use anyhow::Result;
use console::style;

use qsonar_engine::counting_circuit;

use super::common::{print_circuit, print_counts, simulator_engine};

/// Count the occupied cells among four given flags.
pub async fn execute(
    targets: &[bool],
    show_circuit: bool,
    shots: u32,
    seed: Option<u64>,
) -> Result<()> {
    let engine = simulator_engine(seed)?;

    if show_circuit {
        let circuit = counting_circuit(targets)?;
        print_circuit(&circuit);
        print_counts(&engine.backend().execute(&circuit, shots).await?);
    }

    let count = engine.count_scan(targets).await?;

    println!(
        "{} Scan result: {} {}",
        style("✓").green().bold(),
        style(count).yellow().bold(),
        if count == 1 { "signature" } else { "signatures" }
    );
    Ok(())
}

//! Shared helpers for CLI commands.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use console::style;

use qsonar_adapter_sim::SimulatorBackend;
use qsonar_engine::SonarEngine;
use qsonar_hal::{BackendConfig, BackendFactory, ExecutionResult};
use qsonar_ir::Circuit;

/// Build an engine over the local simulator, seeded when `seed` is given.
pub fn simulator_engine(seed: Option<u64>) -> Result<SonarEngine> {
    let mut config = BackendConfig::new("simulator");
    if let Some(seed) = seed {
        config = config.with_extra("seed", serde_json::json!(seed));
    }
    let backend = SimulatorBackend::from_config(config)?;
    Ok(SonarEngine::new(Arc::new(backend)))
}

/// Parse one occupancy flag: `1`/`0`, `true`/`false`, `ship`/`water`.
pub fn parse_occupancy(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "ship" | "s" => Ok(true),
        "0" | "false" | "water" | "." => Ok(false),
        other => Err(format!(
            "'{other}' is not an occupancy flag (use 1/0, true/false, ship/water)"
        )),
    }
}

/// A list of occupancy flags, written `1,0,1,1` or `1011`.
///
/// Any length is accepted here; the engine decides what it will scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets(pub Vec<bool>);

impl FromStr for Targets {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Targets(Vec::new()));
        }
        let flags = if s.contains(',') {
            s.split(',').map(parse_occupancy).collect::<Result<_, _>>()?
        } else {
            s.chars()
                .map(|c| parse_occupancy(&c.to_string()))
                .collect::<Result<_, _>>()?
        };
        Ok(Targets(flags))
    }
}

/// Print a circuit's instructions and summary.
pub fn print_circuit(circuit: &Circuit) {
    println!(
        "\n{} {} ({} qubits, {} clbits, depth {})",
        style("Circuit").cyan().bold(),
        style(circuit.name()).green(),
        circuit.num_qubits(),
        circuit.num_clbits(),
        circuit.depth()
    );
    let layout: Vec<String> = circuit
        .qubits()
        .iter()
        .filter(|q| q.slot.is_some())
        .map(|q| format!("{}={q}", q.id))
        .chain(
            circuit
                .clbits()
                .iter()
                .filter(|c| c.slot.is_some())
                .map(|c| format!("{}={c}", c.id)),
        )
        .collect();
    if !layout.is_empty() {
        println!("  {}", style(layout.join(" ")).dim());
    }

    for (i, instruction) in circuit.instructions().iter().enumerate() {
        println!("  {:>3}  {}", style(i).dim(), instruction);
    }

    let mut ops: Vec<_> = circuit.count_ops().into_iter().collect();
    ops.sort_unstable();
    let summary: Vec<String> = ops.iter().map(|(name, n)| format!("{name}: {n}")).collect();
    println!("  {}", style(summary.join(", ")).dim());
}

/// Print raw measurement counts, most frequent first.
pub fn print_counts(result: &ExecutionResult) {
    println!(
        "\n{} Raw counts ({} shots):",
        style("✓").green().bold(),
        result.shots
    );

    let total = result.counts.total_shots() as f64;
    for (bitstring, count) in result.counts.sorted() {
        let prob = *count as f64 / total * 100.0;
        let bar: String = "█".repeat((prob / 2.0).round() as usize);
        println!(
            "  {}: {:>6} ({:>5.1}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if let Some(time_ms) = result.execution_time_ms {
        println!("  Execution time: {} ms", style(time_ms).yellow());
    }
}

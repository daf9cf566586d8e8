//! Self-check command implementation.

use anyhow::Result;
use console::style;

use qsonar_game::selfcheck;

use super::common::simulator_engine;

/// Run the engine's known-answer checks and fail unless all pass.
pub async fn execute(seed: Option<u64>) -> Result<()> {
    println!("{} Running engine self-check", style("→").cyan().bold());

    let engine = simulator_engine(seed)?;
    let report = selfcheck::run(&engine).await;

    for check in &report.checks {
        let mark = if check.passed() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        println!("  {mark} {check}");
    }

    if !report.is_nominal() {
        anyhow::bail!("Engine status: {}", report.status);
    }
    println!(
        "\n{} Engine status: {}",
        style("✓").green().bold(),
        style(report.status).green()
    );
    Ok(())
}

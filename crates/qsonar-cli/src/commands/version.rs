//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum sonar for a 4x4 battleship grid",
        style("qsonar").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qsonar-ir      Circuit representation");
    println!("  qsonar-hal     Backend abstraction");
    println!("  qsonar-engine  Ping and counting-scan engines");
    println!("  qsonar-game    Board, scans, sessions and self-check");
    println!("  qsonar-cli     Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}

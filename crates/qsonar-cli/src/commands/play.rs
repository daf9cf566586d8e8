//! Interactive game on a randomly placed board.

use anyhow::Result;
use console::style;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::{AsyncBufReadExt, BufReader};

use qsonar_game::{Board, Coord, ScanLine, Sector, Session, selfcheck};

use super::common::simulator_engine;

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Ping(Coord),
    Scan(ScanLine),
    Board,
    Help,
    Quit,
}

impl Action {
    /// Parse a command such as `B3`, `scan row A`, `scan col 2` or `quit`.
    pub fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        let lower = input.to_ascii_lowercase();

        match lower.as_str() {
            "board" | "b" => return Ok(Action::Board),
            "help" | "h" | "?" => return Ok(Action::Help),
            "quit" | "exit" | "q" => return Ok(Action::Quit),
            _ => {}
        }

        if let Some(rest) = lower.strip_prefix("scan") {
            return rest
                .trim()
                .parse()
                .map(Action::Scan)
                .map_err(|e| format!("{e}"));
        }

        input
            .parse()
            .map(Action::Ping)
            .map_err(|_| format!("Unknown command '{input}'. Type 'help' for commands."))
    }
}

fn print_help() {
    println!("  {}          ping one sector", style("A1..D4").cyan());
    println!("  {}    count ships on a row", style("scan row A").cyan());
    println!("  {}    count ships on a column", style("scan col 2").cyan());
    println!("  {}           show what you know", style("board").cyan());
    println!("  {}            give up", style("quit").cyan());
}

/// Run an interactive game until every ship is found or the player quits.
pub async fn execute(ships: usize, seed: Option<u64>) -> Result<()> {
    let engine = simulator_engine(seed)?;

    let report = selfcheck::run(&engine).await;
    if !report.is_nominal() {
        anyhow::bail!("Engine status: {}", report.status);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let board = Board::random(ships, &mut rng)?;
    let mut game = Session::new(board.clone(), engine);

    println!(
        "{} {} enemy signatures hidden on the grid. Engine {}.",
        style("qsonar").cyan().bold(),
        style(game.ships_total()).yellow(),
        style(report.status).green()
    );
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !game.is_won() {
        print!("\n{} ", style(">").cyan().bold());
        std::io::Write::flush(&mut std::io::stdout())?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let action = match Action::parse(&line) {
            Ok(action) => action,
            Err(msg) => {
                println!("  {}", style(msg).red());
                continue;
            }
        };

        match action {
            Action::Ping(coord) => match game.ping(coord).await {
                Ok(Sector::Ship) => println!("  {coord}: {}", style("SHIP DETECTED").red().bold()),
                Ok(Sector::Clear) => println!("  {coord}: {}", style("clear").cyan()),
                Err(e) if e.is_user_error() => println!("  {}", style(e).yellow()),
                Err(e) => return Err(e.into()),
            },
            Action::Scan(line) => match game.scan(line).await {
                Ok(count) => println!("  {line}: {} signature(s)", style(count).yellow().bold()),
                Err(e) if e.is_user_error() => println!("  {}", style(e).yellow()),
                Err(e) => return Err(e.into()),
            },
            Action::Board => println!("{}", game.render()),
            Action::Help => print_help(),
            Action::Quit => break,
        }
    }

    println!("\n{}", game.render());
    if game.is_won() {
        println!(
            "\n{} All {} ships located with {} pings.",
            style("✓").green().bold(),
            game.ships_total(),
            game.pings_used()
        );
    } else {
        println!(
            "\n{} {} of {} ships located.",
            style("→").cyan().bold(),
            game.ships_found(),
            game.ships_total()
        );
        let positions: Vec<String> = board.ships().iter().map(|c| c.to_string()).collect();
        println!("  Ships were at {}", style(positions.join(" ")).red());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ping() {
        assert_eq!(
            Action::parse("b3"),
            Ok(Action::Ping("B3".parse().unwrap()))
        );
        assert!(Action::parse("Z9").is_err());
    }

    #[test]
    fn test_parse_scan() {
        assert_eq!(Action::parse("scan row A"), Ok(Action::Scan(ScanLine::Row(0))));
        assert_eq!(Action::parse("SCAN col 2"), Ok(Action::Scan(ScanLine::Column(1))));
        assert_eq!(
            Action::parse("scan scan-row-D"),
            Ok(Action::Scan(ScanLine::Row(3)))
        );
        assert!(Action::parse("scan row 9").is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Action::parse(" board "), Ok(Action::Board));
        assert_eq!(Action::parse("?"), Ok(Action::Help));
        assert_eq!(Action::parse("exit"), Ok(Action::Quit));
    }
}

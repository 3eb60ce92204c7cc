//! Terminal front-end: one line per action, board printed after each.

use clap::Parser;
use env_logger::Env;
use rpsls::{Action, Board, Choice, Config, MatchController, Opponent, RandomOpponent};
use std::io::{self, BufRead, Write};

fn print_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    writeln!(out, "{}", board.caption)?;
    if !board.detail.is_empty() {
        writeln!(out, "{}", board.detail)?;
    }
    writeln!(
        out,
        "You {} - {} Bot (first to {})",
        board.player_score, board.opponent_score, board.target
    )
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    let names: Vec<String> = Choice::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}={}", i + 1, c))
        .collect();
    writeln!(out, "Pick with a name or number ({}), or reset / quit.", names.join(", "))
}

fn main_loop<O: Opponent>(
    input: impl BufRead,
    out: &mut impl Write,
    mut controller: MatchController<O>,
) -> anyhow::Result<()> {
    let mut board = Board::new(controller.state(), Choice::emoji);
    print_help(out)?;
    print_board(out, &board)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Action>() {
            Ok(Action::Pick(choice)) => {
                let round = controller.play_round(choice);
                board.show_round(&round, controller.state());
            }
            Ok(Action::Reset) => {
                controller.reset_match();
                board.reset(controller.state());
            }
            Ok(Action::Quit) => break,
            Err(e) => {
                log::warn!("{}", e);
                print_help(out)?;
                continue;
            }
        }
        print_board(out, &board)?;
        out.flush()?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.seed {
        Some(seed) => main_loop(
            stdin.lock(),
            &mut out,
            MatchController::new(config.target, RandomOpponent::seeded(seed))?,
        ),
        None => main_loop(
            stdin.lock(),
            &mut out,
            MatchController::new(config.target, RandomOpponent::new())?,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str, target: u32) -> String {
        let mut out = Vec::new();
        let controller = MatchController::new(target, || Choice::Scissors).unwrap();
        main_loop(script.as_bytes(), &mut out, controller).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_player_takes_the_match() {
        let out = run("rock\n4\nRock\n", 3);
        assert!(out.contains("You 🪨  vs  ✂️ Bot"));
        assert!(out.contains("You 2 - 0 Bot"));
        assert!(out.contains("You won (Scores reset.)"));
        assert!(out.trim_end().ends_with("You 0 - 0 Bot (first to 3)"));
    }

    #[test]
    fn test_reset_and_quit() {
        let out = run("paper\nreset\nquit\nrock\n", 3);
        assert!(out.contains("You 0 - 1 Bot"));
        assert!(out.trim_end().ends_with("Choose a shape:\nYou 0 - 0 Bot (first to 3)"));
        assert!(!out.contains("You 1 - 1 Bot"));
    }

    #[test]
    fn test_unknown_input_shows_help() {
        let out = run("dynamite\n", 3);
        assert_eq!(out.matches("Pick with a name or number").count(), 2);
    }
}

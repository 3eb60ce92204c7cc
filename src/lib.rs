//! Rock-Paper-Scissors-Lizard-Spock against a random bot.
//!
//! The rules, the bot and the match bookkeeping live here so that the
//! raylib window and the terminal front-end share them.

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod opponent;
pub mod rules;

pub use crate::{
    action::Action,
    board::Board,
    config::Config,
    error::GameError,
    game::{MatchController, MatchState, Round, Side},
    opponent::{Opponent, RandomOpponent},
    rules::{resolve, Choice, RoundResult},
};

//! Display strings for whichever front-end is drawing the match.

use crate::{
    game::{MatchState, Round, Side},
    rules::{Choice, RoundResult},
};

pub const PROMPT: &str = "Choose a shape:";

pub fn verdict(result: RoundResult) -> &'static str {
    match result {
        RoundResult::FirstWins => "Player wins",
        RoundResult::SecondWins => "Bot wins",
        RoundResult::Draw => "Draw.",
    }
}

pub fn conclusion(winner: Side) -> String {
    let msg = match winner {
        Side::Player => "You won",
        Side::Opponent => "U suck - Bot won",
    };
    format!("{} (Scores reset.)", msg)
}

pub fn detail(player: &str, opponent: &str) -> String {
    format!("You {}  vs  {} Bot", player, opponent)
}

/// The texts a front-end shows, kept in sync with the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub caption: String,
    pub detail: String,
    pub player_score: String,
    pub opponent_score: String,
    pub target: String,
    glyph: fn(Choice) -> &'static str,
}

impl Board {
    /// `glyph` decides how a shape is written on the detail line.
    pub fn new(state: &MatchState, glyph: fn(Choice) -> &'static str) -> Board {
        let mut board = Board {
            caption: String::new(),
            detail: String::new(),
            player_score: String::new(),
            opponent_score: String::new(),
            target: state.target().to_string(),
            glyph,
        };
        board.reset(state);
        board
    }

    pub fn show_round(&mut self, round: &Round, state: &MatchState) {
        self.caption = round.message.clone();
        self.detail = match round.concluded {
            Some(_) => String::new(),
            None => detail((self.glyph)(round.player), (self.glyph)(round.opponent)),
        };
        self.show_scores(state);
    }

    pub fn reset(&mut self, state: &MatchState) {
        self.caption = PROMPT.to_string();
        self.detail.clear();
        self.show_scores(state);
    }

    fn show_scores(&mut self, state: &MatchState) {
        let (player, opponent) = state.scores();
        self.player_score = player.to_string();
        self.opponent_score = opponent.to_string();
    }
}

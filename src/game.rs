use crate::{
    board,
    error::GameError,
    opponent::Opponent,
    rules::{resolve, Choice, RoundResult},
};

pub const DEFAULT_TARGET: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    player_score: u32,
    opponent_score: u32,
    target: u32,
}

impl MatchState {
    pub fn new(target: u32) -> Result<Self, GameError> {
        if target == 0 {
            return Err(GameError::ZeroTarget);
        }
        Ok(MatchState {
            player_score: 0,
            opponent_score: 0,
            target,
        })
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.player_score, self.opponent_score)
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::FirstWins => self.player_score += 1,
            RoundResult::SecondWins => self.opponent_score += 1,
            RoundResult::Draw => (),
        }
    }

    /// Winner once either side has hit the target.
    fn leader_at_target(&self) -> Option<Side> {
        if self.player_score < self.target && self.opponent_score < self.target {
            return None;
        }
        if self.player_score > self.opponent_score {
            Some(Side::Player)
        } else {
            Some(Side::Opponent)
        }
    }

    fn clear(&mut self) {
        self.player_score = 0;
        self.opponent_score = 0;
    }
}

/// One resolved exchange, as seen by whoever draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub player: Choice,
    pub opponent: Choice,
    pub result: RoundResult,
    /// Set when this round finished the match. Scores are already zeroed.
    pub concluded: Option<Side>,
    pub message: String,
}

pub struct MatchController<O: Opponent> {
    state: MatchState,
    opponent: O,
}

impl<O: Opponent> MatchController<O> {
    pub fn new(target: u32, opponent: O) -> Result<Self, GameError> {
        Ok(MatchController {
            state: MatchState::new(target)?,
            opponent,
        })
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn play_round(&mut self, player: Choice) -> Round {
        let opponent = self.opponent.choose();
        let result = resolve(player, opponent);
        self.state.record(result);
        log::debug!(
            "{} vs {} -> {:?}, score {:?}",
            player,
            opponent,
            result,
            self.state.scores()
        );

        let concluded = self.state.leader_at_target();
        let message = match concluded {
            Some(winner) => {
                log::info!(
                    "match over, {:?} won {:?}",
                    winner,
                    self.state.scores()
                );
                self.state.clear();
                board::conclusion(winner)
            }
            None => board::verdict(result).to_string(),
        };

        Round {
            player,
            opponent,
            result,
            concluded,
            message,
        }
    }

    pub fn reset_match(&mut self) {
        log::info!("match reset at {:?}", self.state.scores());
        self.state.clear();
    }
}

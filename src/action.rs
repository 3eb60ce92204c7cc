use crate::{error::GameError, rules::Choice};
use std::str::FromStr;

/// Something the user asked for, decoded from a button tag or a typed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pick(Choice),
    Reset,
    Quit,
}

impl FromStr for Action {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        if let Some(choice) = Choice::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(&tag))
        {
            return Ok(Action::Pick(*choice));
        }

        match &*tag {
            "reset" => Ok(Action::Reset),
            "quit" | "exit" => Ok(Action::Quit),
            digit => match digit.parse::<usize>() {
                Ok(n) if (1..=Choice::ALL.len()).contains(&n) => {
                    Ok(Action::Pick(Choice::ALL[n - 1]))
                }
                _ => Err(GameError::UnknownAction(s.trim().to_string())),
            },
        }
    }
}

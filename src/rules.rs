use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
    Spock,
    Lizard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    FirstWins,
    SecondWins,
    Draw,
}

impl Choice {
    pub const ALL: [Choice; 5] = [
        Choice::Rock,
        Choice::Paper,
        Choice::Scissors,
        Choice::Spock,
        Choice::Lizard,
    ];

    /// The two shapes this one defeats.
    pub fn victims(self) -> [Choice; 2] {
        match self {
            Choice::Rock => [Choice::Scissors, Choice::Lizard],
            Choice::Paper => [Choice::Rock, Choice::Spock],
            Choice::Scissors => [Choice::Paper, Choice::Lizard],
            Choice::Lizard => [Choice::Spock, Choice::Paper],
            Choice::Spock => [Choice::Scissors, Choice::Rock],
        }
    }

    pub fn beats(self, other: Choice) -> bool {
        self.victims().contains(&other)
    }

    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
            Choice::Spock => "Spock",
            Choice::Lizard => "Lizard",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Choice::Rock => "🪨",
            Choice::Paper => "📄",
            Choice::Scissors => "✂️",
            Choice::Spock => "🖖",
            Choice::Lizard => "🦎",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of `first` played against `second`.
pub fn resolve(first: Choice, second: Choice) -> RoundResult {
    if first == second {
        RoundResult::Draw
    } else if first.beats(second) {
        RoundResult::FirstWins
    } else {
        RoundResult::SecondWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_shape_is_a_draw() {
        for c in Choice::ALL {
            assert_eq!(resolve(c, c), RoundResult::Draw);
        }
    }

    #[test]
    fn test_exactly_one_side_wins() {
        for a in Choice::ALL {
            for b in Choice::ALL {
                if a == b {
                    continue;
                }
                let forward = resolve(a, b) == RoundResult::FirstWins;
                let backward = resolve(b, a) == RoundResult::FirstWins;
                assert!(forward ^ backward, "{} vs {}", a, b);
                assert_ne!(resolve(a, b), RoundResult::Draw);
            }
        }
    }

    #[test]
    fn test_each_shape_wins_twice_and_loses_twice() {
        for a in Choice::ALL {
            let wins = Choice::ALL
                .iter()
                .filter(|&&b| resolve(a, b) == RoundResult::FirstWins)
                .count();
            let losses = Choice::ALL
                .iter()
                .filter(|&&b| resolve(a, b) == RoundResult::SecondWins)
                .count();
            assert_eq!((wins, losses), (2, 2), "{}", a);
        }
    }

    #[test]
    fn test_known_matchups() {
        assert_eq!(
            resolve(Choice::Rock, Choice::Scissors),
            RoundResult::FirstWins
        );
        assert_eq!(resolve(Choice::Rock, Choice::Paper), RoundResult::SecondWins);
        assert_eq!(resolve(Choice::Spock, Choice::Rock), RoundResult::FirstWins);
        assert_eq!(
            resolve(Choice::Lizard, Choice::Spock),
            RoundResult::FirstWins
        );
        assert_eq!(resolve(Choice::Paper, Choice::Paper), RoundResult::Draw);
    }

    #[test]
    fn test_beats_relation_has_ten_pairs() {
        let pairs = Choice::ALL
            .iter()
            .flat_map(|&a| Choice::ALL.iter().map(move |&b| (a, b)))
            .filter(|&(a, b)| a.beats(b))
            .count();
        assert_eq!(pairs, 10);
        assert!(!Choice::Rock.beats(Choice::Rock));
    }
}

use crate::game::DEFAULT_TARGET;
use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(about = "Rock-Paper-Scissors-Lizard-Spock against a random bot")]
pub struct Config {
    /// Points needed to take a match.
    #[arg(long, default_value_t = DEFAULT_TARGET, value_parser = clap::value_parser!(u32).range(1..))]
    pub target: u32,
    /// Seed the bot for a repeatable game.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["rpsls"]).unwrap();
        assert_eq!(
            config,
            Config {
                target: 3,
                seed: None
            }
        );
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from(["rpsls", "--target", "5", "--seed", "9"]).unwrap();
        assert_eq!(config.target, 5);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_zero_target_rejected() {
        assert!(Config::try_parse_from(["rpsls", "--target", "0"]).is_err());
    }
}

//! Choice resolution rules
//!
//! The beats relation is built once at startup and never mutated, so it can
//! be shared freely across request handlers without synchronization.

use std::collections::HashMap;

use shared::{Choice, Outcome};

/// Immutable beats table: each choice defeats exactly two others.
#[derive(Debug, Clone)]
pub struct RuleSet {
    beats: HashMap<Choice, [Choice; 2]>,
}

impl RuleSet {
    /// The standard rock-paper-scissors-lizard-spock relation
    pub fn standard() -> Self {
        let beats = HashMap::from([
            (Choice::Rock, [Choice::Scissors, Choice::Lizard]),
            (Choice::Paper, [Choice::Rock, Choice::Spock]),
            (Choice::Scissors, [Choice::Paper, Choice::Lizard]),
            (Choice::Lizard, [Choice::Paper, Choice::Spock]),
            (Choice::Spock, [Choice::Rock, Choice::Scissors]),
        ]);
        RuleSet { beats }
    }

    /// Whether `winner` defeats `loser`
    pub fn beats(&self, winner: Choice, loser: Choice) -> bool {
        self.beats
            .get(&winner)
            .is_some_and(|defeated| defeated.contains(&loser))
    }

    /// Resolve a round from the player's perspective.
    ///
    /// Equal choices tie; otherwise the beats relation covers every remaining
    /// pair in exactly one direction, so the else branch is the computer win.
    pub fn resolve(&self, player: Choice, computer: Choice) -> Outcome {
        if player == computer {
            Outcome::Tie
        } else if self.beats(player, computer) {
            Outcome::PlayerWins
        } else {
            Outcome::ComputerWins
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_choice_ties_with_itself() {
        let rules = RuleSet::standard();
        for choice in Choice::ALL {
            assert_eq!(rules.resolve(choice, choice), Outcome::Tie);
        }
    }

    #[test]
    fn every_choice_defeats_exactly_two() {
        let rules = RuleSet::standard();
        for choice in Choice::ALL {
            let defeated: Vec<_> = Choice::ALL
                .into_iter()
                .filter(|&other| rules.beats(choice, other))
                .collect();
            assert_eq!(defeated.len(), 2, "{choice} must defeat exactly two");
            assert!(!defeated.contains(&choice), "{choice} must not defeat itself");
        }
    }

    #[test]
    fn relation_covers_all_pairs_antisymmetrically() {
        // Every unordered pair of distinct choices must have exactly one
        // directional edge: never both, never neither.
        let rules = RuleSet::standard();
        for a in Choice::ALL {
            for b in Choice::ALL {
                if a == b {
                    continue;
                }
                let forward = rules.beats(a, b);
                let backward = rules.beats(b, a);
                assert!(
                    forward ^ backward,
                    "pair ({a}, {b}) has {} edges, expected exactly one",
                    forward as u8 + backward as u8
                );
            }
        }
    }

    #[test]
    fn exactly_one_direction_wins_for_distinct_pairs() {
        let rules = RuleSet::standard();
        for a in Choice::ALL {
            for b in Choice::ALL {
                if a == b {
                    continue;
                }
                let first = rules.resolve(a, b);
                let second = rules.resolve(b, a);
                assert_ne!(first, Outcome::Tie);
                assert_ne!(second, Outcome::Tie);
                assert_eq!(
                    first == Outcome::PlayerWins,
                    second == Outcome::ComputerWins,
                    "resolve({a}, {b}) and resolve({b}, {a}) disagree"
                );
            }
        }
    }

    #[test]
    fn known_defeats_hold() {
        let rules = RuleSet::standard();
        assert_eq!(rules.resolve(Choice::Rock, Choice::Scissors), Outcome::PlayerWins);
        assert_eq!(rules.resolve(Choice::Rock, Choice::Lizard), Outcome::PlayerWins);
        assert_eq!(rules.resolve(Choice::Paper, Choice::Rock), Outcome::PlayerWins);
        assert_eq!(rules.resolve(Choice::Paper, Choice::Spock), Outcome::PlayerWins);
        assert_eq!(rules.resolve(Choice::Scissors, Choice::Paper), Outcome::PlayerWins);
        assert_eq!(rules.resolve(Choice::Scissors, Choice::Lizard), Outcome::PlayerWins);
        assert_eq!(rules.resolve(Choice::Lizard, Choice::Paper), Outcome::PlayerWins);
        assert_eq!(rules.resolve(Choice::Lizard, Choice::Spock), Outcome::PlayerWins);
        assert_eq!(rules.resolve(Choice::Spock, Choice::Rock), Outcome::PlayerWins);
        assert_eq!(rules.resolve(Choice::Spock, Choice::Scissors), Outcome::PlayerWins);
        assert_eq!(rules.resolve(Choice::Rock, Choice::Paper), Outcome::ComputerWins);
        assert_eq!(rules.resolve(Choice::Spock, Choice::Lizard), Outcome::ComputerWins);
    }
}

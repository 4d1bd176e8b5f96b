//! Decorative fun facts attached to play responses
//!
//! The corpus is built once at startup and shared immutably. Win facts are
//! keyed by (winner, loser), so a computer win looks up the computer's
//! choice first. A pair missing from the table falls back to the generic
//! pool rather than failing the round.

use std::collections::HashMap;

use rand::seq::SliceRandom;

use shared::{Choice, Outcome};

/// Immutable fun-fact corpus
#[derive(Debug, Clone)]
pub struct FactCorpus {
    win_facts: HashMap<(Choice, Choice), &'static str>,
    tie_facts: Vec<&'static str>,
    general_facts: Vec<&'static str>,
}

impl FactCorpus {
    pub fn standard() -> Self {
        let win_facts = HashMap::from([
            (
                (Choice::Rock, Choice::Scissors),
                "Rock crushes scissors... sharp edges beware!",
            ),
            (
                (Choice::Rock, Choice::Lizard),
                "Rock crushes lizard... ouch, flat as a pancake!",
            ),
            (
                (Choice::Paper, Choice::Rock),
                "Paper covers rock... simple yet effective!",
            ),
            (
                (Choice::Paper, Choice::Spock),
                "Paper disproves Spock... logic can't beat bureaucracy!",
            ),
            (
                (Choice::Scissors, Choice::Paper),
                "Scissors cuts paper... snip snip!",
            ),
            (
                (Choice::Scissors, Choice::Lizard),
                "Scissors decapitates lizard... ouch!",
            ),
            (
                (Choice::Lizard, Choice::Paper),
                "Lizard eats paper... nom nom nom!",
            ),
            (
                (Choice::Lizard, Choice::Spock),
                "Lizard poisons Spock... live long and prosper? Not today!",
            ),
            (
                (Choice::Spock, Choice::Rock),
                "Spock vaporizes rock... poof, it's gone!",
            ),
            (
                (Choice::Spock, Choice::Scissors),
                "Spock smashes scissors... Vulcan strength wins!",
            ),
        ]);

        let tie_facts = vec![
            "It's a tie! Even the universe can't decide!",
            "A draw! The cosmos is in balance!",
        ];

        let general_facts = vec![
            "Rock, Paper, Scissors, Lizard, Spock: The ultimate test of strategy!",
            "Did you know? This game was popularized by The Big Bang Theory!",
        ];

        FactCorpus {
            win_facts,
            tie_facts,
            general_facts,
        }
    }

    /// Pick a fact for a resolved round
    pub fn pick(&self, player: Choice, computer: Choice, outcome: Outcome) -> String {
        let key = match outcome {
            Outcome::Tie => return self.random_from(&self.tie_facts),
            Outcome::PlayerWins => (player, computer),
            Outcome::ComputerWins => (computer, player),
        };

        match self.win_facts.get(&key) {
            Some(fact) => (*fact).to_string(),
            None => self.random_from(&self.general_facts),
        }
    }

    fn random_from(&self, pool: &[&'static str]) -> String {
        pool.choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("The game goes on!")
            .to_string()
    }
}

impl Default for FactCorpus {
    fn default() -> Self {
        FactCorpus::standard()
    }
}

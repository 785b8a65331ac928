//! How to register your AI
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add a new `AiFactory` entry to the static list with stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ai::{AiPlayer, Autopilot, Heuristic, RandomPlayer, Strategic};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: Autopilot::NAME,
        version: Autopilot::VERSION,
        make: make_autopilot,
    },
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
    AiFactory {
        name: Strategic::NAME,
        version: Strategic::VERSION,
        make: make_strategic,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

/// Named difficulty levels offered to players picking an opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Registry name of the AI behind this level.
    pub const fn ai_name(self) -> &'static str {
        match self {
            Difficulty::Easy => RandomPlayer::NAME,
            Difficulty::Medium => Heuristic::NAME,
            Difficulty::Hard => Strategic::NAME,
        }
    }

    pub fn factory(self) -> Option<&'static AiFactory> {
        by_name(self.ai_name())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown difficulty '{s}', expected easy|medium|hard"))
    }
}

fn make_autopilot(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(Autopilot::new(seed))
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(RandomPlayer::new(seed))
}

fn make_heuristic(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(Heuristic::new(seed))
}

fn make_strategic(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(Strategic::new(seed))
}

//! Stage — the forward-only growth state machine

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Egg,
    Child,
    Teen,
    Adult,
    Elderly,
}

impl Stage {
    /// Next stage and the level required to reach it
    pub fn next(self) -> Option<(Stage, u32)> {
        match self {
            Stage::Egg => Some((Stage::Child, 3)),
            Stage::Child => Some((Stage::Teen, 10)),
            Stage::Teen => Some((Stage::Adult, 25)),
            Stage::Adult => Some((Stage::Elderly, 50)),
            Stage::Elderly => None,
        }
    }

    /// Stage implied by a level alone
    pub fn for_level(level: u32) -> Stage {
        let mut stage = Stage::Egg;
        while let Some((next, required)) = stage.next() {
            if level < required {
                break;
            }
            stage = next;
        }
        stage
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Egg => "egg",
            Stage::Child => "child",
            Stage::Teen => "teen",
            Stage::Adult => "adult",
            Stage::Elderly => "elderly",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! PGN-style tag pairs describing a game.

use std::collections::BTreeMap;

use chrono::Local;

use crate::config::EngineConfig;
use crate::game_state::chess_types::Color;
use crate::game_state::game_snapshot::Resolution;

pub const TAG_EVENT: &str = "Event";
pub const TAG_SITE: &str = "Site";
pub const TAG_DATE: &str = "Date";
pub const TAG_WHITE: &str = "White";
pub const TAG_BLACK: &str = "Black";
pub const TAG_RESULT: &str = "Result";
pub const TAG_TERMINATION: &str = "Termination";

pub const RESULT_ONGOING: &str = "*";
pub const RESULT_WHITE_WINS: &str = "1-0";
pub const RESULT_BLACK_WINS: &str = "0-1";
pub const RESULT_DRAW: &str = "1/2-1/2";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameMetaInfo {
    tags: BTreeMap<String, String>,
}

impl GameMetaInfo {
    /// Tags for a game starting now.
    pub fn new_game(config: &EngineConfig) -> Self {
        Self::default()
            .with_tag(TAG_EVENT, &config.event)
            .with_tag(TAG_SITE, &config.site)
            .with_tag(TAG_DATE, &Local::now().format("%Y.%m.%d").to_string())
            .with_tag(TAG_WHITE, &config.white)
            .with_tag(TAG_BLACK, &config.black)
            .with_tag(TAG_RESULT, RESULT_ONGOING)
    }

    #[must_use]
    pub fn with_tag(mut self, name: &str, value: &str) -> Self {
        self.tags.insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn result(&self) -> &str {
        self.get(TAG_RESULT).unwrap_or(RESULT_ONGOING)
    }

    /// Result and Termination matching `resolution`. `mover` is the side that
    /// played the final move. An in-progress game gets `*` and no Termination.
    #[must_use]
    pub fn with_resolution(self, resolution: Resolution, mover: Color) -> Self {
        let (result, termination) = match resolution {
            Resolution::InProgress => return self.without_resolution(),
            Resolution::Checkmate => (
                match mover {
                    Color::White => RESULT_WHITE_WINS,
                    Color::Black => RESULT_BLACK_WINS,
                },
                "checkmate",
            ),
            Resolution::Stalemate => (RESULT_DRAW, "stalemate"),
            Resolution::DrawByRepetition => (RESULT_DRAW, "threefold repetition"),
            Resolution::InsufficientMaterial => (RESULT_DRAW, "insufficient material"),
        };
        self.with_tag(TAG_RESULT, result)
            .with_tag(TAG_TERMINATION, termination)
    }

    /// Result reset to `*` and Termination removed.
    #[must_use]
    pub fn without_resolution(mut self) -> Self {
        self.tags.remove(TAG_TERMINATION);
        self.with_tag(TAG_RESULT, RESULT_ONGOING)
    }
}

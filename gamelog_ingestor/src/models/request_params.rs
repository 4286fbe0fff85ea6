use serde::{Deserialize, Serialize};

use crate::models::season::{SeasonType, season_label};

/// Parameters for one game-log fetch: a single (season, season type) slice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLogRequest {
    /// Season start year, e.g. `2010`.
    pub year: i32,

    /// Season label sent to the API, e.g. `"2010-11"`.
    pub season: String,

    pub season_type: SeasonType,
}

impl GameLogRequest {
    pub fn new(year: i32, season_type: SeasonType) -> Self {
        Self {
            year,
            season: season_label(year),
            season_type,
        }
    }
}

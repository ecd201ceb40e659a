/// The identifiers that pick out one team in one league season.
///
/// These are opaque to the scraper; they are only ever formatted back into
/// page URLs.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "derive-serde", derive(Serialize, Deserialize))]
pub struct LeagueParams {
    pub league_id: String,
    pub team_id: String,
    pub season_id: String
}

impl LeagueParams {
    pub fn new<L, T, S>(league_id: L, team_id: T, season_id: S) -> Self
        where L: ToString,
              T: ToString,
              S: ToString {

        LeagueParams {
            league_id: league_id.to_string(),
            team_id: team_id.to_string(),
            season_id: season_id.to_string()
        }
    }
}

/// Who a player is, as read from the compact info cell of a player row.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "derive-serde", derive(Serialize, Deserialize))]
pub struct PlayerIdentity {
    pub name: String,

    /// `None` for team defense / special teams units.
    pub team: Option<String>,

    pub pos: String,

    /// Injury / availability designation, `"OK"` when the site shows none.
    pub status: String
}

/// The weekly statistic columns shared by the roster and free agent tables.
///
/// Every value is the cell's text as shown on the site; nothing is converted.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "derive-serde", derive(Serialize, Deserialize))]
pub struct WeeklyStats {
    /// Opponent this week.
    pub opp: String,
    /// Game status / kickoff time.
    pub status_et: String,
    /// Position rank.
    pub prk: String,
    pub pts: String,
    pub avg: String,
    /// Points last week.
    pub last: String,
    pub proj: String,
    /// Opponent rank against the position.
    pub oprk: String,
    pub pct_st: String,
    pub pct_own: String,
    pub plus_minus: String
}

/// A player on the roster page of your team.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "derive-serde", derive(Serialize, Deserialize))]
pub struct RosterPlayer {
    pub identity: PlayerIdentity,

    /// The lineup slot the player occupies (`QB`, `RB`, `Bench`...).
    pub slot: String,

    pub stats: WeeklyStats
}

/// A player from the free agent listing.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "derive-serde", derive(Serialize, Deserialize))]
pub struct FreeAgentPlayer {
    pub identity: PlayerIdentity,
    pub stats: WeeklyStats
}

//! Handles extraction of your team's players from the roster ("clubhouse") page.

use super::{load_layout, player_rows, StatColumns};
use crate::data_structs::RosterPlayer;
use crate::error::*;
use scraper::Html;

const ROSTER_LAYOUT_STR: &str = include_str!("../../selectors/roster.toml");

#[derive(Debug, Deserialize)]
struct RosterColumns {
    slot: usize,
    identity: usize,
    stats: StatColumns
}

/// Handles extraction of players from the roster page.
///
/// You can either provide your own HTML string (see the `From<String>` impl)
/// or use `http_client::TeamClient::get_team`.
pub struct RosterScraper {
    doc: Html
}

impl From<String> for RosterScraper {
    fn from(html: String) -> Self {
        RosterScraper {
            doc: Html::parse_document(&html)
        }
    }
}

impl RosterScraper {
    /// Every player on the roster, in the order the page lists them.
    pub fn players(&self) -> Result<Vec<RosterPlayer>> {
        let layout = load_layout::<RosterColumns>(ROSTER_LAYOUT_STR);
        let cols = &layout.columns;
        let mut players = vec![];

        for (identity, row) in player_rows(&self.doc, &layout, cols.identity)? {
            players.push(RosterPlayer {
                identity,
                slot: row.cell(cols.slot)?,
                stats: row.stats(&cols.stats)?
            });
        }

        debug!("Parsed {} players from the roster page", players.len());
        Ok(players)
    }
}

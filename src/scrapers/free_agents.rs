//! Handles extraction of players from the free agency page, and stitching the
//! paginated listing back together.

use super::{load_layout, player_rows, StatColumns};
use crate::data_structs::FreeAgentPlayer;
use crate::error::*;
use scraper::Html;

const FREE_AGENTS_LAYOUT_STR: &str = include_str!("../../selectors/free_agents.toml");

#[derive(Debug, Deserialize)]
struct FreeAgentColumns {
    identity: usize,
    status: usize,
    stats: StatColumns
}

/// Handles extraction of players from one page of the free agent listing.
///
/// You can either provide your own HTML string (see the `From<String>` impl)
/// or use `http_client::TeamClient::get_players`.
pub struct FreeAgentScraper {
    doc: Html
}

impl From<String> for FreeAgentScraper {
    fn from(html: String) -> Self {
        FreeAgentScraper {
            doc: Html::parse_document(&html)
        }
    }
}

impl FreeAgentScraper {
    /// Every player on this page, in the order the page lists them.
    pub fn players(&self) -> Result<Vec<FreeAgentPlayer>> {
        let layout = load_layout::<FreeAgentColumns>(FREE_AGENTS_LAYOUT_STR);
        let cols = &layout.columns;
        let mut players = vec![];

        for (mut identity, row) in player_rows(&self.doc, &layout, cols.identity)? {
            // The listing has its own status column which wins over the one
            // in the info cell, unless it is blank
            let status = row.cell(cols.status)?;
            if !status.is_empty() {
                identity.status = status;
            }

            players.push(FreeAgentPlayer {
                identity,
                stats: row.stats(&cols.stats)?
            });
        }

        Ok(players)
    }
}

/// Fetches the free agent listing page by page, starting at offset 0 and
/// stepping by `page_size`, and concatenates the results in page order.
///
/// `fetch_page` is given the offset of the first player on the page it should
/// return. Paging stops at the first empty page, when a page repeats the one
/// before it (the site ignoring the offset), or after `max_pages` pages. Pages
/// can hold placeholder rows, so a page with fewer than `page_size` players is
/// not taken to be the last one.
pub fn collect_pages<F>(page_size: u32, max_pages: u32, mut fetch_page: F) -> Result<Vec<FreeAgentPlayer>>
    where F: FnMut(u32) -> Result<Vec<FreeAgentPlayer>> {

    let mut players = vec![];
    let mut previous: Option<Vec<FreeAgentPlayer>> = None;

    for page_num in 0..max_pages {
        let offset = page_num * page_size;
        info!("Grabbing free agent page at offset {}", offset);

        let page = fetch_page(offset)?;
        debug!("Page at offset {} held {} players", offset, page.len());

        if page.is_empty() {
            break;
        }

        if previous.as_ref() == Some(&page) {
            warn!("Page at offset {} repeats the previous page; stopping", offset);
            break;
        }

        players.extend_from_slice(&page);
        previous = Some(page);
    }

    Ok(players)
}

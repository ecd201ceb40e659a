//! Various modules for getting player data from the site's HTML.

pub mod free_agents;
pub mod identity;
pub mod roster;

use crate::data_structs::{PlayerIdentity, WeeklyStats};
use crate::error::*;
use scraper::{ElementRef, Html, Selector};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

fn sel<S: AsRef<str>>(sel: S) -> Selector {
    Selector::parse(sel.as_ref()).unwrap()
}

/// Where each weekly statistic lives in a player row.
#[derive(Debug, Deserialize)]
pub(crate) struct StatColumns {
    opp: usize,
    status_et: usize,
    prk: usize,
    pts: usize,
    avg: usize,
    last: usize,
    proj: usize,
    oprk: usize,
    pct_st: usize,
    pct_own: usize,
    plus_minus: usize
}

#[derive(Deserialize)]
struct RawLayout<C> {
    selectors: HashMap<String, String>,
    columns: C
}

/// The selectors and column indices for one kind of player table.
pub(crate) struct TableLayout<C> {
    selectors: HashMap<String, Selector>,
    pub columns: C
}

/// Loads a table layout from one of the TOML files under `selectors/`.
///
/// The files are compiled into the crate, so a malformed one is a bug here and
/// not something a caller can recover from.
pub(crate) fn load_layout<C: DeserializeOwned>(toml_str: &str) -> TableLayout<C> {
    let raw: RawLayout<C> = toml::from_str(toml_str).unwrap();

    TableLayout {
        selectors: raw.selectors.iter().map(|(k, v)| (k.clone(), sel(v))).collect(),
        columns: raw.columns
    }
}

/// The trimmed text of every cell in a single player row.
pub(crate) struct PlayerRow {
    cells: Vec<String>
}

impl PlayerRow {
    fn from_elem(row: ElementRef, cell_sel: &Selector) -> Self {
        PlayerRow {
            cells: row.select(cell_sel)
                      .map(|cell| cell.text().collect::<String>().trim().into())
                      .collect()
        }
    }

    /// Text of the cell at `idx`; a row that is too short to have it is not
    /// a row we understand.
    pub fn cell(&self, idx: usize) -> Result<String> {
        match self.cells.get(idx) {
            Some(text) => Ok(text.clone()),
            None => bail!(ErrorKind::UnparseablePlayerRow(self.cells.join(" | ")))
        }
    }

    pub fn stats(&self, cols: &StatColumns) -> Result<WeeklyStats> {
        Ok(WeeklyStats {
            opp: self.cell(cols.opp)?,
            status_et: self.cell(cols.status_et)?,
            prk: self.cell(cols.prk)?,
            pts: self.cell(cols.pts)?,
            avg: self.cell(cols.avg)?,
            last: self.cell(cols.last)?,
            proj: self.cell(cols.proj)?,
            oprk: self.cell(cols.oprk)?,
            pct_st: self.cell(cols.pct_st)?,
            pct_own: self.cell(cols.pct_own)?,
            plus_minus: self.cell(cols.plus_minus)?
        })
    }
}

/// Walks every player row of the document in order, pairing each row with the
/// identity parsed out of its `identity_col` cell.
///
/// Rows with no identity cell, or a blank one, are placeholders (empty lineup
/// slots and the like) and are skipped.
pub(crate) fn player_rows<C>(doc: &Html, layout: &TableLayout<C>, identity_col: usize)
    -> Result<Vec<(PlayerIdentity, PlayerRow)>> {

    let mut rows = vec![];

    for elem in doc.select(&layout.selectors["player_row"]) {
        let row = PlayerRow::from_elem(elem, &layout.selectors["cell"]);

        let identity = match row.cells.get(identity_col) {
            Some(info) if !info.is_empty() => identity::parse_identity(info)?,
            _ => {
                debug!("Skipping player row without identity text: {:?}", row.cells);
                continue;
            }
        };

        rows.push((identity, row));
    }

    Ok(rows)
}

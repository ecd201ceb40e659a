//! Splits the compact player info cell into name, team, position and status.
//!
//! The site writes skill players as `"Name, TEAM POS [STATUS]"` and team
//! defense / special teams units as `"Team Name POS"` with no comma.

use crate::data_structs::PlayerIdentity;
use crate::error::*;

const DEFAULT_STATUS: &str = "OK";

pub fn parse_identity(text: &str) -> Result<PlayerIdentity> {
    let unparseable = || Error::from(ErrorKind::UnparseablePlayerRow(text.into()));

    if text.contains(',') {
        let mut halves = text.splitn(2, ", ");
        let name = halves.next().ok_or_else(unparseable)?.trim();
        let remainder = halves.next().ok_or_else(unparseable)?;
        let mut pieces = remainder.split_whitespace();

        let team = pieces.next().ok_or_else(unparseable)?;
        let pos = pieces.next().ok_or_else(unparseable)?;
        let status = pieces.next().unwrap_or(DEFAULT_STATUS);

        if name.is_empty() {
            return Err(unparseable());
        }

        return Ok(PlayerIdentity {
            name: name.into(),
            team: Some(team.into()),
            pos: pos.into(),
            status: status.into()
        });
    }

    // D/ST
    let pieces: Vec<&str> = text.split_whitespace().collect();

    match pieces.split_last() {
        Some((pos, name)) if !name.is_empty() => Ok(PlayerIdentity {
            name: name.join(" "),
            team: None,
            pos: (*pos).into(),
            status: DEFAULT_STATUS.into()
        }),
        _ => Err(unparseable())
    }
}

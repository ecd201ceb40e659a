//! The pages this crate knows how to reach, and how to get back from a page URL
//! to the identifiers it was built from.

use crate::data_structs::LeagueParams;
use crate::error::*;
use once_cell::sync::Lazy;
use regex::Regex;

pub const SITE_BASE_URL: &str = "http://games.espn.go.com";
pub const LOGIN_URL_GET: &str = "http://games.espn.go.com/frontpage/football";
pub const LOGIN_URL_POST: &str =
    "https://registerdisney.go.com/jgc/v2/client/ESPN-FANTASYLM-PROD/guest/login?langPref=en-US";

static PAGE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^http://games\.espn\.go\.com/ffl/(clubhouse|freeagency)\?leagueId=(\d+)&teamId=(\d+)&seasonId=(\d+)")
        .unwrap()
});

/// The roster ("clubhouse") page of the given team.
pub fn team_url(base: &str, params: &LeagueParams) -> String {
    format!("{}/ffl/clubhouse?leagueId={}&teamId={}&seasonId={}",
            base,
            params.league_id,
            params.team_id,
            params.season_id)
}

/// One page of the free agent listing, starting at player `offset`.
pub fn players_url(base: &str, params: &LeagueParams, offset: u32) -> String {
    format!("{}/ffl/freeagency?leagueId={}&teamId={}&seasonId={}#&seasonId={}&context=freeagency&view=overview&startIndex={}",
            base,
            params.league_id,
            params.team_id,
            params.season_id,
            params.season_id,
            offset)
}

/// Pulls the league, team and season identifiers out of a roster or free
/// agency page URL, as copied from the browser's address bar.
pub fn parse_params_from_url(url: &str) -> Result<LeagueParams> {
    let caps = match PAGE_URL_RE.captures(url) {
        Some(caps) => caps,
        None => bail!(ErrorKind::InvalidUrl(url.into()))
    };

    Ok(LeagueParams {
        league_id: caps[2].to_string(),
        team_id: caps[3].to_string(),
        season_id: caps[4].to_string()
    })
}

extern crate espn_ffl_scraper;

// You may want your own error setup in your own code; here we just use the scraper's
// error types.
use espn_ffl_scraper::error::*;
use espn_ffl_scraper::{parse_params_from_url, TeamClient};
use std::env;

fn main() {
    env_logger::init();

    match actual_main() {
        Ok(()) => {},
        Err(e) => println!("\n{}\n", e)
    }
}

// Expects ESPN_TEAM_URL to be your team's clubhouse URL and ESPN_COOKIE the
// cookie header your browser sends to the site while logged in.
fn actual_main() -> Result<()> {
    let url = env::var("ESPN_TEAM_URL").chain_err(|| "ESPN_TEAM_URL is not set")?;
    let cookie = env::var("ESPN_COOKIE").chain_err(|| "ESPN_COOKIE is not set")?;

    let params = parse_params_from_url(&url)?;
    let mut client = TeamClient::from_params(params)?;
    client.set_cookie(cookie);

    // Get the data...
    let team = client.get_team()?;
    let free_agents = client.get_players()?;

    // ...use the data.
    println!();

    for player in &team {
        println!("{:>6}  {:<24} {:<4} {:<4} {:<4} proj {}",
            player.slot,
            player.identity.name,
            player.identity.team.as_ref().map(String::as_str).unwrap_or("-"),
            player.identity.pos,
            player.identity.status,
            player.stats.proj);
    }

    println!();

    if let Some(best) = free_agents.first() {
        println!("Top free agent out of {}: {} ({}), owned in {}% of leagues",
            free_agents.len(),
            best.identity.name,
            best.identity.pos,
            best.stats.pct_own);
    }

    println!();

    Ok(())
}

//! A session with the fantasy site, bound to one team in one league season.
//!
//! This module can be disabled by building this crate without default features.

use crate::data_structs::{FreeAgentPlayer, LeagueParams, RosterPlayer};
use crate::error::*;
use crate::scrapers::free_agents::{collect_pages, FreeAgentScraper};
use crate::scrapers::roster::RosterScraper;
use crate::urls;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::StatusCode;
use std::time::Duration;

/// Where the client talks to and how.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host the roster and free agency pages are served from.
    pub site_base_url: String,
    /// Unauthenticated page visited first during login.
    pub login_page_url: String,
    pub login_post_url: String,
    /// How many players the site lists per free agency page.
    pub page_size: u32,
    /// Upper bound on free agency pages fetched by one `get_players` call.
    pub max_pages: u32,
    pub timeout: Duration,
    pub user_agent: String
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            site_base_url: urls::SITE_BASE_URL.into(),
            login_page_url: urls::LOGIN_URL_GET.into(),
            login_post_url: urls::LOGIN_URL_POST.into(),
            page_size: 50,
            max_pages: 40,
            timeout: Duration::from_secs(30),
            user_agent: concat!("espn-ffl-scraper/", env!("CARGO_PKG_VERSION")).into()
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginPayload<'a> {
    login_value: &'a str,
    password: &'a str
}

/// A session bound to one team in one league season.
///
/// Not meant to be shared between threads; use one client per thread.
pub struct TeamClient {
    params: LeagueParams,
    client: Client,
    config: ClientConfig,
    cookie: Option<String>
}

impl TeamClient {
    /// Create a client for the given team with the default `ClientConfig`.
    #[inline]
    pub fn new<L, T, S>(league_id: L, team_id: T, season_id: S) -> Result<Self>
        where L: ToString,
              T: ToString,
              S: ToString {

        Self::from_params(LeagueParams::new(league_id, team_id, season_id))
    }

    /// Create a client for the team identified by `params`.
    #[inline]
    pub fn from_params(params: LeagueParams) -> Result<Self> {
        Self::with_config(params, ClientConfig::default())
    }

    /// Create a client with your own `ClientConfig`.
    pub fn with_config(params: LeagueParams, config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(params, config, client))
    }

    /// Provide your own reqwest client for use by this struct.
    ///
    /// Enable its cookie store if you want `login` to have any effect.
    #[inline]
    pub fn with_client(params: LeagueParams, config: ClientConfig, client: Client) -> Self {
        Self {
            params,
            client,
            config,
            cookie: None
        }
    }

    #[inline]
    pub fn params(&self) -> &LeagueParams {
        &self.params
    }

    /// Store the raw `Cookie` header value sent with every page request from
    /// now on.
    ///
    /// Nothing checks that the cookie is any good until a request fails. This
    /// is the dependable way to authenticate; see `login`.
    #[inline]
    pub fn set_cookie<C: Into<String>>(&mut self, cookie: C) {
        self.cookie = Some(cookie.into());
    }

    /// Log in with an ESPN account.
    ///
    /// Visits the landing page and then posts the credentials to the account
    /// service; any cookies handed back land in the session's cookie store.
    /// The site does not reliably accept the resulting session for the league
    /// pages, so prefer `set_cookie` with a cookie copied from a browser.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        info!("Logging in as {}", email);

        debug!("GET {}", self.config.login_page_url);
        self.client.get(&self.config.login_page_url).send()?;

        let body = serde_json::to_string(&LoginPayload {
            login_value: email,
            password
        })?;

        debug!("POST {}", self.config.login_post_url);
        let resp = self.client.post(&self.config.login_post_url)
            .header(CONTENT_TYPE, "application/json;charset=UTF-8")
            .body(body)
            .send()?;

        let status = resp.status();

        if status != StatusCode::OK {
            bail!(ErrorKind::LoginFailed(status.as_u16()));
        }

        Ok(())
    }

    /// Every player on the team's roster, in the order the site lists them.
    pub fn get_team(&self) -> Result<Vec<RosterPlayer>> {
        RosterScraper::from(self.get_team_html()?).players()
    }

    /// Every free agent in the league, fetched page by page.
    pub fn get_players(&self) -> Result<Vec<FreeAgentPlayer>> {
        collect_pages(self.config.page_size, self.config.max_pages, |offset| {
            FreeAgentScraper::from(self.get_players_html(offset)?).players()
        })
    }

    /// Raw HTML of the roster page. Helpful for debugging.
    pub fn get_team_html(&self) -> Result<String> {
        self.get_string(&urls::team_url(&self.config.site_base_url, &self.params))
    }

    /// Raw HTML of the free agency page starting at player `offset`.
    pub fn get_players_html(&self, offset: u32) -> Result<String> {
        self.get_string(&urls::players_url(&self.config.site_base_url, &self.params, offset))
    }

    fn authed_get(&self, url: &str) -> RequestBuilder {
        let req = self.client.get(url);

        match self.cookie {
            Some(ref cookie) => req.header(COOKIE, cookie.as_str()),
            None => {
                warn!("No cookie set; requesting {} without one", url);
                req
            }
        }
    }

    /// Helper to get the HTML of the given URL.
    fn get_string(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let resp = self.authed_get(url).send()?;
        let status = resp.status();

        if !status.is_success() {
            bail!(ErrorKind::NonSuccessStatus(status.as_u16()));
        }

        // Decodes with the charset the site declares
        Ok(resp.text()?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::{CannedResponse, TestServer};

    const TEST_DATA_ROSTER: &str = include_str!("../test_data/roster.html");
    const TEST_DATA_FREE_AGENTS: &str = include_str!("../test_data/free_agents.html");

    fn client_for(server: &TestServer) -> TeamClient {
        let config = ClientConfig {
            site_base_url: server.base_url(),
            login_page_url: format!("{}/frontpage/football", server.base_url()),
            login_post_url: format!("{}/guest/login", server.base_url()),
            timeout: Duration::from_secs(5),
            ..ClientConfig::default()
        };

        TeamClient::with_config(LeagueParams::new("123", "4", "2017"), config).unwrap()
    }

    #[test]
    fn login_failure_is_login_failed() {
        let server = TestServer::start(vec![
            CannedResponse::ok("<html></html>"),
            CannedResponse::status(401, "{\"error\":\"bad credentials\"}"),
        ]);
        let mut client = client_for(&server);

        match client.login("someone@example.com", "hunter2") {
            Err(Error(ErrorKind::LoginFailed(401), _)) => {},
            other => panic!("expected LoginFailed, got {:?}", other)
        }

        let requests = server.requests();

        assert_eq!(requests.len(), 2);
        assert!(requests[0].starts_with("GET /frontpage/football"));
        assert!(requests[1].starts_with("POST /guest/login"));
        assert!(requests[1].to_lowercase().contains("content-type: application/json;charset=utf-8"));
        assert!(requests[1].contains("{\"loginValue\":\"someone@example.com\",\"password\":\"hunter2\"}"));
    }

    #[test]
    fn login_success() {
        let server = TestServer::start(vec![
            CannedResponse::ok("<html></html>"),
            CannedResponse::ok("{}"),
        ]);
        let mut client = client_for(&server);

        assert!(client.login("someone@example.com", "hunter2").is_ok());
    }

    #[test]
    fn get_team_sends_cookie() {
        let server = TestServer::start(vec![CannedResponse::ok(TEST_DATA_ROSTER)]);
        let mut client = client_for(&server);
        client.set_cookie("espn_s2=abc; SWID={123}");

        let players = client.get_team().unwrap();

        assert_eq!(players.len(), 4);

        let requests = server.requests();

        assert!(requests[0].starts_with("GET /ffl/clubhouse?leagueId=123&teamId=4&seasonId=2017 "));
        assert!(requests[0].to_lowercase().contains("cookie: espn_s2=abc; swid={123}"));
    }

    #[test]
    fn latin1_page_is_decoded() {
        let html = TEST_DATA_ROSTER.replace("Tom Brady", "Tom Br\u{e9}dy");
        let body: Vec<u8> = html.chars().map(|c| c as u32 as u8).collect();
        let server = TestServer::start(vec![
            CannedResponse::encoded("text/html; charset=iso-8859-1", body),
        ]);
        let mut client = client_for(&server);
        client.set_cookie("espn_s2=abc");

        let players = client.get_team().unwrap();

        assert_eq!(players[0].identity.name, "Tom Br\u{e9}dy");
    }

    #[test]
    fn get_players_stops_when_site_ignores_offset() {
        // The offset sits in the URL fragment, which never reaches the server,
        // so the site answers every page request with the first page
        let server = TestServer::start(vec![
            CannedResponse::ok(TEST_DATA_FREE_AGENTS),
            CannedResponse::ok(TEST_DATA_FREE_AGENTS),
        ]);
        let mut client = client_for(&server);
        client.set_cookie("espn_s2=abc");

        let players = client.get_players().unwrap();
        let requests = server.requests();

        assert_eq!(players.len(), 3);
        assert_eq!(requests.len(), 2);
        assert!(requests[0].starts_with("GET /ffl/freeagency?leagueId=123&teamId=4&seasonId=2017 "));
    }

    #[test]
    fn error_status_on_page_fetch() {
        let server = TestServer::start(vec![CannedResponse::status(500, "oops")]);
        let client = client_for(&server);

        match client.get_team() {
            Err(Error(ErrorKind::NonSuccessStatus(500), _)) => {},
            other => panic!("expected NonSuccessStatus, got {:?}", other)
        }
    }
}

//! Scrapes player data from ESPN fantasy football league pages.
//!
//! `http_client::TeamClient` owns the session and fetches pages; the scrapers
//! in `scrapers` turn page HTML into `data_structs` records and can be used on
//! their own with HTML you saved yourself.

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod error;
pub mod data_structs;
pub mod scrapers;
pub mod urls;
#[cfg(feature = "http-client")]
pub mod http_client;
#[cfg(test)]
#[cfg(feature = "http-client")]
mod test_utils;

pub use crate::urls::parse_params_from_url;
#[cfg(feature = "http-client")]
pub use crate::http_client::{ClientConfig, TeamClient};

// src/pipeline.rs

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::fetch::{fetcher_for, Fetcher};
use crate::member::MemberRecord;
use crate::process::{self, DateParser};

/// Fetch → parse → normalize, re-run from scratch on every call.
pub struct RosterPipeline {
    fetcher: Box<dyn Fetcher>,
    parser: DateParser,
}

impl RosterPipeline {
    pub fn new(fetcher: Box<dyn Fetcher>, parser: DateParser) -> Self {
        RosterPipeline { fetcher, parser }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(RosterPipeline::new(
            fetcher_for(config)?,
            DateParser::with_bare_year(config.accept_bare_year),
        ))
    }

    /// Run with today's local date as the fallback join date.
    pub fn run(&self) -> Result<Vec<MemberRecord>> {
        self.run_on(Local::now().date_naive())
    }

    /// Run with an explicit processing date.
    #[tracing::instrument(level = "info", skip(self), fields(feed = %self.fetcher.locator()))]
    pub fn run_on(&self, processed_on: NaiveDate) -> Result<Vec<MemberRecord>> {
        let bytes = self.fetcher.fetch()?;
        let table = process::load_table(&bytes)?;
        let members = process::normalize(&table, &self.parser, processed_on);

        let fallbacks = members.iter().filter(|m| m.is_fallback()).count();
        info!(
            rows = table.len(),
            members = members.len(),
            fallbacks,
            "roster ingested"
        );
        Ok(members)
    }
}

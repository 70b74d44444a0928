use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::{ApiClient, ContributionSource, FetchQuery, FileSource, DEFAULT_API_URL};
use crate::util::{parse_date, WeekStart};

#[derive(Parser)]
#[command(name = "ghcal")]
#[command(about = "GitHub contributions calendar for the terminal")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, env = "GHCAL_API_URL", default_value = DEFAULT_API_URL, help = "Base URL of the contributions API")]
    pub api_url: String,

    #[arg(long, env = "GHCAL_TIMEOUT", default_value = "10s", value_parser = humantime::parse_duration, help = "HTTP request timeout (e.g. 10s, 1m)")]
    pub timeout: Duration,

    #[arg(long, help = "Read a saved API response from this file instead of fetching")]
    pub input: Option<PathBuf>,

    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=6), help = "First day of the week (0 = Sunday ... 6 = Saturday)")]
    pub week_start: u8,

    #[arg(long, help = "Treat this date as today (YYYY-MM-DD)")]
    pub today: Option<String>,
}

impl CommonArgs {
    pub fn week_start(&self) -> Result<WeekStart> {
        Ok(WeekStart::new(self.week_start)?)
    }

    pub fn today(&self) -> Result<NaiveDate> {
        match &self.today {
            Some(raw) => parse_date(raw).context("Failed to parse --today"),
            None => Ok(Local::now().date_naive()),
        }
    }

    pub fn source(&self) -> Result<Box<dyn ContributionSource>> {
        if let Some(path) = &self.input {
            return Ok(Box::new(FileSource::new(path)));
        }
        let client = ApiClient::new(&self.api_url, self.timeout)
            .context("Failed to build HTTP client")?;
        Ok(Box::new(client))
    }
}

#[derive(Args, Clone)]
pub struct SelectionArgs {
    #[arg(help = "GitHub username")]
    pub username: String,

    #[arg(long = "year", short = 'y', help = "Calendar year to show (repeatable)", conflicts_with_all = ["last", "all"])]
    pub years: Vec<i32>,

    #[arg(long, help = "Show the twelve months ending today (default)", conflicts_with = "all")]
    pub last: bool,

    #[arg(long, help = "Show every year the API reports")]
    pub all: bool,
}

impl SelectionArgs {
    pub fn rolling(&self) -> bool {
        self.last || (self.years.is_empty() && !self.all)
    }

    pub fn query(&self) -> FetchQuery {
        FetchQuery::new(self.username.trim())
            .with_years(self.years.clone())
            .rolling(self.rolling())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    Show {
        #[clap(flatten)]
        selection: SelectionArgs,

        #[arg(long, help = "Label Mon/Wed/Fri rows")]
        weekday_labels: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    Browse {
        #[clap(flatten)]
        selection: SelectionArgs,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Show { selection, weekday_labels, json, ndjson } => {
                crate::exec::show(&self.common, &selection, weekday_labels, json, ndjson)
            }
            Commands::Browse { selection } => crate::exec::browse(&self.common, &selection),
        }
    }
}

pub mod calendar;
pub mod cli;
pub mod error;
pub mod exec;
pub mod fetch;
pub mod model;
pub mod output;
pub mod tui;
pub mod util;

pub use calendar::{build_year_grid, calendars_from_response, derive_month_labels, Calendar, Grid};
pub use error::{CalendarError, Result};
pub use model::{ContributionRecord, ContributionsResponse, YearSelection, YearSummary};
pub use util::WeekStart;

pub mod build;
pub mod grid;
pub mod labels;
pub mod stats;

pub use build::{calendars_from_response, BuildOptions, Calendar};
pub use grid::{build_grid, build_year_grid, Cell, Grid, Week};
pub use labels::{derive_month_labels, MonthLabel};
pub use stats::YearStats;

use crate::calendar::{calendars_from_response, BuildOptions, Calendar};
use crate::cli::{CommonArgs, SelectionArgs};
use crate::fetch::fetch_with_progress;
use crate::output::{output_calendars, output_json, output_ndjson};
use anyhow::Context;
use console::Term;

pub fn load_calendars(
    common: &CommonArgs,
    selection: &SelectionArgs,
    show_progress: bool,
) -> anyhow::Result<Vec<Calendar>> {
    let week_start = common.week_start()?;
    let today = common.today()?;
    let source = common.source()?;
    let query = selection.query();

    let response = fetch_with_progress(source.as_ref(), &query, show_progress)
        .with_context(|| format!("Failed to fetch contributions for {}", query.username))?;

    let options = BuildOptions {
        rolling: query.rolling,
        years: query.years.clone(),
        week_start,
        today,
    };
    let calendars =
        calendars_from_response(&response, &options).context("Failed to build calendars")?;
    log::debug!("built {} calendar(s) for {}", calendars.len(), query.username);
    Ok(calendars)
}

pub fn show(
    common: &CommonArgs,
    selection: &SelectionArgs,
    weekday_labels: bool,
    json: bool,
    ndjson: bool,
) -> anyhow::Result<()> {
    // Keep machine-readable output free of progress noise
    let show_progress = !json && !ndjson && Term::stderr().is_term();
    let calendars = load_calendars(common, selection, show_progress)?;
    let username = selection.username.trim();

    if json {
        output_json(&calendars, username, common.week_start()?)?;
    } else if ndjson {
        output_ndjson(&calendars)?;
    } else {
        output_calendars(&calendars, username, weekday_labels)?;
    }

    Ok(())
}

pub fn browse(common: &CommonArgs, selection: &SelectionArgs) -> anyhow::Result<()> {
    let calendars = load_calendars(common, selection, Term::stderr().is_term())?;
    if calendars.is_empty() {
        println!("No contributions found for {}", selection.username.trim());
        return Ok(());
    }
    crate::tui::run(calendars, selection.username.trim()).context("Terminal UI failed")
}

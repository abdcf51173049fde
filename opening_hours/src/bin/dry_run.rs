use anyhow::Context;
use chrono::Datelike;
use opening_hours::config::Settings;
use opening_hours::display::OpeningHoursView;
use opening_hours::{OpeningHoursField, RawDaySpan, ScheduleParser};
use serde::Deserialize;

/// Either the bare `dayspans` array or the whole `opening_hours` product field.
#[derive(Deserialize)]
#[serde(untagged)]
enum DryRunInput {
    Dayspans(Vec<RawDaySpan>),
    Field(OpeningHoursField),
}

impl DryRunInput {
    fn into_dayspans(self) -> Vec<RawDaySpan> {
        match self {
            DryRunInput::Dayspans(dayspans) => dayspans,
            DryRunInput::Field(field) => field.into_dayspans(),
        }
    }
}

/// Any JSON object reads as a product field, so an input without a single
/// day span is rejected rather than shown as an empty schedule.
fn read_dayspans(text: &str) -> anyhow::Result<Vec<RawDaySpan>> {
    let dayspans = serde_json::from_str::<DryRunInput>(text)
        .context("Expected a dayspans array or an opening_hours field")?
        .into_dayspans();
    anyhow::ensure!(!dayspans.is_empty(), "No day spans found");
    Ok(dayspans)
}

fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::init_subscriber("opening_hours_dry_run")?;
    start()
}

fn start() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("Usage: dry_run <dayspans.json>")?;
    let settings = Settings::parse()?;

    let text = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
    let dayspans = read_dayspans(&text).with_context(|| format!("Failed to read day spans in {path}"))?;

    let market = settings.market;
    let parsed = ScheduleParser::new(market)
        .with_options(settings.parser)
        .parse(&dayspans);
    let now = market.now();

    match &parsed {
        Ok(schedule) => {
            println!("{}", serde_json::to_string_pretty(schedule)?);
            println!("open now ({now}): {}", schedule.is_open_at(now));
        }
        Err(err) => {
            tracing::warn!(%err, %market, "falling back to verbatim opening hours");
        }
    }

    println!(
        "{}",
        OpeningHoursView::build(&dayspans, &parsed, market, now.weekday())
    );
    Ok(())
}

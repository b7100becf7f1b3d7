use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};

use gridiron_terminal::catalog::EntityClass;
use gridiron_terminal::compare_fetch::{
    fetch_entity_listing, fetch_game_list, fetch_weekly_grades, load_comparison,
};
use gridiron_terminal::merge::bar_width;
use gridiron_terminal::session::{ComparisonSession, EntitySelection};
use gridiron_terminal::trend::chart_data;

enum CliArgs {
    List {
        year: u32,
    },
    Compare {
        class: EntityClass,
        entity_a: u64,
        entity_b: u64,
        year: u32,
        team: Option<String>,
        metric: Option<String>,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!(
                "usage: gridiron_terminal <rb|wr|g|te|offense|defense> <idA> <idB> \
                 [--year N] [--team SCHOOL] [--metric FIELD]\n       \
                 gridiron_terminal list [--year N]"
            );
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args() -> Result<CliArgs> {
    let mut positional = Vec::new();
    let mut year = 2025u32;
    let mut team = None;
    let mut metric = None;

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--year" => {
                year = iter
                    .next()
                    .and_then(|v| v.parse().ok())
                    .context("--year needs a number")?;
            }
            "--team" => team = iter.next(),
            "--metric" => metric = iter.next(),
            _ => positional.push(arg),
        }
    }

    if positional.len() == 1 && positional[0] == "list" {
        return Ok(CliArgs::List { year });
    }
    let [class, a, b] = positional.as_slice() else {
        anyhow::bail!("expected <class> <idA> <idB>");
    };
    Ok(CliArgs::Compare {
        class: EntityClass::parse(class).context("unknown entity class")?,
        entity_a: a.parse().context("idA must be numeric")?,
        entity_b: b.parse().context("idB must be numeric")?,
        year,
        team,
        metric,
    })
}

fn run(args: CliArgs) -> Result<()> {
    let (class, entity_a, entity_b, year, team, metric) = match args {
        CliArgs::List { year } => {
            for option in fetch_entity_listing(year)? {
                println!("{:>8}  {}", option.value, option.label);
            }
            return Ok(());
        }
        CliArgs::Compare {
            class,
            entity_a,
            entity_b,
            year,
            team,
            metric,
        } => (class, entity_a, entity_b, year, team, metric),
    };

    let bundle = load_comparison(entity_a, entity_b, year)?;

    let session = ComparisonSession::new(
        class,
        EntitySelection {
            id: entity_a,
            name: bundle.profile_a.name.clone(),
            year,
        },
        EntitySelection {
            id: entity_b,
            name: bundle.profile_b.name.clone(),
            year,
        },
    )
    .with_records(bundle.record_a, bundle.record_b);

    println!("{} comparison, {} season", session.class.label(), year);
    println!(
        "{:>24}  {} vs {}",
        "", session.entity_a.name, session.entity_b.name
    );

    println!("\n-- Season stats --");
    for row in &session.base_rows {
        println!(
            "{:>24}  {:>8.1} {:>5.0}% | {:>5.0}% {:>8.1}",
            row.label,
            row.value_a,
            bar_width(row.value_a, row.value_b),
            bar_width(row.value_b, row.value_a),
            row.value_b,
        );
    }

    println!("\n-- Headline grades --");
    for row in &session.grade_rows {
        let a = session.headline(positive(row.value_a));
        let b = session.headline(positive(row.value_b));
        println!(
            "{:>24}  {:>3} ({:>6}) | {:>3} ({:>6})",
            row.label, a.grade, a.percent, b.grade, b.percent
        );
    }

    let selector = session.available_metrics();
    println!("\n{} additional metrics available", selector.len());

    if let (Some(team), Some(metric)) = (team.as_deref(), metric.as_deref()) {
        print_trend(&session, entity_a, year, team, metric)?;
    }

    Ok(())
}

fn print_trend(
    session: &ComparisonSession,
    entity_id: u64,
    year: u32,
    team: &str,
    metric: &str,
) -> Result<()> {
    let games = fetch_game_list(team, year)?;
    let weekly = fetch_weekly_grades(entity_id, year, &games);
    for err in &weekly.errors {
        eprintln!("warning: {err}");
    }

    let session = session.with_trend_metric(metric, &games, &weekly.index);
    let Some(series) = session.trend.as_ref() else {
        return Ok(());
    };

    println!("\n-- {metric} by week --");
    for (label, value) in series.labels.iter().zip(series.values.iter()) {
        match value {
            Some(v) => println!("{label:>12}  {v:.1}"),
            None => println!("{label:>12}  (no data)"),
        }
    }

    let payload = chart_data(metric, series);
    println!("\n{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

/// Grade fields read as 0 when the service omitted them; render those as
/// "N/A" rather than an F.
fn positive(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

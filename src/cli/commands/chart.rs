use crate::cli::commands::{open_session, report_malformed};
use crate::cli::parser::{ChartKind, Cli, Commands};
use crate::config::Config;
use crate::core::chart::{Distribution, StackedSeries, distribution, stacked};
use crate::core::filter::filter;
use crate::errors::AppResult;
use crate::models::Grouping;
use crate::ui::messages::{header, no_data};
use crate::utils::colors::series_colour;
use crate::utils::date::format_date;
use crate::utils::formatting::{bar, pad_left, pad_right};
use crate::utils::table::{Column, Table};
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 30;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart {
        filters,
        kind,
        group,
    } = &cli.command
    {
        let state = filters.to_state(cfg);
        state.validate()?;
        let grouping = group.unwrap_or(cfg.default_grouping);

        let session = open_session(cli, cfg)?;
        let outcome = filter(&session.records, &state, session.clock.as_ref())?;
        report_malformed(&outcome.malformed);

        match kind {
            ChartKind::Pie => print_distribution(&distribution(outcome.iter(), grouping), grouping),
            ChartKind::Stacked => print_stacked(&stacked(outcome.iter(), grouping), grouping),
        }
    }
    Ok(())
}

fn print_distribution(dist: &Distribution, grouping: Grouping) {
    header(format!("Distribution by {grouping}"));

    let Distribution::Series(slices) = dist else {
        no_data("this chart");
        return;
    };

    let label_w = slices
        .iter()
        .map(|s| UnicodeWidthStr::width(s.label.as_str()))
        .max()
        .unwrap_or(0);
    let total = dist.total();

    for (i, slice) in slices.iter().enumerate() {
        let share = dist.share(&slice.label).unwrap_or(0.0);
        let colour = series_colour(i);
        println!(
            "{} {}  {}  {} min ({:.1}%)",
            colour.paint("●"),
            pad_right(&slice.label, label_w),
            colour.paint(pad_right(&bar(share, BAR_WIDTH), BAR_WIDTH)),
            pad_left(&slice.minutes.to_string(), 5),
            share * 100.0
        );
    }
    println!("\nTotal: {total} min");
}

fn print_stacked(series: &StackedSeries, grouping: Grouping) {
    header(format!("Minutes per day by {grouping}"));

    if series.is_empty() {
        no_data("this chart");
        return;
    }

    let mut columns = vec![Column::left("Date")];
    columns.extend(series.labels.iter().map(|l| Column::right(l.clone())));
    columns.push(Column::right("Total"));

    let mut table = Table::new(columns);
    for row in &series.rows {
        let mut cells = vec![format_date(&row.date)];
        cells.extend(series.labels.iter().map(|l| row.minutes_for(l).to_string()));
        cells.push(row.total().to_string());
        table.add_row(cells);
    }
    print!("{}", table.render());
}

use crate::cli::commands::{open_session, report_malformed};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::aggregate::{GroupTotal, totals};
use crate::core::filter::filter;
use crate::errors::AppResult;
use crate::ui::messages::{header, no_data};
use crate::utils::formatting::hm;
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Totals { filters } = &cli.command {
        let state = filters.to_state(cfg);
        state.validate()?;

        let session = open_session(cli, cfg)?;
        let outcome = filter(&session.records, &state, session.clock.as_ref())?;
        report_malformed(&outcome.malformed);

        let t = totals(outcome.iter());

        header("Category totals");
        print_totals(&t.by_category, "categories");
        println!();
        header("Occupation totals");
        print_totals(&t.by_occupation, "occupations");
    }
    Ok(())
}

fn print_totals(rows: &[GroupTotal], what: &str) {
    if rows.is_empty() {
        no_data(what);
        return;
    }

    let mut table = Table::new(vec![Column::left("Name"), Column::right("Time")]);
    for row in rows {
        table.add_row(vec![row.label.clone(), hm(row.total_minutes)]);
    }
    print!("{}", table.render());
}

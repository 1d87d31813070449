use crate::cli::commands::{open_session, report_malformed};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::filter::filter;
use crate::errors::AppResult;
use crate::ui::messages::{header, no_data};
use crate::utils::formatting::hm;
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Logs { filters } = &cli.command {
        let state = filters.to_state(cfg);
        state.validate()?;

        let session = open_session(cli, cfg)?;
        let outcome = filter(&session.records, &state, session.clock.as_ref())?;
        report_malformed(&outcome.malformed);

        header(format!("Time logs · {}", state.window));
        if outcome.is_empty() {
            no_data("the selected filters");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::left("Occupation"),
            Column::left("Category"),
            Column::right("Time"),
        ]);
        for r in outcome.iter() {
            table.add_row(vec![
                r.date.clone(),
                r.occupation_label().to_string(),
                r.category_label().to_string(),
                format!("{}h {}m", r.hours, r.minutes),
            ]);
        }
        print!("{}", table.render());
        println!(
            "\n{} record(s), total {}",
            outcome.len(),
            hm(outcome.total_minutes())
        );
    }
    Ok(())
}

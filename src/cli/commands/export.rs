use crate::cli::commands::{open_session, report_malformed};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Analysis;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        filters,
        group,
        report,
        format,
        file,
        force,
    } = &cli.command
    {
        let state = filters.to_state(cfg);
        state.validate()?;
        let grouping = group.unwrap_or(cfg.default_grouping);

        let session = open_session(cli, cfg)?;
        let analysis = Analysis::run(&session.records, &state, grouping, session.clock.as_ref())?;
        report_malformed(&analysis.filtered.malformed);

        ExportLogic::export(&analysis, *report, *format, file, *force)?;
    }
    Ok(())
}

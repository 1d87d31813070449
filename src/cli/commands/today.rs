use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::daily::daily_summary;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::colour_for_goal;
use crate::utils::formatting::hm;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { target } = &cli.command {
        let session = open_session(cli, cfg)?;
        let target = target.unwrap_or(cfg.daily_target_minutes);
        let summary = daily_summary(&session.records, session.clock.as_ref(), target);

        header(format!("Today's Total · {}", summary.date));
        let line = format!("{} / {} target", hm(summary.total_minutes), hm(target));
        println!("{}", colour_for_goal(summary.goal_reached).bold().paint(line));

        if summary.goal_reached {
            success(format!(
                "Great job! You've hit your {} goal today!",
                hm(target)
            ));
        } else {
            info(format!("{} to go.", hm(summary.remaining_minutes())));
        }
    }
    Ok(())
}

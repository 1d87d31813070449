use crate::cli::commands::open_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::options::{FilterOption, available_filters};
use crate::errors::AppResult;
use crate::ui::messages::{header, no_data};
use crate::utils::table::{Column, Table};

/// Lists the ids accepted by `--category` / `--occupation`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = open_session(cli, cfg)?;
    let opts = available_filters(&session.records);

    header("Categories");
    print_options(&opts.categories, "categories");
    println!();
    header("Occupations");
    print_options(&opts.occupations, "occupations");
    Ok(())
}

fn print_options(items: &[FilterOption], what: &str) {
    if items.is_empty() {
        no_data(what);
        return;
    }
    let mut table = Table::new(vec![Column::left("Id"), Column::left("Name")]);
    for o in items {
        table.add_row(vec![o.id.clone(), o.name.clone()]);
    }
    print!("{}", table.render());
}

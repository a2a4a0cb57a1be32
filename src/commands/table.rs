use colored::Colorize;

use crate::cli::{Cli, TableArgs};
use crate::config::Config;
use crate::error::Result;
use crate::outputs::Outputs;
use crate::table::{self, Action, SideEffect, TableOptions};

pub async fn run(cli: &Cli, args: &TableArgs) -> Result<()> {
    let config = Config::load()?;
    let html = read_html(&args.html)?;
    let opts = build_options(args, &config);

    let resolution = table::resolve(&html, &opts)?;

    let mut outputs = Outputs::new();
    if let Some(value) = &resolution.value {
        outputs.set(&opts.return_variable_name, value.as_str());
    }
    outputs.set(&opts.row_index_variable_name, resolution.row_index);

    if let Some(SideEffect::Click {
        selector,
        double_click,
        scroll_into_view,
    }) = &resolution.side_effect
    {
        outputs.set(
            "sideEffect",
            serde_json::json!({
                "type": "click",
                "selector": selector,
                "doubleClick": double_click,
                "scrollIntoView": scroll_into_view,
            }),
        );
        if !cli.json {
            let kind = if *double_click { "dblclick" } else { "click" };
            println!("{} {} {}", "●".cyan(), kind, selector);
        }
    }

    outputs.print(cli.json)
}

/// Merge CLI flags over config defaults into a resolver parameter bag.
fn build_options(args: &TableArgs, config: &Config) -> TableOptions {
    let defaults = TableOptions::default();
    TableOptions {
        action: args.action.unwrap_or(Action::Get),
        target_column: args.target_column.clone(),
        source_column: args.source_column.clone(),
        search_value: args.search_value.clone(),
        match_type: args.match_type.unwrap_or(defaults.match_type),
        case_insensitive: if args.case_sensitive {
            false
        } else {
            config.table.case_insensitive
        },
        occurrence: args.occurrence.unwrap_or(1),
        row_index: args.row_index,
        row_index_base: args.row_index_base.unwrap_or(config.table.row_index_base),
        column_index_base: args
            .column_index_base
            .unwrap_or(config.table.column_index_base),
        return_mode: args.return_mode.unwrap_or(defaults.return_mode),
        expected_value: args.expected_value.clone(),
        expected_match_type: args.expected_match_type,
        click_query: args.click_query.clone(),
        double_click: args.double_click,
        scroll_into_view: !args.no_scroll_into_view,
        return_variable_name: args.return_variable_name.clone(),
        row_index_variable_name: args.row_index_variable_name.clone(),
    }
}

fn read_html(source: &str) -> Result<String> {
    if source == "-" {
        Ok(std::io::read_to_string(std::io::stdin())?)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

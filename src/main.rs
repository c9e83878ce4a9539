use std::io::{self, BufRead};

use clap::Parser;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use logicker::{build_table_with, format_error, TableConfig};

const DEFAULT_MAX_VARIABLES: usize = 20;

/// Prints the truth table of propositional logic expressions.
///
/// Expressions use `~` for negation and `∧`, `∨`, `⇒` for the binary
/// operators, which all share one precedence and group left to right.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Expressions to tabulate. Read line by line from stdin when omitted.
    expressions: Vec<String>,

    /// Reject expressions with more distinct variables than this
    #[arg(long, default_value_t = DEFAULT_MAX_VARIABLES)]
    max_variables: usize,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config = TableConfig {
        max_variables: cli.max_variables,
    };

    let expressions = if cli.expressions.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        cli.expressions
    };

    let mut failed = 0;
    for (index, expression) in expressions.iter().enumerate() {
        if index > 0 {
            println!();
        }

        match build_table_with(expression, &config) {
            Ok(table) => {
                info!("{:?}: {} row(s)", expression, table.len());
                print!("{}", table);
            }
            Err(error) => {
                eprint!("{}", format_error(&error, expression));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        color_eyre::eyre::bail!("{} of {} expression(s) failed", failed, expressions.len());
    }

    Ok(())
}

use clap::{Parser, Subcommand, ValueEnum};
use cs61a_common::{CacheScope, Config, CountStrategy, Result};
use cs61a_hw03::{Classifier, coins, num_eights};
use cs61a_lab03::church::ChurchOp;
use cs61a_lab03::{church_arithmetic, get_k_run_starter, ordered_digits};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cs61a")]
#[command(about = "CS61A homework 3 and lab 3 exercises", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read settings from a TOML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the nth element of the ping-pong sequence for each N
    Pingpong {
        #[arg(required = true)]
        n: Vec<u64>,
    },

    /// Print the direction flag of index N
    Classify { n: u64 },

    /// Count the ways to make change for AMOUNT cents
    CountCoins {
        amount: u64,

        /// Override the configured counting strategy
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },

    /// Count the 8s among the digits of N
    NumEights { n: u64 },

    /// Check whether the digits of N never decrease
    OrderedDigits { n: u64 },

    /// Print the first digit of the Kth increasing run of N
    RunStarter { n: u64, k: usize },

    /// Combine two numbers as Church numerals
    Church {
        #[arg(value_enum)]
        op: ChurchOpArg,
        m: u64,
        n: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Memoized,
    Tree,
}

impl From<StrategyArg> for CountStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Memoized => CountStrategy::Memoized,
            StrategyArg::Tree => CountStrategy::TreeRecursive,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ChurchOpArg {
    Add,
    Mul,
    Pow,
}

impl From<ChurchOpArg> for ChurchOp {
    fn from(arg: ChurchOpArg) -> Self {
        match arg {
            ChurchOpArg::Add => ChurchOp::Add,
            ChurchOpArg::Mul => ChurchOp::Mul,
            ChurchOpArg::Pow => ChurchOp::Pow,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    cs61a_common::logging::init_with_level(&config.logging.level);

    match cli.command {
        Commands::Pingpong { n } => cmd_pingpong(&n, config.classifier.cache_scope),
        Commands::Classify { n } => {
            println!("{}", Classifier::new().classify(n)?);
            Ok(())
        }
        Commands::CountCoins { amount, strategy } => {
            let strategy = strategy.map_or(config.coins.strategy, CountStrategy::from);
            println!("{}", coins::count_ways_with(strategy, amount)?);
            Ok(())
        }
        Commands::NumEights { n } => {
            println!("{}", num_eights(n));
            Ok(())
        }
        Commands::OrderedDigits { n } => {
            println!("{}", ordered_digits(n));
            Ok(())
        }
        Commands::RunStarter { n, k } => {
            match get_k_run_starter(n, k) {
                Some(digit) => println!("{digit}"),
                None => println!("none"),
            }
            Ok(())
        }
        Commands::Church { op, m, n } => {
            println!("{}", church_arithmetic(op.into(), m, n)?);
            Ok(())
        }
    }
}

fn cmd_pingpong(indices: &[u64], scope: CacheScope) -> Result<()> {
    let mut shared = Classifier::new();
    for &n in indices {
        let value = match scope {
            CacheScope::Shared => shared.sequence_value(n)?,
            CacheScope::PerCall => Classifier::new().sequence_value(n)?,
        };
        println!("{value}");
    }
    tracing::debug!(cached = shared.cached_len(), ?scope, "pingpong finished");
    Ok(())
}

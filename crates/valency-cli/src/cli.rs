use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use valency::engine::config::SolveStrategy;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The Valency Developers",
    version,
    about = "Valency CLI - Electron configurations and oxidation numbers from the command line.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Element table (.toml or .csv) to use instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    pub elements: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the electron configuration of an atom or monatomic ion.
    Shells(ShellsArgs),
    /// Assign oxidation numbers to every atom of a formula.
    Oxidation(OxidationArgs),
    /// List the elements of the periodic table in use.
    Elements(ElementsArgs),
}

/// Arguments for the `shells` subcommand.
#[derive(Args, Debug)]
pub struct ShellsArgs {
    /// Element symbol, e.g. Fe.
    #[arg(required = true, value_name = "SYMBOL")]
    pub symbol: String,

    /// Net charge of the ion, e.g. 2 for Fe^2+ or -1 for Cl^-.
    #[arg(short = 'z', long, default_value_t = 0, allow_negative_numbers = true)]
    pub charge: i32,
}

/// Arguments for the `oxidation` subcommand.
#[derive(Args, Debug)]
pub struct OxidationArgs {
    /// Chemical formula, e.g. H2SO4, Cr2O7^2- or [NH4^+][NO3^-].
    #[arg(required = true, value_name = "FORMULA", allow_hyphen_values = true)]
    pub formula: String,

    /// How the remaining unknown oxidation number is found, overriding the config file.
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Highest oxidation number tried, overriding the config file.
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub search_upper_bound: Option<i32>,

    /// Lowest oxidation number tried, overriding the config file.
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub search_lower_bound: Option<i32>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Scan candidate numbers from the upper bound downwards.
    Scan,
    /// Divide the missing charge by the number of atoms.
    ClosedForm,
}

impl From<StrategyArg> for SolveStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scan => SolveStrategy::DownwardScan,
            StrategyArg::ClosedForm => SolveStrategy::ClosedForm,
        }
    }
}

/// Arguments for the `elements` subcommand.
#[derive(Args, Debug)]
pub struct ElementsArgs {
    /// Only list metals.
    #[arg(long)]
    pub metals_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_charge() {
        let cli = Cli::parse_from(["valency", "shells", "Cl", "--charge", "-1"]);
        match cli.command {
            Commands::Shells(args) => {
                assert_eq!(args.symbol, "Cl");
                assert_eq!(args.charge, -1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_oxidation_overrides_and_globals() {
        let cli = Cli::parse_from([
            "valency",
            "-vv",
            "oxidation",
            "SO4^2-",
            "--strategy",
            "closed-form",
            "--search-lower-bound",
            "-8",
            "--elements",
            "table.csv",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.elements, Some(PathBuf::from("table.csv")));
        match cli.command {
            Commands::Oxidation(args) => {
                assert_eq!(args.formula, "SO4^2-");
                assert_eq!(args.strategy, Some(StrategyArg::ClosedForm));
                assert_eq!(args.search_lower_bound, Some(-8));
                assert_eq!(args.search_upper_bound, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["valency", "-q", "-v", "elements"]);
        assert!(result.is_err());
    }

    #[test]
    fn strategy_arg_maps_to_solver_strategy() {
        assert_eq!(SolveStrategy::from(StrategyArg::Scan), SolveStrategy::DownwardScan);
        assert_eq!(
            SolveStrategy::from(StrategyArg::ClosedForm),
            SolveStrategy::ClosedForm
        );
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use scratch_diff::areas::session::Session;
use scratch_diff::artifacts::core::logging::{self, Profile};
use scratch_diff::artifacts::diff::balancer::BalanceMode;
use scratch_diff::artifacts::diff::script_differ::{DiffOptions, ScriptDiffer};
use scratch_diff::artifacts::diff::status_filter::StatusFilter;
use scratch_diff::artifacts::matcher::{PositionalMatcher, ScriptMatcher, SortedMatcher};
use scratch_diff::artifacts::projection::ProjectionOptions;
use scratch_diff::artifacts::projection::outline::OutlineProjection;
use scratch_diff::commands::porcelain::scripts::ScriptsOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scratch-diff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Script-level diffs for Scratch projects",
    long_about = "Compares two Scratch project.json files script by script. \
    Each script is rendered as text, aligned line by line against its counterpart, \
    and printed as a merged view with added and removed lines marked.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase log verbosity")]
    verbose: u8,
    #[arg(long, value_enum, default_value = "auto", global = true, help = "When to colour output")]
    color: ColorChoice,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "scripts",
        about = "Show changed scripts between two projects",
        long_about = "This command diffs every sprite and the stage of two projects. \
        OLD and NEW are project.json files or directories containing one."
    )]
    Scripts {
        #[arg(index = 1, help = "The project before the change")]
        old: PathBuf,
        #[arg(index = 2, help = "The project after the change")]
        new: PathBuf,
        #[arg(short, long, help = "Only show this sprite or stage")]
        target: Option<String>,
        #[arg(long, help = "Only show scripts with these statuses (A, D, M)")]
        filter: Option<String>,
        #[arg(long, help = "Print records as JSON")]
        json: bool,
        #[command(flatten)]
        diff: DiffArgs,
    },
    #[command(
        name = "summary",
        about = "Print commit message lines for block changes",
        long_about = "This command prints one line per changed sprite or stage, \
        e.g. `Sprite1: +3, -1 blocks`."
    )]
    Summary {
        #[arg(index = 1, help = "The project before the change")]
        old: PathBuf,
        #[arg(index = 2, help = "The project after the change")]
        new: PathBuf,
        #[arg(long, help = "Print lines as a JSON array")]
        json: bool,
        #[command(flatten)]
        diff: DiffArgs,
    },
}

#[derive(clap::Args)]
struct DiffArgs {
    #[arg(long, value_enum, default_value = "positional", help = "How old and new scripts are paired")]
    matcher: MatcherKind,
    #[arg(long, value_enum, default_value = "literal", help = "How stray `end` lines are removed")]
    balance: BalanceKind,
    #[arg(long, default_value = "", help = "Indentation per nesting level")]
    indent: String,
    #[arg(long, default_value = "en", help = "Language of the rendered scripts")]
    locale: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy, ValueEnum)]
enum MatcherKind {
    Positional,
    Sorted,
}

#[derive(Clone, Copy, ValueEnum)]
enum BalanceKind {
    Literal,
    Positional,
}

impl DiffArgs {
    fn differ(&self) -> ScriptDiffer {
        let options = DiffOptions {
            balance_mode: match self.balance {
                BalanceKind::Literal => BalanceMode::Literal,
                BalanceKind::Positional => BalanceMode::Positional,
            },
            projection: ProjectionOptions {
                locale: self.locale.clone(),
                indent: self.indent.clone(),
            },
            ..DiffOptions::default()
        };
        let matcher: Box<dyn ScriptMatcher> = match self.matcher {
            MatcherKind::Positional => Box::new(PositionalMatcher),
            MatcherKind::Sorted => Box::new(SortedMatcher),
        };

        ScriptDiffer::new(Box::new(OutlineProjection), options).with_matcher(matcher)
    }
}

fn session(differ: ScriptDiffer) -> Result<Session> {
    let pwd = std::env::current_dir()?;
    Session::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()), differ)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(Profile::from_verbosity(cli.verbose));
    match cli.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => colored::control::set_override(std::io::stdout().is_terminal()),
    }

    match &cli.command {
        Commands::Scripts {
            old,
            new,
            target,
            filter,
            json,
            diff,
        } => {
            let filter = match filter {
                Some(filter) => StatusFilter::try_parse(filter)
                    .ok_or_else(|| anyhow::anyhow!("Invalid filter: {filter}"))?,
                None => StatusFilter::default(),
            };
            let options = ScriptsOptions::new(target.clone(), filter, *json);

            session(diff.differ())?.scripts(old, new, &options)?
        }
        Commands::Summary {
            old,
            new,
            json,
            diff,
        } => session(diff.differ())?.summary(old, new, *json)?,
    }

    Ok(())
}

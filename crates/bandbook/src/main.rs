use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use bandbook::app::logic::Logic;
use bandbook::app::storage::RosterStore;
use bandbook::infra::config::Config;
use bandbook::ui::render::render_result;
use bandbook::ui::repl::Repl;

#[derive(Parser)]
#[command(author, version, about = "Keep track of bands and the musicians who play in them")]
struct Cli {
    /// Roster data file; overrides the configured location.
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive prompt (default)
    Repl,
    /// Run a single command line such as "addm b/1 m/2"
    Exec {
        #[arg(required = true, num_args = 1..)]
        line: Vec<String>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load()?;
    bandbook::init(config.logging.tracing_level());

    let command = cli.command.unwrap_or(Commands::Repl);
    if let Commands::Completions { shell } = command {
        clap_complete::generate(shell, &mut Cli::command(), "bandbook", &mut io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let data_file = cli.data_file.unwrap_or_else(|| config.storage.data_file.clone());
    let mut logic = Logic::open(RosterStore::new(data_file))?;

    match command {
        Commands::Exec { line } => {
            let result = logic.execute(&line.join(" "));
            let mut stdout = io::stdout();
            write!(stdout, "{}", render_result(&result, logic.roster()))?;
            Ok(if result.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        _ => {
            Repl::new(&config.repl)?.run(&mut logic)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

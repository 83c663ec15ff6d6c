// ABOUTME: Entry point for the folio workbench
// ABOUTME: Parses CLI args, loads config, launches the TUI or a subcommand

use clap::Parser;

use folio_tui::cli;
use folio_tui::config::Config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Terminal workbench for document management agents")]
struct Cli {
    /// Theme to use for this run (overrides config)
    #[arg(short, long)]
    theme: Option<String>,

    /// Fix the simulated response delay in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Open the mock operations board instead of the workbench
    #[arg(long)]
    ops_board: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// List the agent catalog
    Agents,
    /// List or set the active theme
    Themes {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Print version information
    Version,
}

#[derive(clap::Subcommand)]
enum ThemeAction {
    /// List available themes
    List,
    /// Set the active theme
    Set { name: String },
}

fn main() {
    let cli = Cli::parse();

    let mut config = match Config::load(cli.theme.as_deref(), cli.latency_ms) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Command::Agents) => {
            folio_tui::logging::init_stderr();
            cli::agents::run();
        }
        Some(Command::Themes { action }) => {
            folio_tui::logging::init_stderr();
            match action {
                None | Some(ThemeAction::List) => cli::themes::list_themes(&config),
                Some(ThemeAction::Set { name }) => {
                    if let Err(e) = cli::themes::set_theme(&mut config, &name) {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
        }
        Some(Command::Version) => {
            println!("folio {}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            // Log to a file so the alternate screen stays clean
            let log_path = folio_tui::logging::init_tui();
            tracing::debug!(
                theme = %config.appearance.theme,
                log = ?log_path,
                "starting workbench"
            );

            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("Failed to create async runtime: {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = rt.block_on(folio_tui::run::run(&config, cli.ops_board)) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rangeline::input::Prompter;
use rangeline::session::Session;
use rangeline::stats::StatsStore;
use rangeline::tui::TerminalChart;

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record shot distances interactively (default if no subcommand)
    Track,
    /// Show statistics for every club with recorded shots, or for one club
    Show {
        /// Club identifier, e.g. driver, 7i, pw
        club: Option<String>,
    },
    /// Delete all recorded golf data
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List the club identifiers that can be tracked
    Clubs,
}

#[derive(Parser, Debug)]
#[command(name = "rangeline")]
#[command(about = "Golf shot distance tracker", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/rangeline/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the statistics data file (overrides data_file in config)
    #[arg(long, global = true)]
    data: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Track);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match rangeline::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = rangeline::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let clubs = config.club_set();
    let range = config.distance_range();
    let store = StatsStore::new(config.data_path(cli.data.map(PathBuf::from)));

    if cli.verbose {
        eprintln!("Data file: {}", store.path().display());
        eprintln!("Tracking {} clubs, accepting distances {}", clubs.len(), range);
    }

    let use_colors = rangeline::output::should_use_colors();

    let result = match command {
        Commands::Track => {
            let mut session = Session::new(Prompter::stdio(), &store, &clubs, TerminalChart::new())
                .with_range(range)
                .with_colors(use_colors)
                .with_verbose(cli.verbose);
            session.run()
        }
        Commands::Show { club } => show(&store, &clubs, club.as_deref(), use_colors),
        Commands::Reset { yes } => reset(&store, yes),
        Commands::Clubs => {
            for club in clubs.iter() {
                println!("{}", club);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_RUNTIME);
    }

    std::process::exit(EXIT_SUCCESS);
}

fn show(
    store: &StatsStore,
    clubs: &rangeline::stats::ClubSet,
    club: Option<&str>,
    use_colors: bool,
) -> anyhow::Result<()> {
    let summary = store.load_or_initialize(clubs)?;
    if summary.is_empty() {
        println!("No clubs found in {}", store.path().display());
        return Ok(());
    }

    match club {
        Some(club) => {
            let club = rangeline::stats::ClubSet::normalize(club);
            let Some(stats) = summary.get(&club) else {
                anyhow::bail!(
                    "Unknown club '{}'. Run `rangeline clubs` to list valid names.",
                    club
                );
            };
            println!(
                "{}",
                rangeline::output::format_club_detail(&club, stats, use_colors)
            );
        }
        None => {
            println!(
                "{}",
                rangeline::output::format_stats_table(&summary, use_colors)
            );
        }
    }

    Ok(())
}

fn reset(store: &StatsStore, yes: bool) -> anyhow::Result<()> {
    if !store.exists() {
        println!("No golf data to delete.");
        return Ok(());
    }

    if !yes {
        let mut prompter = Prompter::stdio();
        let target = store.path().display().to_string();
        if !prompter.confirm("Delete all golf data? (y/n)", &target)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.delete_all()?;
    println!("All golf data deleted.");
    Ok(())
}

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "streakdeck", version, about = "Streakdeck CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Streak status and activity
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Animation preset catalog and previews
    Animation {
        #[command(subcommand)]
        action: commands::animation::AnimationAction,
    },
    /// Streak debug panel (debug builds only)
    #[cfg(debug_assertions)]
    Debug {
        #[command(subcommand)]
        action: commands::debug::DebugAction,
    },
}

fn init_tracing() {
    let level = streakdeck_core::Config::load_or_default().log.level;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("streakdeck_core={level},streakdeck_cli={level},warn").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Animation { action } => commands::animation::run(action),
        #[cfg(debug_assertions)]
        Commands::Debug { action } => commands::debug::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

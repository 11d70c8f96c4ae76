use checkin::config::Config;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; flags given on the command line override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    debug: bool,

    #[command(flatten)]
    settings: Config,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer the check-in interactively
    Take(cmd::take::TakeArgs),
    /// Score a set of answers
    Score(cmd::score::ScoreArgs),
    /// Print the share token for a set of answers
    Encode(cmd::share::EncodeArgs),
    /// Show the result stored in a share token
    Decode(cmd::share::DecodeArgs),
    /// Compare two share tokens side by side
    Compare(cmd::share::CompareArgs),
    /// Collect and review feedback
    #[command(subcommand)]
    Feedback(cmd::feedback::FeedbackCommand),
    /// Run the HTTP API
    Serve,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading config from: {:?}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(&cli.settings, &matches);
            file_config
        }
        None => cli.settings.clone(),
    };

    let outcome = match cli.command {
        Commands::Take(args) => cmd::take::run(args, &config),
        Commands::Score(args) => cmd::score::run(args, &config),
        Commands::Encode(args) => cmd::share::encode(args, &config),
        Commands::Decode(args) => cmd::share::decode(args),
        Commands::Compare(args) => cmd::share::compare(args),
        Commands::Feedback(command) => cmd::feedback::run(command, &config),
        Commands::Serve => cmd::serve::run(config),
    };

    if let Err(e) = outcome {
        error!("❌ {:#}", e);
        process::exit(1);
    }
}

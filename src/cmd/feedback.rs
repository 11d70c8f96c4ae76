use crate::reports;
use anyhow::Context;
use checkin::config::Config;
use checkin::feedback::{Accuracy, FeedbackStore, FeedbackSubmission, FeedbackSummary, Usefulness};
use clap::{Args, Subcommand};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Subcommand, Debug, Clone)]
pub enum FeedbackCommand {
    /// Record one feedback response
    Submit(SubmitArgs),
    /// Show every stored response
    List,
    /// Aggregate insights over all responses
    Summary,
    /// Write all responses as CSV
    Export(ExportArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Overall check-in score the feedback refers to
    #[arg(long, default_value_t = 0.0)]
    pub score: f64,
    /// Usefulness rating, 1-5
    #[arg(long, default_value_t = 0.0)]
    pub enjoyment: f64,
    /// yes | somewhat | no
    #[arg(long, default_value = "")]
    pub accurate: String,
    /// yes | maybe | no
    #[arg(long, default_value = "")]
    pub useful: String,
    #[arg(long, default_value = "")]
    pub suggestion: String,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(command: FeedbackCommand, config: &Config) -> anyhow::Result<()> {
    let store = FeedbackStore::open(&config.feedback.feedback_file);

    match command {
        FeedbackCommand::Submit(args) => {
            if !args.accurate.is_empty() && args.accurate.parse::<Accuracy>().is_err() {
                warn!("'{}' is not one of yes/somewhat/no; stored as given", args.accurate);
            }
            if !args.useful.is_empty() && args.useful.parse::<Usefulness>().is_err() {
                warn!("'{}' is not one of yes/maybe/no; stored as given", args.useful);
            }

            let entry = store.append(FeedbackSubmission {
                overall_score: args.score,
                enjoyment: args.enjoyment,
                accurate: args.accurate,
                useful: args.useful,
                suggestion: args.suggestion,
            })?;
            println!("🙏 Thank you! Feedback saved as {}", entry.id);
        }
        FeedbackCommand::List => reports::print_feedback_entries(&store.list()),
        FeedbackCommand::Summary => {
            reports::print_feedback_summary(&FeedbackSummary::from_entries(&store.list()))
        }
        FeedbackCommand::Export(args) => {
            let count = match &args.out {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("Cannot create {:?}", path))?;
                    store.export_csv(file)?
                }
                None => store.export_csv(io::stdout().lock())?,
            };
            info!("Exported {} feedback entries", count);
        }
    }
    Ok(())
}

use super::AnswerInput;
use crate::reports;
use checkin::codec;
use checkin::config::Config;
use checkin::scorer;
use clap::Args;
use serde_json::json;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub input: AnswerInput,

    /// Print the result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, config: &Config) -> anyhow::Result<()> {
    let answers = args.input.load()?;
    let result = scorer::calculate_result(&answers);
    let token = codec::encode_result(&result);
    let link = codec::share_link(&config.share.share_origin, &config.share.share_path, &token);

    if args.json {
        let out = json!({
            "result": result,
            "token": token,
            "link": link,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    reports::print_result(&result);
    reports::print_share_link(&link);
    Ok(())
}

use super::AnswerInput;
use crate::reports;
use anyhow::Context;
use checkin::codec::{self, Comparison};
use checkin::config::Config;
use checkin::scorer::CheckInResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub input: AnswerInput,

    /// Print the full share link instead of the bare token
    #[arg(long, default_value_t = false)]
    pub link: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DecodeArgs {
    /// Share token or full share link
    pub token: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Your token or link
    pub mine: String,
    /// Your partner's token or link
    pub partner: String,
}

pub fn encode(args: EncodeArgs, config: &Config) -> anyhow::Result<()> {
    let answers = args.input.load()?;
    let token = codec::encode_scores(&answers);
    if args.link {
        println!(
            "{}",
            codec::share_link(&config.share.share_origin, &config.share.share_path, &token)
        );
    } else {
        println!("{}", token);
    }
    Ok(())
}

fn decode_arg(what: &str, input: &str) -> anyhow::Result<CheckInResult> {
    codec::decode_token(codec::token_from_link(input))
        .with_context(|| format!("Could not read {} share token", what))
}

pub fn decode(args: DecodeArgs) -> anyhow::Result<()> {
    let result = decode_arg("the", &args.token)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reports::print_result(&result);
    }
    Ok(())
}

pub fn compare(args: CompareArgs) -> anyhow::Result<()> {
    let mine = decode_arg("your", &args.mine)?;
    let partner = decode_arg("your partner's", &args.partner)?;
    reports::print_comparison(&Comparison::new(&mine, &partner));
    Ok(())
}

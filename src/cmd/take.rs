use crate::reports;
use checkin::catalog::{self, ANSWER_SCALE, CATEGORY_ORDER, QUESTIONS};
use checkin::codec::{self, Comparison};
use checkin::config::Config;
use checkin::session::Session;
use clap::Args;
use std::io::{self, BufRead, Write};
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct TakeArgs {
    /// Partner's share token or link, to compare once you're done
    #[arg(long)]
    pub partner: Option<String>,
}

pub fn run(args: TakeArgs, config: &Config) -> anyhow::Result<()> {
    let mut session = Session::new();
    if let Some(token) = &args.partner {
        if !session.load_partner(token) {
            warn!("Partner link could not be read. Continuing without it.");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let finished = drive(&mut session, stdin.lock(), stdout.lock())?;
    if !finished {
        println!("\nCheck-in not finished. Nothing was scored.");
        return Ok(());
    }

    if let Some(result) = session.result() {
        reports::print_result(result);
        match session.partner() {
            Some(partner) => reports::print_comparison(&Comparison::new(result, partner)),
            None => {
                if let Some(token) = session.share_token() {
                    let link = codec::share_link(
                        &config.share.share_origin,
                        &config.share.share_path,
                        token,
                    );
                    reports::print_share_link(&link);
                }
            }
        }
    }
    Ok(())
}

/// Runs the question loop. Returns false if input ended or the user quit early.
fn drive<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> io::Result<bool> {
    if session.partner().is_some() {
        writeln!(out, "\nYour partner checked in. Now it's your turn!")?;
        writeln!(
            out,
            "Fill out your own check-in and see how your answers compare side by side."
        )?;
    } else {
        writeln!(out, "\nWeekly Check-In: how are we doing?")?;
        writeln!(
            out,
            "{} honest questions. Takes 3 minutes. No wrong answers.",
            QUESTIONS.len()
        )?;
    }
    for key in CATEGORY_ORDER {
        let cat = catalog::category(key);
        writeln!(out, "  {} {}: {}", cat.emoji, cat.label, cat.description)?;
    }
    writeln!(out, "\nAnswer 1-5, 'b' to go back, 'q' to quit.")?;

    session.start();
    let mut lines = input.lines();

    while let Some(q) = session.current_question() {
        let cat = catalog::category(q.category);
        writeln!(
            out,
            "\n[{:>3}%] {} {} · {}/{}",
            session.progress_percent(),
            cat.emoji,
            cat.label,
            q.id,
            QUESTIONS.len()
        )?;
        writeln!(out, "{}", q.text)?;
        let scale: Vec<String> = ANSWER_SCALE
            .iter()
            .map(|o| {
                let marker = if session.current_answer() == Some(o.value) {
                    "*"
                } else {
                    ""
                };
                format!("{}{} {} {}", marker, o.value, o.emoji, o.label)
            })
            .collect();
        writeln!(out, "  {}", scale.join("  "))?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            warn!("Input ended before the check-in was complete");
            return Ok(false);
        };
        let line = line?;

        match line.trim() {
            "q" | "quit" => return Ok(false),
            "b" | "back" => {
                if !session.back().unwrap_or(false) {
                    writeln!(out, "Already at the first question.")?;
                }
            }
            other => match other.parse::<u8>() {
                Ok(value) => {
                    if let Err(e) = session.answer(value) {
                        writeln!(out, "{}", e)?;
                    }
                }
                Err(_) => writeln!(out, "Please answer 1-5, 'b' to go back or 'q' to quit.")?,
            },
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn drives_a_full_check_in_with_corrections() {
        // One bad value, one back-step, then sixteen answers.
        let mut input = String::from("9\n5\nb\n");
        for _ in 0..16 {
            input.push_str("4\n");
        }
        let mut session = Session::new();
        let mut out = Vec::new();

        let finished = drive(&mut session, Cursor::new(input), &mut out).unwrap();

        assert!(finished);
        let result = session.result().unwrap();
        // Reversed questions answered 4 pull patterns down.
        assert_eq!(result.category_score(catalog::CategoryKey::Connection).score, 75);
        assert_eq!(result.category_score(catalog::CategoryKey::Patterns).score, 50);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("outside 1..=5"));
    }

    #[test]
    fn quitting_leaves_session_unscored() {
        let mut session = Session::new();
        let finished = drive(&mut session, Cursor::new("3\nq\n"), io::sink()).unwrap();
        assert!(!finished);
        assert!(session.result().is_none());
    }
}

use checkin::catalog;
use checkin::codec::Comparison;
use checkin::feedback::{Accuracy, FeedbackEntry, FeedbackSummary, Usefulness};
use checkin::scorer::{self, CheckInResult, Tier};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Thriving => Color::Green,
        Tier::Growing => Color::Yellow,
        Tier::Attention => Color::Red,
    }
}

fn diff_cell(diff: i16) -> Cell {
    let cell = Cell::new(format!("{:+}", diff));
    match diff {
        d if d > 0 => cell.fg(Color::Green),
        d if d < 0 => cell.fg(Color::Red),
        _ => cell,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_result(result: &CheckInResult) {
    println!(
        "\n{} Your check-in: {}/100",
        scorer::overall_emoji(result.overall),
        result.overall
    );

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Tier"),
    ]);

    for cs in &result.categories {
        let cat = catalog::category(cs.category);
        table.add_row(vec![
            Cell::new(format!("{} {}", cat.emoji, cat.label)).add_attribute(Attribute::Bold),
            Cell::new(cs.score).fg(Color::Cyan),
            Cell::new(format!("{} {}", cs.tier.emoji(), cs.tier.label())).fg(tier_color(cs.tier)),
        ]);
    }
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("{}", table);

    let focus = result.focus_category();
    println!("\n🎯 Focus area: {} {}", focus.emoji, focus.label);
    println!("   {}", focus.description);
    println!("   ({})", focus.source);
    println!("\n💬 Conversation starters:");
    for starter in focus.conversation_starters {
        println!("   • {}", starter);
    }
}

pub fn print_comparison(cmp: &Comparison) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("You").fg(Color::Cyan),
        Cell::new("Partner").fg(Color::Magenta),
        Cell::new("Diff"),
    ]);

    for c in &cmp.categories {
        let cat = catalog::category(c.category);
        table.add_row(vec![
            Cell::new(format!("{} {}", cat.emoji, cat.label)).add_attribute(Attribute::Bold),
            Cell::new(c.mine).fg(Color::Cyan),
            Cell::new(c.partner).fg(Color::Magenta),
            diff_cell(c.difference),
        ]);
    }
    table.add_row(vec![
        Cell::new("Overall").add_attribute(Attribute::Bold),
        Cell::new(cmp.overall_mine)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(cmp.overall_partner)
            .fg(Color::Magenta)
            .add_attribute(Attribute::Bold),
        diff_cell(cmp.overall_difference),
    ]);
    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("\n👫 Side by side");
    println!("{}", table);

    let gap = cmp.largest_gap();
    if gap.difference != 0 {
        let cat = catalog::category(gap.category);
        println!(
            "   Biggest difference: {} {} ({} points)",
            cat.emoji,
            cat.label,
            gap.difference.abs()
        );
    }
}

pub fn print_share_link(link: &str) {
    println!("\n🔗 Send your partner this link. They fill it out, then you see your scores side by side:");
    println!("   {}", link);
}

pub fn print_feedback_entries(entries: &[FeedbackEntry]) {
    if entries.is_empty() {
        println!("No feedback yet.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Submitted").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Rating"),
        Cell::new("Accurate"),
        Cell::new("Useful"),
        Cell::new("Suggestion"),
    ]);
    for e in entries {
        table.add_row(vec![
            Cell::new(&e.submitted_at),
            Cell::new(e.overall_score),
            Cell::new(e.enjoyment),
            Cell::new(&e.accurate),
            Cell::new(&e.useful),
            Cell::new(e.suggestion.trim()),
        ]);
    }
    println!("{}", table);
}

pub fn print_feedback_summary(summary: &FeedbackSummary) {
    println!(
        "\n📊 Check-in feedback: {} response{} collected",
        summary.total,
        if summary.total == 1 { "" } else { "s" }
    );
    if summary.total == 0 {
        println!("🌱 No feedback yet. Complete a check-in to start collecting responses!");
        return;
    }

    let pct = |n: usize| {
        summary
            .pct(n)
            .map(|p| format!("{}%", p))
            .unwrap_or_else(|| "-".to_string())
    };

    let mut top = new_table();
    top.set_header(vec!["⭐ Avg Usefulness", "✅ Felt Accurate", "🚀 Would Use Again", "Avg Score"]);
    top.add_row(vec![
        summary
            .avg_enjoyment
            .map(|a| format!("{:.1} / 5", a))
            .unwrap_or_else(|| "-".to_string()),
        pct(summary.accurate.yes),
        pct(summary.useful.yes),
        summary
            .avg_score
            .map(|s| format!("{}/100", s))
            .unwrap_or_else(|| "-".to_string()),
    ]);
    println!("{}", top);

    let mut breakdown = new_table();
    breakdown.set_header(vec!["Question", "Answer", "Count", "Share"]);
    for a in Accuracy::iter() {
        let count = match a {
            Accuracy::Yes => summary.accurate.yes,
            Accuracy::Somewhat => summary.accurate.somewhat,
            Accuracy::No => summary.accurate.no,
        };
        breakdown.add_row(vec![
            "Did the score feel accurate?".to_string(),
            a.label().to_string(),
            count.to_string(),
            pct(count),
        ]);
    }
    for u in Usefulness::iter() {
        let count = match u {
            Usefulness::Yes => summary.useful.yes,
            Usefulness::Maybe => summary.useful.maybe,
            Usefulness::No => summary.useful.no,
        };
        breakdown.add_row(vec![
            "Would you use this again?".to_string(),
            u.label().to_string(),
            count.to_string(),
            pct(count),
        ]);
    }
    println!("{}", breakdown);

    if !summary.suggestions.is_empty() {
        println!("\n💡 Suggestions ({})", summary.suggestions.len());
        for s in &summary.suggestions {
            println!("   [{} · score {}] {}", s.date, s.score, s.text);
        }
    }
}

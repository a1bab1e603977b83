use std::time::Duration;

use console::style;
use dynamocards_core::ConceptRecord;
use indicatif::{ProgressBar, ProgressStyle};

pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// One card, numbered from 1 for the reader.
pub fn format_card(position: usize, card: &ConceptRecord) -> String {
    format!(
        "{} {}\n    {}",
        style(format!("[{}]", position + 1)).dim(),
        style(&card.term).cyan().bold(),
        card.definition
    )
}

pub fn format_deck(cards: &[ConceptRecord]) -> String {
    if cards.is_empty() {
        return format!("{}", style("No flashcards.").dim());
    }

    cards
        .iter()
        .enumerate()
        .map(|(position, card)| format_card(position, card))
        .collect::<Vec<_>>()
        .join("\n\n")
}

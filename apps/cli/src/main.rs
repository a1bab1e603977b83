use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use console::style;
use dynamocards_core::{
    AnalyzerClient, ClientConfig, Deck,
    config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT},
    init_tracing,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::{
    command::{Command, HELP, discard_card, parse_command},
    render::{create_spinner, format_deck, format_duration},
};

mod command;
mod render;

#[derive(Parser)]
#[command(name = "dynamocards")]
#[command(about = "Turn a YouTube video into discardable flashcards")]
struct Cli {
    /// Video URL, sent to the backend as-is
    link: String,

    /// Base URL of the analysis backend
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Print the flashcards as JSON and exit
    #[arg(long)]
    json: bool,
}

async fn submit(client: &AnalyzerClient, deck: &mut Deck) {
    let started = Instant::now();
    let spinner = create_spinner("Generating flashcards...");
    let cards = client.fetch_concepts(&deck.request()).await;
    deck.on_loaded(cards);
    spinner.finish_with_message(format!(
        "{} {} flashcards {}",
        style("✓").green().bold(),
        deck.len(),
        style(format!("[{}]", format_duration(started.elapsed()))).dim()
    ));
}

async fn review(client: &AnalyzerClient, deck: &mut Deck) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout
            .write_all(format!("{} ", style("›").cyan().bold()).as_bytes())
            .await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };

        match parse_command(&line) {
            Ok(Command::Discard(index)) => match discard_card(deck, index) {
                Some(card) => println!(
                    "{} Discarded {}",
                    style("✓").green().bold(),
                    style(card.term).dim()
                ),
                None => println!("{}", style("No such card.").yellow()),
            },
            Ok(Command::List) => println!("{}\n", format_deck(deck.cards())),
            Ok(Command::NewLink(link)) => {
                deck.on_link_change(link);
                submit(client, deck).await;
                println!("\n{}\n", format_deck(deck.cards()));
            }
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => return Ok(()),
            Err(e) => {
                debug!(line = %line.trim(), "rejected prompt input: {e}");
                println!("{} {}", style("Error:").red().bold(), e);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = ClientConfig {
        base_url: cli.endpoint,
        timeout: Duration::from_secs(cli.timeout_secs),
    };
    let client = match AnalyzerClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    let mut deck = Deck::new();
    deck.on_link_change(cli.link);

    if cli.json {
        let cards = client.fetch_concepts(&deck.request()).await;
        deck.on_loaded(cards);
        println!("{}", serde_json::to_string_pretty(deck.cards())?);
        return Ok(());
    }

    println!(
        "\n{}  {}\n",
        style("dynamocards").cyan().bold(),
        style("Youtube Link to Flashcards Generator").dim()
    );
    println!("{}", style("─".repeat(60)).dim());

    submit(&client, &mut deck).await;

    println!("{}", style("─".repeat(60)).dim());
    println!("{}\n", format_deck(deck.cards()));
    println!("{}", style(HELP).dim());

    review(&client, &mut deck).await
}

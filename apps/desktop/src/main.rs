use clap::Parser;
use dynamocards_core::{AnalyzerClient, ClientConfig, ConceptRecord, Deck, init_tracing};
use iced::widget::{button, column, row, scrollable, text, text_input};
use iced::{Element, Length, Task};
use tracing::debug;

use crate::flashcard::flashcard;

mod flashcard;

#[derive(Parser)]
#[command(name = "dynamocards-desktop")]
#[command(about = "Turn a YouTube video into discardable flashcards")]
struct Args {
    /// Base URL of the analysis backend
    #[arg(long, default_value = dynamocards_core::config::DEFAULT_BASE_URL)]
    endpoint: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let client = AnalyzerClient::new(&ClientConfig::with_base_url(args.endpoint))?;

    iced::application(move || App::new(client.clone()), App::update, App::view)
        .title("Dynamocards")
        .run()?;

    Ok(())
}

struct App {
    client: AnalyzerClient,
    deck: Deck,
}

#[derive(Debug, Clone)]
enum Message {
    LinkChanged(String),
    Submit,
    ConceptsLoaded(Vec<ConceptRecord>),
    Discard(usize),
}

impl App {
    fn new(client: AnalyzerClient) -> (Self, Task<Message>) {
        (
            Self {
                client,
                deck: Deck::new(),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LinkChanged(link) => self.deck.on_link_change(link),
            Message::Submit => {
                // In-flight requests are not cancelled; the last one to finish wins.
                let client = self.client.clone();
                let request = self.deck.request();
                return Task::perform(
                    async move { client.fetch_concepts(&request).await },
                    Message::ConceptsLoaded,
                );
            }
            Message::ConceptsLoaded(cards) => self.deck.on_loaded(cards),
            Message::Discard(index) => {
                if let Some(card) = self.deck.on_discard(index) {
                    debug!(term = %card.term, "card discarded");
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let cards = self.deck.cards().iter().enumerate().fold(
            column![].spacing(12),
            |cards, (index, card)| {
                cards.push(flashcard(
                    &card.term,
                    &card.definition,
                    Message::Discard(index),
                ))
            },
        );

        column![
            text("Youtube Link to Flashcards Generator").size(24),
            row![
                text_input("Paste Youtube Link here", self.deck.link())
                    .on_input(Message::LinkChanged)
                    .on_submit(Message::Submit),
                button("Generate Flashcards").on_press(Message::Submit),
            ]
            .spacing(10),
            scrollable(cards).height(Length::Fill),
        ]
        .padding(20)
        .spacing(10)
        .into()
    }
}

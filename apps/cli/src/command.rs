use dynamocards_core::{ConceptRecord, Deck};
use tracing::debug;

/// One line of input at the review prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Discard by zero-based index.
    Discard(usize),
    List,
    NewLink(String),
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(pub String);

pub const HELP: &str = "\
d <n>     discard card n
l         list cards
n <link>  analyze another link
q         quit";

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "d" | "discard" => {
            let position: usize = rest
                .parse()
                .map_err(|_| ParseError(format!("expected a card number, got {rest:?}")))?;
            // Card 0 maps past the end, which discard treats as a no-op.
            Ok(Command::Discard(position.checked_sub(1).unwrap_or(usize::MAX)))
        }
        "l" | "list" => Ok(Command::List),
        "n" | "new" if !rest.is_empty() => Ok(Command::NewLink(rest.to_string())),
        "n" | "new" => Err(ParseError("expected a link after n".to_string())),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "" => Ok(Command::List),
        other => Err(ParseError(format!("unknown command {other:?}"))),
    }
}

/// Discard from the prompt; an unknown card number leaves the deck untouched.
pub fn discard_card(deck: &mut Deck, index: usize) -> Option<ConceptRecord> {
    let card = deck.on_discard(index);
    match &card {
        Some(card) => debug!(term = %card.term, "card discarded"),
        None => debug!(index, remaining = deck.len(), "discard matched no card"),
    }
    card
}

use iced::widget::{button, column, container, text};
use iced::{Element, Length};

/// A single card: the term, its definition and a discard control.
pub fn flashcard<'a, Message>(
    term: &'a str,
    definition: &'a str,
    on_discard: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    container(
        column![
            text(term).size(18),
            text(definition),
            button("Discard").on_press(on_discard),
        ]
        .spacing(10),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

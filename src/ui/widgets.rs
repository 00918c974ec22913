use iced::widget::{container, mouse_area, row, text};
use iced::{Color, Element, Theme};

use crate::services::emoji::EmojiRecord;
use crate::ui::app::Message;

// Catppuccin Mocha
pub const BACKGROUND: Color = Color::from_rgb(0.118, 0.118, 0.18);
pub const TEXT: Color = Color::from_rgb(0.804, 0.839, 0.957);
pub const SUBTEXT: Color = Color::from_rgb(0.651, 0.678, 0.784);
pub const ACCENT: Color = Color::from_rgb(0.796, 0.651, 0.969);

/// Render a single result row: symbol plus title, copy on click
pub fn result_row<'a>(
    record: &EmojiRecord,
    is_selected: bool,
    index: usize,
) -> Element<'a, Message> {
    let symbol_text = text(record.symbol).size(22);
    let title_text = text(record.title).size(15).color(TEXT);

    let content = row![symbol_text, title_text]
        .spacing(10)
        .align_y(iced::Alignment::Center);

    let row_container = container(content)
        .width(iced::Length::Fill)
        .padding([6, 12])
        .style(move |_theme: &Theme| {
            if is_selected {
                container::Style {
                    background: Some(iced::Background::Color(Color {
                        a: 0.35,
                        ..ACCENT
                    })),
                    border: iced::Border {
                        radius: 6.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            } else {
                container::Style::default()
            }
        });

    mouse_area(row_container)
        .on_press(Message::SelectIndex(index))
        .into()
}

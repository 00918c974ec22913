use iced::widget::{column, container, scrollable, text, text_input, Column};
use iced::{keyboard, Element, Length, Subscription, Task, Theme};

use crate::config::Config;
use crate::controller::SearchController;
use crate::search::SearchEngine;
use crate::services::clipboard::{CopyBinding, SystemClipboard};

use crate::ui::widgets;

/// The main application state
pub struct Emopick {
    config: Config,
    controller: SearchController,

    // UI state
    selected_index: usize,
    binding: CopyBinding,
    last_copied: Option<String>,
}

/// Messages that drive the application
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    CopySelected,
    SelectIndex(usize),
}

impl Emopick {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let limit = config.behavior.max_results as usize;
        let controller = SearchController::new(SearchEngine::default(), limit);

        // The initial render binds the default unfiltered view
        let binding = CopyBinding::bind(controller.results());

        let emopick = Self {
            config,
            controller,
            selected_index: 0,
            binding,
            last_copied: None,
        };

        (emopick, text_input::focus(text_input::Id::new("search_input")))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.selected_index = 0;
                self.last_copied = None;

                // Release before rebinding so activations never see a
                // stale result set
                self.binding.unbind();
                let binding = CopyBinding::bind(self.controller.on_query_change(&query));
                self.binding = binding;
                Task::none()
            }
            Message::KeyPressed(key, _modifiers) => match key {
                keyboard::Key::Named(keyboard::key::Named::ArrowDown) => {
                    let result_count = self.controller.results().len();
                    if result_count > 0 {
                        self.selected_index = (self.selected_index + 1).min(result_count - 1);
                    }
                    Task::none()
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowUp) => {
                    self.selected_index = self.selected_index.saturating_sub(1);
                    Task::none()
                }
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    if self.controller.query().is_empty() {
                        self.binding.unbind();
                        iced::window::get_oldest().and_then(iced::window::close)
                    } else {
                        self.update(Message::QueryChanged(String::new()))
                    }
                }
                _ => Task::none(),
            },
            Message::CopySelected => self.copy_selected(),
            Message::SelectIndex(index) => {
                self.selected_index = index;
                self.copy_selected()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        // Search input
        let input = text_input("Search emoji...", self.controller.query())
            .id(text_input::Id::new("search_input"))
            .on_input(Message::QueryChanged)
            .on_submit(Message::CopySelected)
            .size(18)
            .padding(12);

        // Results list
        let results_column: Column<Message> = self
            .controller
            .results()
            .iter()
            .enumerate()
            .fold(Column::new().spacing(0), |col, (i, record)| {
                col.push(widgets::result_row(record, i == self.selected_index, i))
            });

        let results_scrollable = scrollable(results_column).height(Length::Fill);

        let mut content = column![input, results_scrollable].spacing(4).padding(8);

        if let Some(ref title) = self.last_copied {
            content = content.push(
                text(format!("Copied {}", title))
                    .size(12)
                    .color(widgets::SUBTEXT),
            );
        }

        let opacity = self.config.appearance.opacity as f32;

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(iced::Color {
                    a: opacity,
                    ..widgets::BACKGROUND
                })),
                border: iced::Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| match &key {
            keyboard::Key::Named(
                keyboard::key::Named::ArrowDown
                | keyboard::key::Named::ArrowUp
                | keyboard::key::Named::Escape,
            ) => Some(Message::KeyPressed(key, modifiers)),
            _ => None,
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::CatppuccinMocha
    }

    fn copy_selected(&mut self) -> Task<Message> {
        let results = self.controller.results();
        if results.is_empty() {
            return Task::none();
        }

        let record = results[self.selected_index];

        match SystemClipboard::new() {
            Ok(mut clipboard) => {
                match self.binding.copy(self.selected_index, &mut clipboard) {
                    Ok(()) => self.last_copied = Some(record.title.to_string()),
                    Err(e) => eprintln!("[Emopick] {}", e),
                }
            }
            Err(e) => eprintln!("[Emopick] {}", e),
        }

        Task::none()
    }
}

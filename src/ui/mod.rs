mod app;
pub mod widgets;

use crate::config::Config;

pub fn run(config: Config) -> iced::Result {
    let window_width = config.appearance.window_width as f32;

    iced::application("Emopick", app::Emopick::update, app::Emopick::view)
        .subscription(app::Emopick::subscription)
        .theme(app::Emopick::theme)
        .window_size(iced::Size::new(window_width, 480.0))
        .resizable(false)
        .position(iced::window::Position::Centered)
        .run_with(move || app::Emopick::new(config))
}

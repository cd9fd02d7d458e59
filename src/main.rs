//! SpinControl demo: one labelled spinner wired to a status line.

use spinbox_ui::prelude::*;
use spinbox_ui::run_with_settings;

struct SpinApp {
    spinner: SpinnerState,
    last_reported: i32,
}

enum Message {
    ValueChanged(i32, SpinnerState),
    StateSynced(SpinnerState),
    FocusAdvanced(i32, SpinnerState),
}

impl Application for SpinApp {
    type Message = Message;

    fn new() -> Self {
        let mut spinner = SpinnerState::new(0);
        spinner.set_range(-500, 500);
        spinner.set_step(5);
        Self {
            spinner,
            last_reported: 0,
        }
    }

    fn title(&self) -> String {
        String::from("SpinControl")
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::ValueChanged(value, state) => {
                log::info!("value changed: {value}");
                self.spinner = state;
                self.last_reported = value;
            }
            // The demo has a single focusable control, so Tab just commits.
            Message::FocusAdvanced(value, state) => {
                self.spinner = state;
                self.last_reported = value;
            }
            Message::StateSynced(state) => self.spinner = state,
        }
    }

    fn view(&self) -> Element<Message> {
        Element::new(
            column(vec![
                Element::new(
                    spinner(&self.spinner)
                        .label("Variable:")
                        .width(200.0)
                        .on_change(Message::ValueChanged)
                        .on_state(Message::StateSynced)
                        .on_tab(Message::FocusAdvanced),
                ),
                Element::new(
                    text(format!("Last reported: {}", self.last_reported))
                        .color(Color::TEXT_SECONDARY),
                ),
            ])
            .padding(16.0)
            .spacing(12.0),
        )
    }
}

fn main() {
    let settings = Settings {
        window_title: Some(String::from("SpinControl")),
        window_size: (320, 140),
        min_window_size: Some((240, 100)),
        resizable: true,
        log_level: log::LevelFilter::Debug,
    };
    if let Err(e) = run_with_settings::<SpinApp>(settings) {
        eprintln!("Application error: {e}");
    }
}

//! Application lifecycle: the main loop, key input, and ticks.

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};

use crate::commands::{InputContext, KeyMapper};
use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

use super::App;
use super::store::{Action, Modal};

impl App {
    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.reload_history();

        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.tick();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }

            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Which keybindings apply right now.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        match self.store.state().modal.current() {
            None => InputContext::Main,
            Some(Modal::AddContact(_)) => InputContext::AddContact,
            Some(Modal::ConfirmQuit) => InputContext::ConfirmQuit,
        }
    }

    /// Maps and executes one key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let command = KeyMapper::map_key(key, &self.input_context());
        self.execute_command(&command);
    }

    /// Ages notifications by one tick.
    pub fn tick(&mut self) {
        self.store.dispatch(Action::Tick);
    }
}

//! Command pattern for key event handling.
//!
//! Key input is translated to semantic [`AppCommand`]s by [`KeyMapper`], a
//! pure function of the key and the current [`InputContext`]. The `App`
//! executes the command.
//!
//! # Example
//!
//! ```ignore
//! let context = app.input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(&command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which keybindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the history list.
    Main,
    /// The add-contact modal is open and accepts a name.
    AddContact,
    /// The quit confirmation is open.
    ConfirmQuit,
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Ask for confirmation before exiting.
    RequestQuit,
    /// Exit immediately.
    Quit,
    /// Reload the history file.
    Reload,

    // === Navigation ===
    MoveUp,
    MoveDown,

    // === Row Actions ===
    /// Open the selected transaction in the block explorer.
    ViewInExplorer,
    /// Open the add-contact modal for the selected row's counterparty.
    AddContact,
    /// Copy the selected row's counterparty address.
    CopyAddress,

    // === Modal Control ===
    /// Close the modal or hide the newest notification.
    Dismiss,
    /// Type a character into the contact name.
    TypeChar(char),
    /// Delete the last character of the contact name.
    Backspace,
    /// Save the contact being edited.
    SubmitContact,

    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// `Ctrl+C` exits from every context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }

        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::AddContact => Self::map_add_contact_keys(key),
            InputContext::ConfirmQuit => Self::map_confirm_quit_keys(key),
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::RequestQuit,
            KeyCode::Char('r') => AppCommand::Reload,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Enter | KeyCode::Char('v') => AppCommand::ViewInExplorer,
            KeyCode::Char('a') => AppCommand::AddContact,
            KeyCode::Char('c') => AppCommand::CopyAddress,
            KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_add_contact_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::SubmitContact,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_confirm_quit_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('y' | 'Y' | 'q') | KeyCode::Enter => AppCommand::Quit,
            KeyCode::Char('n' | 'N') | KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

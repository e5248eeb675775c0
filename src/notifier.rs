use log::{info, warn};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Blocking user-facing messages. Each call returns only once the user has
/// dismissed the message.
pub trait Notifier {
    fn info(&mut self, title: &str, message: &str);
    fn warning(&mut self, title: &str, message: &str);
    fn error(&mut self, title: &str, message: &str);
    /// Yes/No question. `true` only on an explicit yes.
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

/// Native message boxes.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdNotifier;

impl RfdNotifier {
    fn show(level: MessageLevel, title: &str, message: &str, buttons: MessageButtons) -> MessageDialogResult {
        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(buttons)
            .show()
    }
}

impl Notifier for RfdNotifier {
    fn info(&mut self, title: &str, message: &str) {
        info!("{}: {}", title, message);
        Self::show(MessageLevel::Info, title, message, MessageButtons::Ok);
    }

    fn warning(&mut self, title: &str, message: &str) {
        warn!("{}: {}", title, message);
        Self::show(MessageLevel::Warning, title, message, MessageButtons::Ok);
    }

    fn error(&mut self, title: &str, message: &str) {
        log::error!("{}: {}", title, message);
        Self::show(MessageLevel::Error, title, message, MessageButtons::Ok);
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        matches!(
            Self::show(MessageLevel::Info, title, message, MessageButtons::YesNo),
            MessageDialogResult::Yes
        )
    }
}

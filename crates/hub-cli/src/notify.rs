//! Terminal rendering of controller notifications.

use hub_views::{Notification, NotificationLevel, Notifier};

use crate::ui;

/// Prints notifications to stderr so they never mix with command output.
/// Info notifications are dropped in quiet mode; errors always print.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        if let Some(line) = format_notification(&notification, self.quiet, ui::prefs().stderr_color)
        {
            eprintln!("{line}");
        }
    }
}

fn format_notification(notification: &Notification, quiet: bool, color: bool) -> Option<String> {
    if quiet && notification.level == NotificationLevel::Info {
        return None;
    }
    let tag = match (notification.level, color) {
        (NotificationLevel::Error, true) => "\u{1b}[31merror\u{1b}[0m".to_string(),
        (NotificationLevel::Info, true) => "\u{1b}[32minfo\u{1b}[0m".to_string(),
        (level, false) => level.as_str().to_string(),
    };
    Some(format!(
        "[{tag}] {}: {}",
        notification.title, notification.message
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quiet_hides_info_but_not_errors() {
        let info = Notification::info("Shared", "\"Tax tips\" is ready to send.");
        let error = Notification::error("Error", "Failed to load content.");

        assert_eq!(format_notification(&info, true, false), None);
        assert_eq!(
            format_notification(&error, true, false).as_deref(),
            Some("[error] Error: Failed to load content.")
        );
        assert_eq!(
            format_notification(&info, false, false).as_deref(),
            Some("[info] Shared: \"Tax tips\" is ready to send.")
        );
    }
}

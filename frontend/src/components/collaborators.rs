//! Presentation surfaces the views call out to. Implemented by whatever draws
//! the UI; closures work for quick wiring and tests.

/// Yes/no gate shown before a destructive action
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<T: FnMut(&str) -> bool> Confirm for T {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Blocking notification shown to the user after a failure
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl<T: FnMut(&str)> Notifier for T {
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// Notifier that only writes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        log::error!("{}", message);
    }
}

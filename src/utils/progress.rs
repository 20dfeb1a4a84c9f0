// file: src/utils/progress.rs
// description: spinner shown while waiting on remote calls
// reference: uses indicatif for progress bars

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: impl Into<String>, colored: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        let template = if colored {
            "{spinner:.green} {msg} [{elapsed}]"
        } else {
            "{spinner} {msg} [{elapsed}]"
        };

        if let Ok(style) = ProgressStyle::default_spinner().template(template) {
            bar.set_style(style);
        }
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let spinner = Spinner::new("Uploading", false);
        spinner.set_message("Importing");
        assert_eq!(spinner.bar.message(), "Importing");
        spinner.finish();
        assert!(spinner.bar.is_finished());
    }
}

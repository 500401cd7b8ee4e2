use crate::constants::{ERROR_PREFIX, FOUND_PREFIX, SUCCESS_PREFIX, UPLOAD_PREFIX};

/// Final result of one batch run. The two lists preserve scan order and
/// together cover every discovered file exactly once.
#[derive(Debug, Default, Clone)]
pub struct BatchReport {
    pub successes: Vec<(String, String)>,
    pub failures: Vec<(String, String)>,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }
}

/// Receives batch progress events from the driver. Lets the presentation
/// layer (console, logs, UI) be swapped without touching the core loop.
pub trait BatchObserver {
    fn on_discovered(&mut self, count: usize);
    fn on_file_start(&mut self, name: &str, index: usize, total: usize);
    fn on_file_succeeded(&mut self, name: &str, url: &str);
    fn on_file_failed(&mut self, name: &str, reason: &str);
    fn on_batch_complete(&mut self, report: &BatchReport);
}

/// Console presentation of batch progress, line-per-event.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl BatchObserver for ConsoleReporter {
    fn on_discovered(&mut self, count: usize) {
        crate::info!("{} Found {} images", FOUND_PREFIX, count);
    }

    fn on_file_start(&mut self, name: &str, index: usize, total: usize) {
        crate::info!("{} Processing {}/{}: {}", UPLOAD_PREFIX, index, total, name);
    }

    fn on_file_succeeded(&mut self, _name: &str, url: &str) {
        crate::info!("{}", url);
    }

    fn on_file_failed(&mut self, name: &str, reason: &str) {
        crate::error!("{} failed: {}", name, reason);
    }

    fn on_batch_complete(&mut self, report: &BatchReport) {
        crate::info!("\nDone!");
        crate::info!("{} Succeeded: {}", SUCCESS_PREFIX, report.success_count());
        crate::info!("{} Failed: {}", ERROR_PREFIX, report.failure_count());

        if !report.failures.is_empty() {
            crate::info!("\nFailed images:");
            for (name, reason) in &report.failures {
                crate::info!("- {}: {}", name, reason);
            }
        }
    }
}

/// Observer that ignores every event. Useful for library callers that only
/// want the returned [`BatchReport`].
#[derive(Debug, Default)]
pub struct NullObserver;

impl BatchObserver for NullObserver {
    fn on_discovered(&mut self, _count: usize) {}
    fn on_file_start(&mut self, _name: &str, _index: usize, _total: usize) {}
    fn on_file_succeeded(&mut self, _name: &str, _url: &str) {}
    fn on_file_failed(&mut self, _name: &str, _reason: &str) {}
    fn on_batch_complete(&mut self, _report: &BatchReport) {}
}

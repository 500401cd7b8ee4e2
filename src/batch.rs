use crate::constants::PACING_DELAY;
use crate::error::Result;
use crate::pacing::{FixedIntervalPacer, Pacer};
use crate::processing::{file_label, prepare_image};
use crate::report::{BatchObserver, BatchReport};
use crate::scanner::scan_directory;
use crate::upload::{ImageHost, ImgurClient};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub client_id: String,
    pub folder: PathBuf,
    pub delay: Duration,
}

impl BatchConfig {
    pub fn new(client_id: impl Into<String>, folder: impl Into<PathBuf>) -> Self {
        Self {
            client_id: client_id.into(),
            folder: folder.into(),
            delay: PACING_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Wires up the Imgur client and the fixed-interval pacer, then runs
    /// the batch.
    pub fn run<O: BatchObserver>(&self, observer: &mut O) -> Result<BatchReport> {
        let host = ImgurClient::new(self.client_id.clone());
        let mut pacer = FixedIntervalPacer::new(self.delay);
        run_batch(&self.folder, &host, &mut pacer, observer)
    }
}

/// Processes every image in `folder` in scan order: normalize, upload,
/// record the outcome.
///
/// A missing directory aborts the run before any file is touched. Per-file
/// errors never do: they are recorded in the report's failure list and the
/// batch moves on. The pacer runs between consecutive files (also after a
/// failure), never after the last one.
pub fn run_batch<H, P, O>(
    folder: &Path,
    host: &H,
    pacer: &mut P,
    observer: &mut O,
) -> Result<BatchReport>
where
    H: ImageHost,
    P: Pacer,
    O: BatchObserver,
{
    let image_files = scan_directory(folder)?;
    let total = image_files.len();

    observer.on_discovered(total);

    let mut report = BatchReport::default();

    for (index, path) in image_files.iter().enumerate() {
        let name = file_label(path);
        observer.on_file_start(&name, index + 1, total);

        match prepare_image(path).and_then(|image| host.upload(&image)) {
            Ok(url) => {
                observer.on_file_succeeded(&name, &url);
                report.successes.push((name, url));
            }
            Err(e) => {
                let reason = e.to_string();
                observer.on_file_failed(&name, &reason);
                report.failures.push((name, reason));
            }
        }

        if index + 1 < total {
            pacer.pause();
        }
    }

    observer.on_batch_complete(&report);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadToolError;
    use crate::processing::PreparedImage;
    use crate::report::NullObserver;

    struct AlwaysOk;

    impl ImageHost for AlwaysOk {
        fn upload(&self, _image: &PreparedImage) -> Result<String> {
            Ok("https://i.imgur.com/x.jpg".to_string())
        }
    }

    struct AlwaysRejected;

    impl ImageHost for AlwaysRejected {
        fn upload(&self, _image: &PreparedImage) -> Result<String> {
            Err(UploadToolError::HttpStatus {
                status: 429,
                body: "rate limited".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct CountingPacer {
        pauses: usize,
    }

    impl Pacer for CountingPacer {
        fn pause(&mut self) {
            self.pauses += 1;
        }
    }

    fn write_png(dir: &Path, name: &str) {
        let img = image::RgbImage::new(2, 2);
        img.save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_pacer_skipped_after_last_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        write_png(temp_dir.path(), "a.png");
        write_png(temp_dir.path(), "b.png");
        write_png(temp_dir.path(), "c.png");

        let mut pacer = CountingPacer::default();
        let report = run_batch(
            temp_dir.path(),
            &AlwaysOk,
            &mut pacer,
            &mut NullObserver,
        )
        .unwrap();

        assert_eq!(report.success_count(), 3);
        assert_eq!(pacer.pauses, 2);
    }

    #[test]
    fn test_pacer_runs_even_after_failure() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        write_png(temp_dir.path(), "a.png");
        write_png(temp_dir.path(), "b.png");

        let mut pacer = CountingPacer::default();
        let report = run_batch(
            temp_dir.path(),
            &AlwaysRejected,
            &mut pacer,
            &mut NullObserver,
        )
        .unwrap();

        assert_eq!(report.failure_count(), 2);
        assert_eq!(pacer.pauses, 1);
    }

    #[test]
    fn test_single_file_no_pause() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        write_png(temp_dir.path(), "only.png");

        let mut pacer = CountingPacer::default();
        run_batch(
            temp_dir.path(),
            &AlwaysOk,
            &mut pacer,
            &mut NullObserver,
        )
        .unwrap();

        assert_eq!(pacer.pauses, 0);
    }

    #[test]
    fn test_every_file_lands_in_exactly_one_list() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        write_png(temp_dir.path(), "good.png");
        std::fs::write(temp_dir.path().join("broken.jpg"), b"not an image").unwrap();

        let mut pacer = CountingPacer::default();
        let report = run_batch(
            temp_dir.path(),
            &AlwaysOk,
            &mut pacer,
            &mut NullObserver,
        )
        .unwrap();

        assert_eq!(report.total(), 2);
        assert_eq!(report.successes[0].0, "good.png");
        assert_eq!(report.failures[0].0, "broken.jpg");
    }

    #[test]
    fn test_missing_directory_aborts_before_loop() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let mut pacer = CountingPacer::default();
        let result = run_batch(&missing, &AlwaysOk, &mut pacer, &mut NullObserver);

        assert!(matches!(
            result,
            Err(UploadToolError::DirectoryNotFound(_))
        ));
        assert_eq!(pacer.pauses, 0);
    }

    #[test]
    fn test_batch_config_defaults() {
        let config = BatchConfig::new("abc", "/tmp/photos");
        assert_eq!(config.delay, Duration::from_secs(1));

        let config = config.with_delay(Duration::from_millis(250));
        assert_eq!(config.delay, Duration::from_millis(250));
    }
}

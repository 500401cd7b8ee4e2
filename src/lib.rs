pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod pacing;
pub mod processing;
pub mod report;
pub mod scanner;
pub mod upload;

pub use batch::{run_batch, BatchConfig};
pub use error::{Result, UploadToolError};
pub use pacing::{FixedIntervalPacer, Pacer};
pub use processing::{prepare_image, PreparedImage};
pub use report::{BatchObserver, BatchReport, ConsoleReporter, NullObserver};
pub use scanner::{is_supported_image, scan_directory};
pub use upload::{parse_upload_response, ImageHost, ImgurClient};

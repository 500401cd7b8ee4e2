use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img2url",
    about = "Batch-upload a folder of images to Imgur and collect the hosted URLs",
    long_about = "img2url walks a folder, re-encodes every supported image (JPEG, PNG, GIF, BMP) \
                  to JPEG and uploads it to Imgur via its anonymous REST API, printing the hosted \
                  URL for each one. Uploads are paced to stay under Imgur's rate limits.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img2url upload ./photos --client-id abc123def456\n  \
    IMGUR_CLIENT_ID=abc123def456 img2url upload ./photos --delay 2\n  \
    img2url scan ./photos"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short = 'q', long, global = true, help = "Suppress progress output")]
    pub quiet: bool,

    #[arg(short = 'v', long, global = true, help = "Print extra diagnostic output")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Upload every supported image in a folder to Imgur",
        long_about = "Scan a folder (non-recursively) for supported images, normalize each one to \
                      an RGB JPEG and upload it. Per-file failures are reported and the batch \
                      continues; only a missing folder aborts the run."
    )]
    Upload {
        #[arg(help = "Folder containing the images to upload")]
        folder: PathBuf,

        #[arg(
            short = 'c',
            long,
            env = "IMGUR_CLIENT_ID",
            help = "Imgur API client ID",
            long_help = "Client ID of a registered Imgur application, sent as \
                         'Authorization: Client-ID <id>'. Can also be supplied via the \
                         IMGUR_CLIENT_ID environment variable."
        )]
        client_id: String,

        #[arg(
            short = 'd',
            long,
            default_value_t = 1,
            help = "Pause between uploads in seconds (default: 1)",
            long_help = "Fixed pause inserted between consecutive uploads to avoid triggering \
                         Imgur's rate limiting. Applied even after a failed upload, skipped \
                         after the last file."
        )]
        delay: u64,
    },

    #[command(
        about = "List the images a folder scan would pick up",
        long_about = "Dry run of the scanner: prints every file in the folder that the upload \
                      command would process, without touching the network."
    )]
    Scan {
        #[arg(help = "Folder to scan for supported images")]
        folder: PathBuf,
    },
}

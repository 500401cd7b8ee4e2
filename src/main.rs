use clap::Parser;
use img2url::cli::{Args, Commands};
use img2url::constants::{FOUND_PREFIX, INFO_PREFIX};
use img2url::processing::file_label;
use img2url::{info, logger, scan_directory, verbose, BatchConfig, ConsoleReporter, Result};
use std::path::Path;
use std::time::Duration;

fn main() -> Result<()> {
    let args = Args::parse();

    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    match args.command {
        Commands::Upload {
            folder,
            client_id,
            delay,
        } => {
            let config = BatchConfig::new(client_id, folder)
                .with_delay(Duration::from_secs(delay));
            verbose!("Pacing delay between uploads: {:?}", config.delay);
            let mut reporter = ConsoleReporter;
            config.run(&mut reporter)?;
        }
        Commands::Scan { folder } => {
            show_scan(&folder)?;
        }
    }

    Ok(())
}

fn show_scan(folder: &Path) -> Result<()> {
    let files = scan_directory(folder)?;

    info!("{} Found {} images in {:?}", FOUND_PREFIX, files.len(), folder);
    for file in &files {
        info!("{} {}", INFO_PREFIX, file_label(file));
    }

    Ok(())
}

//! # mdindex
//!
//! Writes a linked table of contents to the top of a markdown file.
//!
//! ## Usage
//!
//! Refresh the index in place:
//! ```sh
//! mdindex README.md
//! ```
//!
//! Fail when the committed index is stale:
//! ```sh
//! mdindex --check README.md
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use color_eyre::Result;
use std::path::Path;
use std::process;

use mdindex::io::{self, WriteMode};
use mdindex::{Config, index, parser};

fn main() -> Result<()> {
    color_eyre::install()?;

    // Handle dynamic shell completions
    #[cfg(feature = "unstable-dynamic")]
    clap_complete::CompleteEnv::with_factory(|| {
        use clap::CommandFactory;
        Cli::command()
    })
    .complete();

    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let Some(file) = args.file.as_deref() else {
        eprintln!("Usage: mdindex [OPTIONS] <FILE>");
        eprintln!("\nFor more information, try '--help'.");
        process::exit(1);
    };

    let config = Config::load();

    let content = match io::read_document(file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("failed to open the file: {}", e);
            process::exit(1);
        }
    };
    log::info!("read {} bytes from {}", content.len(), file.display());

    if args.json {
        let forest = parser::parse_headers(&index::clean(&content));
        println!("{}", serde_json::to_string_pretty(&forest)?);
        return Ok(());
    }

    if args.check {
        return check_index(file, &content);
    }

    let output = if args.clean {
        index::clean(&content)
    } else {
        match index::generate(&content) {
            Ok(output) => output,
            Err(e) => {
                eprintln!("failed to generate index list: {}", e);
                process::exit(1);
            }
        }
    };

    if args.stdout {
        print!("{}", output);
        return Ok(());
    }

    let mode = if args.direct_write {
        WriteMode::Direct
    } else {
        config.write_mode()
    };
    log::info!("writing {} ({:?})", file.display(), mode);

    if let Err(e) = io::write_document(file, &output, mode) {
        eprintln!("failed to write to the file: {}", e);
        process::exit(1);
    }

    if !(args.quiet || config.output.quiet) {
        println!("done");
    }
    Ok(())
}

fn check_index(file: &Path, content: &str) -> Result<()> {
    match index::is_up_to_date(content) {
        Ok(true) => {
            log::info!("{} is up to date", file.display());
            Ok(())
        }
        Ok(false) => {
            eprintln!("{}: index is out of date", file.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("failed to generate index list: {}", e);
            process::exit(1);
        }
    }
}

use clap::Parser;
use std::path::PathBuf;

#[cfg(feature = "unstable-dynamic")]
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate, ValueCompleter};

#[derive(Parser, Debug)]
#[command(name = "mdindex")]
#[command(version)]
#[command(about = "Generate a table of contents inside a markdown file")]
#[command(
    long_about = "mdindex - Writes a linked table of contents to the top of a markdown file.\n\n\
    The index is placed between <!-- INDEX BEGIN --> and <!-- INDEX END --> markers.\n\
    Running the tool again replaces the existing index instead of adding a new one.\n\n\
    Examples:\n  \
    mdindex README.md             # Write or refresh the index\n  \
    mdindex --check README.md     # Fail if the index is stale\n  \
    mdindex --stdout README.md    # Print the result, leave the file alone\n  \
    mdindex --clean README.md     # Remove the index"
)]
pub struct Cli {
    /// Markdown file to index
    ///
    /// The file is rewritten in place with the fresh index at the top.
    #[arg(add = markdown_file_completer())]
    pub file: Option<PathBuf>,

    /// Print the indexed document instead of writing it back
    #[arg(long = "stdout", conflicts_with_all = ["check", "json"])]
    pub stdout: bool,

    /// Only check whether the index is up to date (non-zero exit if stale)
    ///
    /// The file is never modified. Useful in CI or pre-commit hooks.
    #[arg(long = "check", conflicts_with_all = ["clean", "json"])]
    pub check: bool,

    /// Remove the generated index instead of regenerating it
    #[arg(long = "clean")]
    pub clean: bool,

    /// Print the heading tree as JSON and exit
    #[arg(long = "json", conflicts_with = "clean")]
    pub json: bool,

    /// Overwrite the file in place instead of through a temp file
    ///
    /// Overrides `[write] atomic` from the config file.
    #[arg(long = "direct-write")]
    pub direct_write: bool,

    /// Do not print the success message
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level implied by the -v count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[cfg(feature = "unstable-dynamic")]
fn markdown_file_completer() -> ArgValueCompleter {
    use std::ffi::OsStr;
    use std::path::Path;

    struct MarkdownCompleter;

    impl ValueCompleter for MarkdownCompleter {
        fn complete(&self, current: &OsStr) -> Vec<CompletionCandidate> {
            let input = current.to_string_lossy();
            let input_path = Path::new(input.as_ref());

            // "docs/" lists docs, "docs/RE" lists docs filtered by "RE"
            let (search_dir, prefix) = if input.is_empty() {
                (Path::new("."), String::new())
            } else if input.ends_with('/') || input.ends_with('\\') {
                (input_path, String::new())
            } else {
                let parent = input_path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new("."));
                let prefix = input_path
                    .file_name()
                    .map(|s| s.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                (parent, prefix)
            };

            let Ok(entries) = std::fs::read_dir(search_dir) else {
                return vec![];
            };

            entries
                .filter_map(Result::ok)
                .filter_map(|entry| {
                    let path = entry.path();
                    let name = path.file_name()?.to_string_lossy().to_string();
                    if !name.to_lowercase().starts_with(&prefix) {
                        return None;
                    }

                    let value = if search_dir == Path::new(".") {
                        name
                    } else {
                        search_dir.join(&name).to_string_lossy().to_string()
                    };

                    if path.is_dir() {
                        Some(CompletionCandidate::new(format!("{value}/")).help(Some("directory".into())))
                    } else if is_markdown(&path) {
                        Some(CompletionCandidate::new(value))
                    } else {
                        None
                    }
                })
                .collect()
        }
    }

    ArgValueCompleter::new(MarkdownCompleter)
}

#[cfg(feature = "unstable-dynamic")]
fn is_markdown(path: &std::path::Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| ext == "md" || ext == "markdown")
}

#[cfg(not(feature = "unstable-dynamic"))]
fn markdown_file_completer() -> clap::builder::ValueHint {
    clap::ValueHint::FilePath
}

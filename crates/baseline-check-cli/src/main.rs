//! baseline-check — entry point.

use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use baseline_check::{resolve_documentation, Category};
use baseline_check_cli::config::{load_dataset, resolve_data_dir, resolve_dataset_path};
use baseline_check_cli::error::{exit_codes, CliError};
use baseline_check_cli::input::read_code;
use baseline_check_cli::render::{
    bookmark_line, history_line, render, Format, ListingArgs, TextOptions,
};
use baseline_check_cli::samples::{find_sample, sample_names, SAMPLES};
use baseline_check_cli::share::{decode_fragment, encode_fragment};
use baseline_check_cli::{App, FileStorage};

#[derive(Parser)]
#[command(
    name = "baseline-check",
    about = "Detect web-platform features in a snippet and check their Baseline support",
    version
)]
struct Cli {
    /// Custom baseline dataset (JSON object of feature -> true/false/null).
    /// Also reads from BASELINE_CHECK_DATASET.
    #[arg(long, global = true)]
    dataset: Option<String>,

    /// Directory for history and bookmarks.
    /// Also reads from BASELINE_CHECK_DATA.
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a snippet from a file or stdin.
    Analyze {
        /// Input file, or `-` for stdin (default).
        file: Option<String>,

        /// Report format.
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Write the report to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not record this analysis in history.
        #[arg(long)]
        no_history: bool,

        /// Include documentation links in the text report.
        #[arg(long)]
        docs: bool,

        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Browse past analyses.
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Manage saved snippets.
    Bookmark {
        #[command(subcommand)]
        command: BookmarkCommand,
    },

    /// Print the documentation link for a feature.
    Docs {
        /// Feature identifier, e.g. `css-grid`.
        feature: String,
    },

    /// List detectable features with their dataset status.
    Features {
        /// Only list one catalog category.
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// Encode or decode share links.
    Share {
        #[command(subcommand)]
        command: ShareCommand,
    },

    /// List the sample snippets, or print or analyze one of them.
    Samples {
        /// Sample name (css, javascript, html).
        name: Option<String>,

        /// Analyze the sample instead of printing it.
        #[arg(long)]
        analyze: bool,

        /// Report format when analyzing.
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   baseline-check completions bash > ~/.local/share/bash-completion/completions/baseline-check
    ///   baseline-check completions zsh > ~/.zfunc/_baseline-check
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// List recorded analyses, newest first.
    List,
    /// Show one recorded analysis.
    Show {
        id: String,
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        #[command(flatten)]
        listing: ListingArgs,
    },
    /// Delete all history.
    Clear,
}

#[derive(Subcommand)]
enum BookmarkCommand {
    /// Analyze a snippet and save it under a name.
    Add {
        name: String,
        /// Input file, or `-` for stdin (default).
        file: Option<String>,
    },
    /// List bookmarks, newest first.
    List,
    /// Remove a bookmark by id.
    Remove { id: String },
}

#[derive(Subcommand)]
enum ShareCommand {
    /// Print a `code=...` fragment for a snippet.
    Encode {
        /// Input file, or `-` for stdin (default).
        file: Option<String>,
    },
    /// Print the snippet carried by a fragment or share URL.
    Decode { fragment: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Css,
    Html,
    Js,
    Form,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Css => Category::Css,
            CategoryArg::Html => Category::Html,
            CategoryArg::Js => Category::Js,
            CategoryArg::Form => Category::Form,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        let code = e
            .downcast_ref::<CliError>()
            .map(CliError::exit_code)
            .unwrap_or(exit_codes::FAILURE);
        std::process::exit(code);
    }
}

/// Text report options from the shared flags.
fn text_options(format: Format, with_docs: bool, listing: &ListingArgs) -> TextOptions {
    let listing = listing.to_query();
    if listing.is_some() && format != Format::Text {
        tracing::warn!("Listing flags only apply to the text report");
    }
    TextOptions { with_docs, listing }
}

/// Load the dataset and open persistence for commands that need them.
fn open_app(dataset: Option<&str>, data_dir: Option<&str>) -> anyhow::Result<App<FileStorage>> {
    let dataset_path = resolve_dataset_path(dataset);
    let dataset = load_dataset(dataset_path.as_deref()).with_context(|| match &dataset_path {
        Some(path) => format!("could not load dataset {}", path.display()),
        None => "could not load the embedded dataset".to_string(),
    })?;
    let data_dir = resolve_data_dir(data_dir);
    tracing::debug!("Data dir: {}", data_dir.display());
    Ok(App::new(dataset, FileStorage::new(data_dir)))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let app = || open_app(cli.dataset.as_deref(), cli.data_dir.as_deref());

    match cli.command {
        Commands::Analyze {
            file,
            format,
            output,
            no_history,
            docs,
            listing,
        } => {
            let app = app()?;
            let code = read_code(file.as_deref())?;
            let result = app.analyze(&code)?;
            if !no_history {
                app.record(&code, &result);
            }

            let report = render(&result, format, &text_options(format, docs, &listing))?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &report)
                        .with_context(|| format!("could not write {}", path.display()))?;
                    eprintln!("Report written to {}", path.display());
                }
                None => print!("{report}"),
            }
        }

        Commands::History { command } => {
            let app = app()?;
            match command {
                HistoryCommand::List => {
                    let items = app.history().list()?;
                    if items.is_empty() {
                        println!("No history yet.");
                    }
                    for item in &items {
                        println!("{}", history_line(item));
                    }
                }
                HistoryCommand::Show {
                    id,
                    format,
                    listing,
                } => {
                    let item = app.history_entry(&id)?;
                    if format == Format::Text {
                        println!("{}\n", item.code.trim_end());
                    }
                    let options = text_options(format, false, &listing);
                    print!("{}", render(&item.results, format, &options)?);
                }
                HistoryCommand::Clear => {
                    app.history().clear()?;
                    println!("History cleared.");
                }
            }
        }

        Commands::Bookmark { command } => {
            let app = app()?;
            match command {
                BookmarkCommand::Add { name, file } => {
                    let code = read_code(file.as_deref())?;
                    let bookmark = app.add_bookmark(&name, &code)?;
                    println!("{}", bookmark.id);
                }
                BookmarkCommand::List => {
                    let bookmarks = app.bookmarks().list()?;
                    if bookmarks.is_empty() {
                        println!("No bookmarks yet.");
                    }
                    for bookmark in &bookmarks {
                        println!("{}", bookmark_line(bookmark));
                    }
                }
                BookmarkCommand::Remove { id } => {
                    let remaining = app.remove_bookmark(&id)?;
                    println!("Removed {id} ({} bookmarks left).", remaining.len());
                }
            }
        }

        Commands::Docs { feature } => match resolve_documentation(&feature) {
            Some(url) => println!("{url}"),
            None => {
                return Err(CliError::NotFound(format!("no documentation for {feature}")).into())
            }
        },

        Commands::Features { category } => {
            let app = app()?;
            for listing in app.features(category.map(Category::from)) {
                println!(
                    "{:<36} {:<5} {}",
                    listing.id,
                    listing.category.as_str(),
                    listing.status.as_str()
                );
            }
        }

        Commands::Share { command } => match command {
            ShareCommand::Encode { file } => {
                let code = read_code(file.as_deref())?;
                println!("#{}", encode_fragment(&code));
            }
            ShareCommand::Decode { fragment } => {
                print!("{}", decode_fragment(&fragment)?);
            }
        },

        Commands::Samples {
            name,
            analyze,
            format,
        } => match name {
            None => {
                for sample in &SAMPLES {
                    println!("{:<12} {} - {}", sample.name, sample.title, sample.description);
                }
            }
            Some(name) => {
                let sample = find_sample(&name).ok_or_else(|| {
                    CliError::NotFound(format!("sample {name} (available: {})", sample_names()))
                })?;
                if analyze {
                    let result = app()?.analyze(sample.code)?;
                    print!("{}", render(&result, format, &TextOptions::default())?);
                } else {
                    print!("{}", sample.code);
                }
            }
        },

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "baseline-check", &mut std::io::stdout());
        }
    }

    Ok(())
}

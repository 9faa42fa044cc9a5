//! Podcast contribution client

mod constants;
mod files;
mod transport;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use common::{Category, FileRef};
use constants::{DEFAULT_SERVER_URL, SERVER_URL_ENV};
use form::{ContributionForm, Notifier, SubmitStatus};
use log::info;
use std::path::PathBuf;
use transport::HttpTransport;

#[derive(Parser)]
#[command(name = "client")]
#[command(about = "Podcast contribution client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a podcast contribution to the server
    Contribute(ContributeArgs),
    /// List the accepted contribution categories
    Categories,
}

#[derive(Args)]
struct ContributeArgs {
    /// Contributor name
    #[arg(long)]
    name: String,
    /// Contributor email address
    #[arg(long)]
    email: String,
    /// Contributor age
    #[arg(long)]
    age: String,
    /// Contributor city
    #[arg(long)]
    location: String,
    /// Episode topic
    #[arg(long)]
    topic: String,
    /// Episode description
    #[arg(long)]
    description: String,
    /// Path to the audio file
    #[arg(long, required_unless_present = "audiofile_ref", conflicts_with = "audiofile_ref")]
    audiofile: Option<PathBuf>,
    /// Reference to an audio file uploaded in an earlier submission
    #[arg(long)]
    audiofile_ref: Option<String>,
    /// Path to the thumbnail image
    #[arg(long, conflicts_with = "thumbnail_ref")]
    thumbnail: Option<PathBuf>,
    /// Reference to a thumbnail uploaded in an earlier submission
    #[arg(long)]
    thumbnail_ref: Option<String>,
    /// Contribution category (see the `categories` command)
    #[arg(long)]
    category: String,
    /// Server URL (default: http://127.0.0.1:8080, or SERVER_URL env var)
    #[arg(short, long)]
    server: Option<String>,
}

/// Prints submit-cycle notifications to the terminal.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Contribute(args) => contribute(args),
        Commands::Categories => {
            list_categories();
            Ok(())
        }
    }
}

fn contribute(args: ContributeArgs) -> Result<()> {
    let server = resolve_server_url(args.server);
    info!("Submitting contribution to {}", server);

    let mut form = ContributionForm::new(HttpTransport::new(server), TerminalNotifier);

    form.set_name(args.name);
    form.set_email(args.email);
    form.set_age(args.age);
    form.set_location(args.location);
    form.set_topic(args.topic);
    form.set_description(args.description);
    form.set_category(args.category);

    form.set_audiofile(file_ref(args.audiofile.as_deref(), args.audiofile_ref)?);
    form.set_thumbnail(file_ref(args.thumbnail.as_deref(), args.thumbnail_ref)?);

    let errors = form.errors();
    if !errors.is_empty() {
        for (field, message) in errors.iter() {
            eprintln!("  {}: {}", field, message);
        }
        anyhow::bail!(
            "Contribution is invalid ({} field(s)); fix the fields above and retry",
            errors.len()
        );
    }

    match form.submit() {
        SubmitStatus::Accepted => Ok(()),
        SubmitStatus::Failed(err) => anyhow::bail!("Submission failed: {}", err),
        SubmitStatus::NotReady => unreachable!("submit gate was checked above"),
    }
}

/// Resolve a file argument to a form value. A local path is read into an
/// upload handle; otherwise a given reference becomes a server-side ref.
fn file_ref(path: Option<&std::path::Path>, reference: Option<String>) -> Result<FileRef> {
    match (path, reference) {
        (Some(path), _) => {
            let file =
                files::load_file(path).with_context(|| format!("Failed to load {:?}", path))?;
            Ok(FileRef::Uploaded(file))
        }
        (None, Some(reference)) => Ok(FileRef::Remote(reference)),
        (None, None) => Ok(FileRef::Empty),
    }
}

fn resolve_server_url(flag: Option<String>) -> String {
    // Priority: command-line arg > environment variable > default
    flag.or_else(|| std::env::var(SERVER_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
}

fn list_categories() {
    println!("Accepted categories:");
    for category in Category::ALL {
        println!("  {:<28} {}", category.slug(), category.label());
    }
}

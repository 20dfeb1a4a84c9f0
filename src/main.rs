// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use file_search::utils::display::{render_files, render_search_response, render_stores};
use file_search::utils::logging::{format_error, format_info, format_success, format_warning};
use file_search::{
    ChatSession, Config, GeminiClient, Spinner, StoreName, UploadSource, Validator,
    guess_mime_type, is_quit_command, query_store,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "file-search")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Gemini File Search CLI Tool", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set, global = true)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// File Search Store management
    Store {
        #[command(subcommand)]
        command: StoreCommand,
    },

    /// File management
    File {
        #[command(subcommand)]
        command: FileCommand,
    },

    /// Search
    Search {
        #[command(subcommand)]
        command: SearchCommand,
    },
}

#[derive(Subcommand)]
enum StoreCommand {
    /// Create a new store
    Create {
        /// Display name for the store
        name: String,
    },

    /// List stores
    List,

    /// Delete a store
    Delete {
        /// Store resource name
        name: String,

        /// Skip confirmation and delete the store's documents too
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum FileCommand {
    /// Upload a file into a store
    Upload {
        /// Path of the file to upload
        path: PathBuf,

        /// Store resource name
        #[arg(short, long)]
        store: String,

        /// Display name (defaults to the file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Wait until the file has been imported
        #[arg(short, long)]
        wait: bool,
    },

    /// List files in a store
    List {
        /// Store resource name
        #[arg(short, long)]
        store: String,
    },
}

#[derive(Subcommand)]
enum SearchCommand {
    /// Answer a question from the store's documents
    Query {
        /// Question to ask
        question: String,

        /// Store resource name
        #[arg(short, long)]
        store: String,

        /// Model name
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Interactive search mode
    Chat {
        /// Store resource name
        #[arg(short, long)]
        store: String,

        /// Model name
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    file_search::utils::logging::init_logger(cli.color, cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{}", format_error(&format!("{e:#}")));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.config {
        info!("Loading configuration from: {}", path.display());
    }
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Store { command } => match command {
            StoreCommand::Create { name } => cmd_store_create(&config, &name).await?,
            StoreCommand::List => cmd_store_list(&config).await?,
            StoreCommand::Delete { name, force } => {
                cmd_store_delete(&config, &name, force).await?
            }
        },
        Commands::File { command } => match command {
            FileCommand::Upload {
                path,
                store,
                name,
                wait,
            } => cmd_file_upload(&config, &path, &store, name.as_deref(), wait, cli.color).await?,
            FileCommand::List { store } => cmd_file_list(&config, &store).await?,
        },
        Commands::Search { command } => match command {
            SearchCommand::Query {
                question,
                store,
                model,
            } => cmd_search_query(&config, &question, &store, model, cli.color).await?,
            SearchCommand::Chat { store, model } => {
                cmd_search_chat(&config, &store, model, cli.color).await?
            }
        },
    }

    Ok(())
}

fn create_client(config: &Config) -> Result<GeminiClient> {
    GeminiClient::from_env(&config.api).context("Failed to create Gemini client")
}

async fn cmd_store_create(config: &Config, name: &str) -> Result<()> {
    Validator::validate_not_empty("store name", name)?;
    let client = create_client(config)?;

    let store = client
        .create_store(name)
        .await
        .context("Failed to create store")?;

    println!("{}", format_success(&format!("Store created: {}", store.name)));
    println!(" Name: {}", store.name);
    println!(
        " Display Name: {}",
        store.display_name.as_deref().unwrap_or("-")
    );

    Ok(())
}

async fn cmd_store_list(config: &Config) -> Result<()> {
    let client = create_client(config)?;

    let stores = client.list_stores().await.context("Failed to list stores")?;
    debug!("Listed {} store(s)", stores.len());

    print!("{}", render_stores(&stores));
    Ok(())
}

async fn cmd_store_delete(config: &Config, name: &str, force: bool) -> Result<()> {
    let store = StoreName::new(name);

    if !force && !confirm(&format!("Delete '{}'?", store))? {
        println!("{}", format_info("Aborted"));
        return Ok(());
    }

    let client = create_client(config)?;
    client
        .delete_store(&store, force)
        .await
        .with_context(|| format!("Failed to delete {}", store))?;

    println!("{}", format_success(&format!("Deleted: {}", store)));
    Ok(())
}

async fn cmd_file_upload(
    config: &Config,
    path: &Path,
    store: &str,
    display_name: Option<&str>,
    wait: bool,
    color: bool,
) -> Result<()> {
    Validator::validate_upload_path(path)?;

    let store = StoreName::new(store);
    let client = create_client(config)?;

    let display_name = Validator::resolve_display_name(path, display_name);
    let mime_type = guess_mime_type(path);
    let source = UploadSource::prepare(path).context("Failed to prepare upload")?;
    if source.is_staged() {
        info!("Uploading under ASCII-safe name {}", source.file_name());
    }

    let spinner = Spinner::new(format!("Uploading {}...", display_name), color);
    let result = match client
        .upload_to_store(&store, &source, &display_name, mime_type)
        .await
    {
        Ok(operation) if wait => {
            spinner.set_message(format!("Importing {}...", display_name));
            client
                .wait_for_operation(
                    operation,
                    Duration::from_millis(config.upload.poll_interval_ms),
                    Duration::from_secs(config.upload.wait_timeout_secs),
                    path,
                )
                .await
        }
        other => other,
    };
    spinner.finish();

    let closed = source.close();
    let operation = result.with_context(|| format!("Failed to upload {}", path.display()))?;
    if let Err(e) = closed {
        warn!("Failed to remove staged upload: {}", e);
    }

    println!(
        "{}",
        format_success(&format!("Upload complete: {}", display_name))
    );
    if let Some(document) = operation.document_name() {
        println!(" Document: {}", document);
    } else if !operation.done {
        if let Some(name) = &operation.name {
            println!(
                "{}",
                format_info(&format!("Import still processing (operation {})", name))
            );
        }
    }

    Ok(())
}

async fn cmd_file_list(config: &Config, store: &str) -> Result<()> {
    let store = StoreName::new(store);
    let client = create_client(config)?;

    let files = client
        .list_documents(&store)
        .await
        .with_context(|| format!("Failed to list files in {}", store))?;

    print!("{}", render_files(&files));
    Ok(())
}

async fn cmd_search_query(
    config: &Config,
    question: &str,
    store: &str,
    model: Option<String>,
    color: bool,
) -> Result<()> {
    Validator::validate_not_empty("question", question)?;

    let store = StoreName::new(store);
    let model = model.unwrap_or_else(|| config.api.default_model.clone());
    let client = create_client(config)?;

    let spinner = Spinner::new("Searching...", color);
    let result = query_store(&client, &store, &model, question).await;
    spinner.finish();

    let response = result.context("Search failed")?;
    print!("{}", render_search_response(&response));
    Ok(())
}

async fn cmd_search_chat(
    config: &Config,
    store: &str,
    model: Option<String>,
    color: bool,
) -> Result<()> {
    let store = StoreName::new(store);
    let model = model.unwrap_or_else(|| config.api.default_model.clone());
    let client = create_client(config)?;
    let session = ChatSession::new(&client, store, model);

    println!(
        "{}\n",
        "Interactive search mode (exit: quit, exit, q)".bold()
    );
    info!(
        "Chat session on {} with {}",
        session.store(),
        session.model()
    );

    let mut history = Vec::new();
    let stdin = io::stdin();

    loop {
        print!("{} ", "Q:".green().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if is_quit_command(&line) {
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }

        let spinner = Spinner::new("Searching...", color);
        let result = session.ask(&mut history, question).await;
        spinner.finish();

        let response = result.context("Search failed")?;
        print!("{}", render_search_response(&response));
        println!();
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", format_warning(prompt));
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

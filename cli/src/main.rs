mod client;
mod render;

use clap::{Parser, Subcommand};
use model::config::{ACCESS_TOKEN_VAR, SERVER_URL_VAR};
use model::filter::{Column, filter_rows};
use model::pagination::{to_request_page, total_pages};
use model::view::{board_row, board_view};
use model::{ApiConfig, ApiError, ApiResponse, DEFAULT_PAGE_SIZE, DeletionTracker, TargetType, flatten_comments};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::client::AdminClient;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{target} deletion rejected: {message}")]
    Rejected { target: TargetType, message: String },
}

#[derive(Parser, Debug)]
#[command(name = "board-admin-cli", about = "Community board moderation CLI")]
struct Cli {
    #[arg(long, env = SERVER_URL_VAR)]
    base_url: String,

    #[arg(long, env = ACCESS_TOKEN_VAR, hide_env_values = true)]
    access_token: String,

    /// Log request details to stderr.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List one page of posts.
    List {
        /// 1-based page number.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
        /// Case-insensitive filter over the visible columns of this page.
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show one post, optionally with its comment thread.
    Show {
        board_id: i64,
        #[arg(long, default_value_t = false)]
        comments: bool,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Take down a post.
    DeleteBoard {
        board_id: i64,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
    /// Remove a comment.
    DeleteComment {
        comment_id: i64,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = AdminClient::new(ApiConfig::new(cli.base_url, cli.access_token))?;

    match cli.command {
        Command::List { page, size, search, json } => run_list(&client, page, size, &search, json).await,
        Command::Show { board_id, comments, json } => run_show(&client, board_id, comments, json).await,
        Command::DeleteBoard { board_id, yes } => run_delete(&client, TargetType::Board, board_id, yes).await,
        Command::DeleteComment { comment_id, yes } => run_delete(&client, TargetType::Comment, comment_id, yes).await,
    }
}

async fn run_list(client: &AdminClient, page: u32, size: u32, search: &str, json: bool) -> Result<(), CliError> {
    let response = client.list_boards(to_request_page(page), size).await?;
    let rows: Vec<_> = response.content.iter().map(board_row).collect();
    let rows = filter_rows(&rows, search, &Column::VISIBLE);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", render::render_rows(&rows, page, total_pages(&response)));
    }
    Ok(())
}

async fn run_show(client: &AdminClient, board_id: i64, with_comments: bool, json: bool) -> Result<(), CliError> {
    let (raw, raw_comments) = client.board_detail(board_id).await?;
    let board = board_view(&raw);
    let today = time::OffsetDateTime::now_utc().date();
    let comments = if with_comments { flatten_comments(&raw_comments, today) } else { Vec::new() };

    if json {
        let payload = serde_json::json!({ "board": board, "comments": comments });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print!("{}", render::render_board(&board));
    if with_comments {
        println!();
        println!("Comments ({})", comments.len());
        print!("{}", render::render_comments(&comments, &DeletionTracker::default(), board.author_id.as_deref()));
    }
    Ok(())
}

async fn run_delete(client: &AdminClient, target: TargetType, target_id: i64, yes: bool) -> Result<(), CliError> {
    if !yes && !confirm(&format!("Delete {target} {target_id}?")).await? {
        println!("cancelled");
        return Ok(());
    }

    let response = match target {
        TargetType::Board => client.delete_board(target_id).await?,
        TargetType::Comment => client.delete_comment(target_id).await?,
    };
    let outcome = delete_outcome(target, response);
    if let Ok(message) = &outcome {
        println!("{message}");
    }
    outcome.map(|_| ())
}

/// Success line for an accepted deletion, or the rejection as an error.
fn delete_outcome(target: TargetType, response: ApiResponse) -> Result<String, CliError> {
    if response.is_success() {
        Ok(format!("{target} deleted"))
    } else {
        let message = response.message().unwrap_or("no message").to_owned();
        Err(CliError::Rejected { target, message })
    }
}

async fn confirm(prompt: &str) -> Result<bool, CliError> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{prompt} [y/N] ").as_bytes()).await?;
    stdout.flush().await?;

    let mut answer = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut answer).await?;
    Ok(is_confirmed(&answer))
}

fn is_confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

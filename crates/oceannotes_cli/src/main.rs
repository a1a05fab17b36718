//! `oceannotes` - terminal front end for the Ocean Notes core.
//!
//! # Responsibility
//! - Render repository state as plain text and forward user commands.
//! - Keep all note semantics inside `oceannotes_core`; nothing here sorts,
//!   filters or defaults on its own.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;

use oceannotes_core::preview::{display_title, note_snippet, relative_updated_at};
use oceannotes_core::{
    core_version, default_log_level, init_logging, Clock, CreateNoteInput, JsonFileStore,
    NotePatch, NotesRepository, RepoConfig, SystemClock,
};

const DATA_DIR_NAME: &str = "oceannotes";

type CliRepo = NotesRepository<JsonFileStore, SystemClock>;

/// oceannotes - single-user notes kept in one JSON slot
#[derive(Debug, Parser)]
#[command(name = "oceannotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory holding the storage slot (defaults to the user data dir)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory for rolling log files; logging stays off when unset
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
enum Command {
    /// List notes, most recently updated first
    List {
        /// Case-insensitive title/content filter
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show one note in full
    Show {
        /// Id of the note
        id: String,
    },

    /// Create a note
    Create {
        /// Title; blank falls back to the default placeholder
        #[arg(short, long)]
        title: Option<String>,

        /// Body text
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Update title and/or content of a note
    Edit {
        /// Id of the note
        id: String,

        /// New title, stored verbatim
        #[arg(short, long)]
        title: Option<String>,

        /// New body text
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a note
    Delete {
        /// Id of the note
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(dir) = cli.log_dir.as_ref() {
        let log_dir = absolute_path(dir);
        if let Err(err) = init_logging(default_log_level(), &log_dir.display().to_string()) {
            eprintln!("warning: {err}");
        }
    }

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let repo = NotesRepository::new(
        JsonFileStore::in_dir(&data_dir),
        SystemClock,
        RepoConfig::from_env(),
    );
    info!(
        "event=cli_start module=cli status=ok version={} data_dir={}",
        core_version(),
        data_dir.display()
    );

    match cli.command {
        Command::List { query } => handle_list(&repo, query.as_deref()),
        Command::Show { id } => handle_show(&repo, &id),
        Command::Create { title, content } => handle_create(&repo, title, content),
        Command::Edit { id, title, content } => handle_edit(&repo, &id, title, content),
        Command::Delete { id, yes } => handle_delete(&repo, &id, yes),
    }
}

fn handle_list(repo: &CliRepo, query: Option<&str>) -> ExitCode {
    let notes = repo.list(query);
    if notes.is_empty() {
        if query.is_some() {
            println!("No matching notes.");
        } else {
            println!("No notes yet. Create your first note.");
        }
        return ExitCode::SUCCESS;
    }

    let now_ms = repo.clock().now_ms();
    println!(
        "{} {}",
        notes.len(),
        if notes.len() == 1 { "note" } else { "notes" }
    );
    println!();
    for note in &notes {
        println!("{}  {}", note.id, display_title(note));
        println!("    {}", note_snippet(note));
        println!(
            "    updated {}",
            relative_updated_at(note.updated_at, now_ms)
        );
    }
    ExitCode::SUCCESS
}

fn handle_show(repo: &CliRepo, id: &str) -> ExitCode {
    let Some(note) = repo.get(id) else {
        eprintln!("note not found: {id}");
        return ExitCode::FAILURE;
    };

    let now_ms = repo.clock().now_ms();
    println!("{}", display_title(&note));
    println!(
        "updated {}",
        relative_updated_at(note.updated_at, now_ms)
    );
    println!();
    if note.content.is_empty() {
        println!("No content");
    } else {
        println!("{}", note.content);
    }
    ExitCode::SUCCESS
}

fn handle_create(repo: &CliRepo, title: Option<String>, content: Option<String>) -> ExitCode {
    let note = repo.create(CreateNoteInput { title, content });
    println!("Created {}  {}", note.id, note.title);
    ExitCode::SUCCESS
}

fn handle_edit(
    repo: &CliRepo,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> ExitCode {
    if title.is_none() && content.is_none() {
        eprintln!("nothing to change; pass --title and/or --content");
        return ExitCode::FAILURE;
    }

    match repo.update(id, NotePatch { title, content }) {
        Some(note) => {
            println!("Saved {}  {}", note.id, display_title(&note));
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("note not found: {id}");
            ExitCode::FAILURE
        }
    }
}

fn handle_delete(repo: &CliRepo, id: &str, yes: bool) -> ExitCode {
    if !yes && !confirm_delete() {
        println!("Cancelled.");
        return ExitCode::SUCCESS;
    }

    if repo.remove(id) {
        println!("Deleted {id}");
        ExitCode::SUCCESS
    } else {
        eprintln!("note not found: {id}");
        ExitCode::FAILURE
    }
}

fn confirm_delete() -> bool {
    print!("Delete this note? This cannot be undone. [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join(DATA_DIR_NAME)
}

fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A single-user kanban task board", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Directory holding the board data (or set TASKBOARD_DIR)
    #[arg(long, value_name = "DIR", env = "TASKBOARD_DIR", global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Task operations
    Task(TaskCommand),
    /// Column operations
    Column(ColumnCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Task commands

#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to a column
    Add(TaskAddArgs),
    /// List a column's tasks, favorites first
    List {
        #[arg(long)]
        column: String,
        /// none, alphabetical, descending, or date
        #[arg(long, default_value = "none")]
        sort: String,
    },
    /// Get a specific task
    Get {
        #[arg(long)]
        id: String,
    },
    /// Update task fields
    Update(TaskUpdateArgs),
    /// Delete a task
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Move a task to a column, optionally at a position
    Move {
        #[arg(long)]
        id: String,
        #[arg(long)]
        column: String,
        #[arg(long)]
        index: Option<usize>,
    },
    /// Toggle a task's favorite flag
    Favorite {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
pub struct TaskAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub column: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Due date, YYYY-MM-DD
    #[arg(long)]
    pub deadline: Option<NaiveDate>,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long)]
    pub favorite: bool,
}

#[derive(Args)]
pub struct TaskUpdateArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Due date, YYYY-MM-DD
    #[arg(long)]
    pub deadline: Option<NaiveDate>,
    #[arg(long, conflicts_with = "deadline")]
    pub clear_deadline: bool,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long, conflicts_with = "image_url")]
    pub clear_image_url: bool,
    /// Move the task to this column (appended, favorites-aware)
    #[arg(long)]
    pub column: Option<String>,
    #[arg(long)]
    pub favorite: Option<bool>,
}

// Column commands

#[derive(Args)]
pub struct ColumnCommand {
    #[command(subcommand)]
    pub action: ColumnAction,
}

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Add a column at the end of the board
    Add {
        #[arg(long)]
        name: String,
    },
    /// List columns in display order
    List,
    /// Rename a column
    Rename {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Delete a column and every task in it
    Delete {
        #[arg(long)]
        id: String,
    },
}

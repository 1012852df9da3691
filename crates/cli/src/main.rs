//! weekplan CLI - day-by-day task lists for the week.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use weekplan_core::{Clock, SystemClock, WEEK};
use weekplan_screens::{AddTaskScreen, SubmitOutcome, TodayScreen, WeeklyScreen};
use weekplan_storage::{FileStore, TaskStore};

#[derive(Parser)]
#[command(name = "weekplan")]
#[command(about = "Day-by-day task lists for the week", long_about = None)]
struct Cli {
    /// Directory holding the per-day task records
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's tasks
    Today,
    /// Show the whole week, Monday through Sunday
    Week,
    /// Add a task
    Add {
        /// Task text; leading and trailing whitespace is trimmed
        task: String,
        /// Target day; defaults to the current weekday
        #[arg(long)]
        day: Option<String>,
    },
    /// Remove a task by its printed position
    Remove {
        /// Position as printed by `today` or `week`
        index: usize,
        /// Day to remove from; defaults to the current weekday
        #[arg(long)]
        day: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    debug!("Task records live in {}", data_dir.display());
    let store = Arc::new(TaskStore::new(FileStore::open(&data_dir).await?));

    match cli.command {
        Commands::Today => {
            let mut screen = TodayScreen::new(store, SystemClock);
            screen.focus().await?;
            print_day(screen.day(), screen.tasks());
        }
        Commands::Week => {
            let mut screen = WeeklyScreen::new(store);
            screen.focus().await?;
            for card in screen.cards() {
                print_day(card.day, &card.tasks);
            }
        }
        Commands::Add { task, day } => {
            let day = day.unwrap_or_else(|| SystemClock.today().to_string());
            let mut screen = AddTaskScreen::new(store, Some(day));
            screen.set_input(task);
            match screen.submit().await? {
                SubmitOutcome::Saved => println!("Added task for {}", screen.day()),
                SubmitOutcome::EmptyInput => println!("Nothing to add: task text is empty"),
            }
        }
        Commands::Remove { index, day } => match day {
            None => {
                let mut screen = TodayScreen::new(store, SystemClock);
                screen.focus().await?;
                let before = screen.task_count();
                screen.remove_task(index).await?;
                if screen.task_count() == before {
                    println!("No task at position {} for {}", index, screen.day());
                }
                print_day(screen.day(), screen.tasks());
            }
            Some(day) => {
                if !WEEK.contains(&day.as_str()) {
                    anyhow::bail!("unknown day: {day} (expected Monday through Sunday)");
                }
                let mut screen = WeeklyScreen::new(store);
                screen.focus().await?;
                let before = screen.card(&day).map_or(0, |card| card.tasks.len());
                screen.remove_task(&day, index).await?;
                if let Some(card) = screen.card(&day) {
                    if card.tasks.len() == before {
                        println!("No task at position {index} for {day}");
                    }
                    print_day(card.day, &card.tasks);
                }
            }
        },
    }

    Ok(())
}

fn print_day(day: &str, tasks: &[String]) {
    println!("{} ({} tasks)", day, tasks.len());
    if tasks.is_empty() {
        println!("  (no tasks)");
    } else {
        for (index, task) in tasks.iter().enumerate() {
            println!("  [{index}] {task}");
        }
    }
}

/// Storage directory: `--data-dir`, then `WEEKPLAN_DATA_DIR`, then the
/// platform data directory, then `.weekplan` as a last resort.
fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("WEEKPLAN_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|dir| dir.join("weekplan"))
        .unwrap_or_else(|| PathBuf::from(".weekplan"))
}

/// Logs go to stderr so stdout stays a clean presentation surface.
fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

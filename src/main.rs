//! TaskHub CLI - Main Entry Point
//!
//! A small command-line front end over the `taskhub` library: lists,
//! mutates and exports tasks stored in a local TOML task book. The
//! filtering, recurrence and export logic lives in the library.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use taskhub::{
    ExportRow, ExportSelection, FilterCriteria, Priority, PriorityFilter, RecurrenceKind,
    Selection, Status, StatusFilter, Storage, TaskRecord, ViewMode, build_export_rows,
    filter_tasks, local_date_today, recurrence_label, sort_by_priority,
};

/// TaskHub - task filtering, recurrence and export over a TOML task book
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task book file (TOML format)
    file: String,

    /// Acting user ID; only this user's tasks are ever shown
    #[arg(long)]
    owner: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tasks matching the filters
    List {
        /// View mode: all, not_started, in_progress, completed, deleted
        #[arg(long, default_value = "all")]
        view: String,
        /// Case-insensitive search over title and category
        #[arg(long, default_value = "")]
        search: String,
        /// Exact priority: High, Mid, Low
        #[arg(long)]
        priority: Option<String>,
        /// Exact status: "Not Started", "In Progress", Completed, Deleted
        #[arg(long)]
        status: Option<String>,
        /// Earliest due date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest due date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// List open tasks ordered for today's work (High priority first)
    Today,

    /// Print export rows for the selected task types
    Export {
        /// Comma-separated task types: one,weekly,monthly,deleted
        #[arg(long, default_value = "one,weekly,monthly")]
        types: String,
        /// Restrict to these company names (repeatable)
        #[arg(long)]
        company: Vec<String>,
        /// Restrict to these categories (repeatable)
        #[arg(long)]
        category: Vec<String>,
        /// Exact priority: High, Mid, Low
        #[arg(long)]
        priority: Option<String>,
        /// Earliest due date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest due date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Add a task to the book
    Add {
        title: String,
        /// Owning company ID
        #[arg(long)]
        company_id: String,
        /// Company display name
        #[arg(long)]
        company: Option<String>,
        /// Due date, or occurrence anchor for recurring tasks (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Priority: High, Mid, Low
        #[arg(long, default_value = "Mid")]
        priority: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Recurrence: weekly or monthly (omit for a one-time task)
        #[arg(long)]
        recurrence: Option<String>,
    },

    /// Change a task's status
    SetStatus {
        id: String,
        /// Target status: "Not Started", "In Progress", Completed
        status: String,
    },

    /// Soft-delete a task (it stays restorable in the deleted view)
    Delete { id: String },

    /// Restore a soft-deleted task to Not Started
    Restore { id: String },
}

fn main() -> Result<()> {
    env_logger::init();

    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    let storage = Storage::new(&args.file);
    let mut book = storage.load()?;

    match args.command {
        Command::List {
            view,
            search,
            priority,
            status,
            from,
            to,
        } => {
            let mut criteria = owner_criteria(args.owner);
            criteria.view_mode = parse_view_mode(&view)?;
            criteria.search_text = search;
            criteria.priority = parse_priority_filter(priority.as_deref())?;
            criteria.status = parse_status_filter(status.as_deref())?;
            criteria.date_from = parse_date_arg(from.as_deref())?;
            criteria.date_to = parse_date_arg(to.as_deref())?;

            let tasks = filter_tasks(&book.all_records(), &criteria);
            print_task_table(&tasks);
        }

        Command::Today => {
            // Open tasks due today or later; the default view mode
            // already excludes deleted records
            let mut criteria = owner_criteria(args.owner);
            criteria.date_from = Some(local_date_today());
            let mut tasks = filter_tasks(&book.all_records(), &criteria);
            tasks.retain(|task| task.status != Status::Completed);
            sort_by_priority(&mut tasks);
            print_task_table(&tasks);
        }

        Command::Export {
            types,
            company,
            category,
            priority,
            from,
            to,
        } => {
            let mut criteria = owner_criteria(args.owner);
            criteria.priority = parse_priority_filter(priority.as_deref())?;
            criteria.date_from = parse_date_arg(from.as_deref())?;
            criteria.date_to = parse_date_arg(to.as_deref())?;
            if !company.is_empty() {
                criteria.companies = Selection::only(company);
            }
            if !category.is_empty() {
                criteria.categories = Selection::only(category);
            }

            let selection = parse_type_flags(&types)?;
            let rows = build_export_rows(&book.collections(), &selection, &criteria);
            print_export_table(&rows);
        }

        Command::Add {
            title,
            company_id,
            company,
            due,
            priority,
            category,
            description,
            recurrence,
        } => {
            let owner = args
                .owner
                .context("--owner is required when adding a task")?;
            let recurrence = recurrence
                .as_deref()
                .map(|r| r.parse::<RecurrenceKind>().map_err(anyhow::Error::msg))
                .transpose()?;
            let task = TaskRecord {
                id: next_task_id(&book),
                title,
                company_id,
                company,
                due_date: parse_date_arg(due.as_deref())?,
                priority: priority.parse::<Priority>().map_err(anyhow::Error::msg)?,
                status: Status::NotStarted,
                description,
                category,
                created_by: owner,
                recurrence,
            };
            let id = task.id.clone();
            book.add(task);
            storage.save(&book)?;
            println!("Task created with ID: {}", id);
        }

        Command::SetStatus { id, status } => {
            let next = status.parse::<Status>().map_err(anyhow::Error::msg)?;
            match book.set_status(&id, next) {
                Some(()) => {
                    storage.save(&book)?;
                    println!("Task {} moved to {}", id, next);
                }
                None => bail!("Task '{}' not found or transition to {} not allowed", id, next),
            }
        }

        Command::Delete { id } => {
            match book.delete(&id) {
                Some(()) => {
                    storage.save(&book)?;
                    println!("Task {} deleted (restorable)", id);
                }
                None => bail!("Task '{}' not found", id),
            }
        }

        Command::Restore { id } => {
            match book.restore(&id) {
                Some(()) => {
                    storage.save(&book)?;
                    println!("Task {} restored to Not Started", id);
                }
                None => bail!("Task '{}' not found or not deleted", id),
            }
        }
    }

    Ok(())
}

fn owner_criteria(owner: Option<String>) -> FilterCriteria {
    // No --owner means fail-closed: every listing comes back empty
    FilterCriteria {
        owner_id: owner,
        ..FilterCriteria::default()
    }
}

fn parse_view_mode(value: &str) -> Result<ViewMode> {
    value.parse::<ViewMode>().map_err(anyhow::Error::msg)
}

fn parse_priority_filter(value: Option<&str>) -> Result<PriorityFilter> {
    match value {
        None | Some("all") => Ok(PriorityFilter::All),
        Some(v) => Ok(PriorityFilter::Only(
            v.parse::<Priority>().map_err(anyhow::Error::msg)?,
        )),
    }
}

fn parse_status_filter(value: Option<&str>) -> Result<StatusFilter> {
    match value {
        None | Some("all") => Ok(StatusFilter::All),
        Some(v) => Ok(StatusFilter::Only(
            v.parse::<Status>().map_err(anyhow::Error::msg)?,
        )),
    }
}

fn parse_date_arg(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .with_context(|| format!("Invalid date '{}'. Use YYYY-MM-DD (e.g. '2025-03-15')", v)),
    }
}

fn parse_type_flags(types: &str) -> Result<ExportSelection> {
    let mut selection = ExportSelection::default();
    for flag in types.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        match flag {
            "one" => selection.one_time = true,
            "weekly" => selection.weekly = true,
            "monthly" => selection.monthly = true,
            "deleted" => selection.deleted = true,
            _ => bail!(
                "Invalid task type '{}'. Valid options are: one, weekly, monthly, deleted",
                flag
            ),
        }
    }
    Ok(selection)
}

fn next_task_id(book: &taskhub::TaskBook) -> String {
    format!("task-{}", book.len() + 1)
}

fn print_task_table(tasks: &[TaskRecord]) {
    if tasks.is_empty() {
        println!("No tasks found");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Task").add_attribute(Attribute::Bold),
            Cell::new("Company").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Priority").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Due Date").add_attribute(Attribute::Bold),
        ]);

    for task in tasks {
        let due = match recurrence_label(task) {
            Some(label) => label,
            None => task.due_date.map(|d| d.to_string()).unwrap_or_default(),
        };
        table.add_row(vec![
            Cell::new(&task.id),
            Cell::new(&task.title),
            Cell::new(task.company.as_deref().unwrap_or("")),
            Cell::new(task.category.as_deref().unwrap_or("")),
            Cell::new(task.priority),
            Cell::new(task.status),
            Cell::new(due),
        ]);
    }

    println!("{table}");
}

fn print_export_table(rows: &[ExportRow]) {
    if rows.is_empty() {
        println!("No tasks found");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Task").add_attribute(Attribute::Bold),
            Cell::new("Company").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Priority").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Due Date").add_attribute(Attribute::Bold),
        ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.title),
            Cell::new(&row.company),
            Cell::new(&row.category),
            Cell::new(&row.priority),
            Cell::new(&row.status),
            Cell::new(&row.due_date),
        ]);
    }

    println!("{table}");
}

//! Terminal UI helpers for task display.
//!
//! This module uses println! for CLI output, which is appropriate
//! for terminal user interfaces.

#![allow(clippy::disallowed_macros)]

use std::time::Duration;

use chrono::{DateTime, Utc};
use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::TaskStats;
use crate::entities::{Category, Task, User};

/// Get colored category badge
pub fn category_colored(category: Category) -> String {
    match category {
        Category::Work => "Work".blue().to_string(),
        Category::Personal => "Personal".green().to_string(),
        Category::Study => "Study".magenta().to_string(),
        Category::Other => "Other".dimmed().to_string(),
    }
}

/// Get colored completion status string
pub fn status_colored(is_completed: bool) -> String {
    if is_completed {
        "completed".green().to_string()
    } else {
        "pending".yellow().to_string()
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Work => Color::Blue,
        Category::Personal => Color::Green,
        Category::Study => Color::Magenta,
        Category::Other => Color::DarkGrey,
    }
}

/// Short date, e.g. "Jan 15, 2024"
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Clock time, e.g. "2:30 PM"
pub fn format_time(date: DateTime<Utc>) -> String {
    date.format("%-I:%M %p").to_string()
}

/// Create a table for displaying tasks
pub fn task_table(tasks: &[Task], now: DateTime<Utc>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Category").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
        Cell::new("Deadline").fg(Color::Cyan),
        Cell::new("Reminder").fg(Color::Cyan),
        Cell::new("Created").fg(Color::Cyan),
    ]);

    for task in tasks {
        let title = if task.is_completed {
            Cell::new(&task.title).fg(Color::DarkGrey)
        } else {
            Cell::new(&task.title)
        };

        let status = if task.is_completed {
            Cell::new("completed").fg(Color::Green)
        } else {
            Cell::new("pending").fg(Color::Yellow)
        };

        let deadline = match task.deadline {
            Some(d) if task.is_overdue(now) => Cell::new(format_date(d)).fg(Color::Red),
            Some(d) => Cell::new(format_date(d)),
            None => Cell::new("-"),
        };

        let reminder = match task.reminder {
            Some(r) => Cell::new(format!("{} {}", format_date(r), format_time(r))),
            None => Cell::new("-"),
        };

        table.add_row(vec![
            Cell::new(&task.id).fg(Color::DarkGrey),
            title,
            Cell::new(task.category.name()).fg(category_color(task.category)),
            status,
            deadline,
            reminder,
            Cell::new(format_date(task.created_at)),
        ]);
    }

    table
}

/// Create a table for the dashboard stat cards
pub fn stats_table(stats: &TaskStats) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Total Tasks").fg(Color::Cyan),
        Cell::new("Completed").fg(Color::Cyan),
        Cell::new("Pending").fg(Color::Cyan),
        Cell::new("Overdue").fg(Color::Cyan),
    ]);

    table.add_row(vec![
        Cell::new(stats.total),
        Cell::new(stats.completed).fg(Color::Green),
        Cell::new(stats.pending).fg(Color::Yellow),
        Cell::new(stats.overdue).fg(Color::Red),
    ]);

    table
}

/// Display task details in a formatted way
pub fn display_task_details(task: &Task, now: DateTime<Utc>) {
    println!("{}", "═".repeat(60).dimmed());
    println!(
        "{} {} {}",
        "Task".cyan().bold(),
        task.id.cyan().bold(),
        format!("[{}]", status_colored(task.is_completed))
    );
    println!("{}", "═".repeat(60).dimmed());
    println!();

    println!("{}: {}", "Title".bold(), task.title);
    println!("{}: {}", "Category".bold(), category_colored(task.category));
    println!(
        "{}: {}",
        "Status".bold(),
        status_colored(task.is_completed)
    );

    if let Some(deadline) = task.deadline {
        let due = if task.is_overdue(now) {
            format!("{} (overdue)", format_date(deadline)).red().to_string()
        } else {
            format_date(deadline)
        };
        println!("{}: {}", "Deadline".bold(), due);
    }

    if let Some(reminder) = task.reminder {
        println!(
            "{}: {} {}",
            "Reminder".bold(),
            format_date(reminder),
            format_time(reminder)
        );
    }

    println!("{}: {}", "Created".bold(), format_date(task.created_at));
    println!();
}

/// Display the signed-in user's profile
pub fn display_profile(user: &User) {
    println!("{}", "═".repeat(60).dimmed());
    println!("{}", "Profile".cyan().bold());
    println!("{}", "═".repeat(60).dimmed());
    println!();

    println!("{}: {}", "Name".bold(), user.name);
    println!("{}: {}", "Email".bold(), user.email);
    println!(
        "{}: {}",
        "Member since".bold(),
        format_date(user.created_at)
    );
    println!();
}

/// "N of M tasks completed" summary line
pub fn completion_summary(stats: &TaskStats) -> String {
    format!("{} of {} tasks completed", stats.completed, stats.total)
}

/// Spinner shown while a request is in flight
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

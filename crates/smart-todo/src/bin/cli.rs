//! Smart To-Do CLI - terminal client for the Smart To-Do task API.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::disallowed_macros)]

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Password};

use smart_todo::api::{ApiClient, TaskPayload};
use smart_todo::domain::{
    client_dir, recent_tasks, sort_tasks, AuthDomain, CategoryFilter, ConfigStore, SessionStore,
    SortKey, SortOrder, StatusFilter, TaskFilter, TaskStats, TasksDomain,
};
use smart_todo::entities::{Category, Session, Task};
use smart_todo::errors::{ClientError, ClientResult};
use smart_todo::ui;

#[derive(Parser)]
#[command(name = "smart-todo")]
#[command(about = "Terminal client for the Smart To-Do task API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL
    #[arg(long, global = true, env = "SMART_TODO_API_URL")]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign in and store the session
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign out (clears the local session, no server call)
    Logout,

    /// Show task statistics and recent tasks
    Dashboard,

    /// List tasks with filters and sorting
    List {
        /// Substring to match in titles (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// Category filter (all, work, personal, study, other)
        #[arg(long, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,

        /// Status filter (all, pending, completed)
        #[arg(long, default_value_t = StatusFilter::All)]
        status: StatusFilter,

        /// Sort key (created, deadline, title, category)
        #[arg(long, default_value_t = SortKey::CreatedAt)]
        sort: SortKey,

        /// Sort order (asc, desc)
        #[arg(long, default_value_t = SortOrder::Desc)]
        order: SortOrder,
    },

    /// Show details of a specific task
    Show {
        /// Task ID
        id: String,
    },

    /// Add a new task
    Add {
        /// Task title
        #[arg(short, long)]
        title: String,

        /// Category (work, personal, study, other)
        #[arg(short, long, default_value_t = Category::Other)]
        category: Category,

        /// Deadline as YYYY-MM-DD
        #[arg(long, value_parser = parse_deadline)]
        deadline: Option<DateTime<Utc>>,

        /// Reminder as "YYYY-MM-DD HH:MM"
        #[arg(long, value_parser = parse_reminder)]
        reminder: Option<DateTime<Utc>>,
    },

    /// Edit a task (unset flags keep their current values)
    Edit {
        /// Task ID
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<Category>,

        /// New deadline as YYYY-MM-DD
        #[arg(long, value_parser = parse_deadline)]
        deadline: Option<DateTime<Utc>>,

        /// Remove the deadline
        #[arg(long, conflicts_with = "deadline")]
        clear_deadline: bool,

        /// New reminder as "YYYY-MM-DD HH:MM"
        #[arg(long, value_parser = parse_reminder)]
        reminder: Option<DateTime<Utc>>,

        /// Remove the reminder
        #[arg(long, conflicts_with = "reminder")]
        clear_reminder: bool,
    },

    /// Mark task(s) completed
    Done {
        /// Task ID(s), comma-separated
        id: String,
    },

    /// Mark task(s) pending again
    Undone {
        /// Task ID(s), comma-separated
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Bulk operations over many tasks at once
    #[command(subcommand)]
    Bulk(BulkCommands),

    /// Show or update the profile
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Show or change client settings
    Config {
        /// Persist a new API base URL
        #[arg(long)]
        set_api_url: Option<String>,
    },
}

#[derive(Subcommand)]
enum BulkCommands {
    /// Complete several tasks concurrently, then refetch
    Complete {
        /// Task IDs, comma-separated
        ids: String,
    },

    /// Delete several tasks concurrently, then refetch
    Delete {
        /// Task IDs, comma-separated
        ids: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the signed-in user's profile
    Show,

    /// Update name and/or email
    Set {
        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New email
        #[arg(long)]
        email: Option<String>,
    },
}

fn parse_deadline(s: &str) -> ClientResult<DateTime<Utc>> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| ClientError::InvalidDate {
            value: s.to_string(),
            expected: "YYYY-MM-DD".to_string(),
        })
}

fn parse_reminder(s: &str) -> ClientResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .map(|dt| dt.and_utc())
        .map_err(|_| ClientError::InvalidDate {
            value: s.to_string(),
            expected: "YYYY-MM-DD HH:MM".to_string(),
        })
}

fn prompt_password(prompt: &str) -> ClientResult<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| ClientError::Prompt {
            reason: e.to_string(),
        })
}

fn confirm(prompt: &str) -> ClientResult<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| ClientError::Prompt {
            reason: e.to_string(),
        })
}

async fn require_session(store: &SessionStore) -> ClientResult<Session> {
    store.load().await?.ok_or(ClientError::NotLoggedIn)
}

async fn fetch_tasks(tasks: &TasksDomain) -> ClientResult<Vec<Task>> {
    let pb = ui::spinner("Loading tasks...");
    let result = tasks.list_tasks().await;
    pb.finish_and_clear();
    result
}

fn split_ids(ids: &str) -> Vec<String> {
    ids.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "command failed");
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let dir = client_dir()?;
    let config = ConfigStore::new(&dir);
    let base_url = config.resolve_api_url(cli.api_url.as_deref()).await?;
    let store = SessionStore::new(&dir);

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => prompt_password("Password")?,
            };

            let auth = AuthDomain::new(ApiClient::new(base_url), store);
            let user = auth.register(name, email, password).await?;

            ui::print_success(&format!("Account created for {}", user.email));
            ui::print_info("Run 'smart-todo login' to sign in");
        }

        Commands::Login { email, password } => {
            if let Some(session) = store.load().await? {
                ui::print_info(&format!(
                    "Already logged in as {}. Run 'smart-todo logout' first.",
                    session.user.email
                ));
                return Ok(());
            }

            let password = match password {
                Some(p) => p,
                None => prompt_password("Password")?,
            };

            let auth = AuthDomain::new(ApiClient::new(base_url), store);
            let session = auth.login(email, password).await?;

            ui::print_success(&format!("Welcome back, {}!", session.user.name));
        }

        Commands::Logout => {
            let auth = AuthDomain::new(ApiClient::new(base_url), store);
            auth.logout().await?;
            ui::print_success("Signed out");
        }

        Commands::Dashboard => {
            let session = require_session(&store).await?;
            let api = ApiClient::new(base_url).with_token(&session.token);
            let tasks_domain = TasksDomain::new(api);

            let tasks = fetch_tasks(&tasks_domain).await?;
            let now = Utc::now();
            let stats = TaskStats::compute(&tasks, now);

            println!();
            println!("{}", "Dashboard".bold());
            println!(
                "Welcome back, {}! Here's your task overview.",
                session.user.name
            );
            println!();
            println!("{}", ui::stats_table(&stats));
            println!();

            let recent = recent_tasks(&tasks, 5);
            if recent.is_empty() {
                ui::print_info("No tasks yet. Create your first task to get started!");
            } else {
                println!("{}", "Recent Tasks".bold());
                println!("{}", ui::task_table(&recent, now));
            }
        }

        Commands::List {
            search,
            category,
            status,
            sort,
            order,
        } => {
            let session = require_session(&store).await?;
            let api = ApiClient::new(base_url).with_token(&session.token);
            let tasks_domain = TasksDomain::new(api);

            let all_tasks = fetch_tasks(&tasks_domain).await?;
            let now = Utc::now();
            let stats = TaskStats::compute(&all_tasks, now);

            let filter = TaskFilter {
                search: search.unwrap_or_default(),
                category,
                status,
            };
            let filters_active = !filter.search.is_empty()
                || filter.category != CategoryFilter::All
                || filter.status != StatusFilter::All;

            let mut visible = filter.apply(all_tasks);
            sort_tasks(&mut visible, sort, order);

            if visible.is_empty() {
                ui::print_info("No tasks found");
                if filters_active {
                    println!("Try adjusting your search or filters");
                } else {
                    println!("Get started by creating your first task");
                }
            } else {
                println!("{}", ui::task_table(&visible, now));
                println!();
                ui::print_info(&ui::completion_summary(&stats));
            }
        }

        Commands::Show { id } => {
            let session = require_session(&store).await?;
            let api = ApiClient::new(base_url).with_token(&session.token);
            let tasks_domain = TasksDomain::new(api);

            let task = tasks_domain.get_task(&id).await?;
            ui::display_task_details(&task, Utc::now());
        }

        Commands::Add {
            title,
            category,
            deadline,
            reminder,
        } => {
            let session = require_session(&store).await?;
            let api = ApiClient::new(base_url).with_token(&session.token);
            let tasks_domain = TasksDomain::new(api);

            let payload = TaskPayload {
                title,
                category,
                deadline,
                reminder,
            };
            let task = tasks_domain.create_task(&payload).await?;

            ui::print_success(&format!("Created task {} - {}", task.id, task.title));
        }

        Commands::Edit {
            id,
            title,
            category,
            deadline,
            clear_deadline,
            reminder,
            clear_reminder,
        } => {
            let session = require_session(&store).await?;
            let api = ApiClient::new(base_url).with_token(&session.token);
            let tasks_domain = TasksDomain::new(api);

            // Edit-form semantics: fetch, overlay, submit the whole payload.
            let task = tasks_domain.get_task(&id).await?;
            let payload = TaskPayload {
                title: title.unwrap_or(task.title),
                category: category.unwrap_or(task.category),
                deadline: if clear_deadline {
                    None
                } else {
                    deadline.or(task.deadline)
                },
                reminder: if clear_reminder {
                    None
                } else {
                    reminder.or(task.reminder)
                },
            };

            let updated = tasks_domain.update_task(&id, &payload).await?;
            ui::print_success(&format!("Updated task {} - {}", updated.id, updated.title));
        }

        Commands::Done { id } => {
            let session = require_session(&store).await?;
            let api = ApiClient::new(base_url).with_token(&session.token);
            let tasks_domain = TasksDomain::new(api);

            let ids = split_ids(&id);
            for task_id in &ids {
                tasks_domain.set_completed(task_id, true).await?;
            }
            ui::print_success(&format!("Marked {} task(s) completed", ids.len()));
        }

        Commands::Undone { id } => {
            let session = require_session(&store).await?;
            let api = ApiClient::new(base_url).with_token(&session.token);
            let tasks_domain = TasksDomain::new(api);

            let ids = split_ids(&id);
            for task_id in &ids {
                tasks_domain.set_completed(task_id, false).await?;
            }
            ui::print_success(&format!("Marked {} task(s) pending", ids.len()));
        }

        Commands::Delete { id, yes } => {
            let session = require_session(&store).await?;
            let api = ApiClient::new(base_url).with_token(&session.token);
            let tasks_domain = TasksDomain::new(api);

            let task = tasks_domain.get_task(&id).await?;

            if !yes {
                let prompt = format!(
                    "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                    task.title
                );
                if !confirm(&prompt)? {
                    ui::print_info("Delete cancelled");
                    return Ok(());
                }
            }

            tasks_domain.delete_task(&id).await?;
            ui::print_success(&format!("Deleted task {}", task.title));
        }

        Commands::Bulk(bulk_cmd) => {
            let session = require_session(&store).await?;
            let api = ApiClient::new(base_url).with_token(&session.token);
            let tasks_domain = TasksDomain::new(api);

            match bulk_cmd {
                BulkCommands::Complete { ids } => {
                    let ids = split_ids(&ids);
                    let refreshed = tasks_domain.bulk_complete(&ids).await?;
                    let stats = TaskStats::compute(&refreshed, Utc::now());

                    ui::print_success(&format!("Marked {} task(s) completed", ids.len()));
                    ui::print_info(&ui::completion_summary(&stats));
                }

                BulkCommands::Delete { ids, yes } => {
                    let ids = split_ids(&ids);

                    if !yes {
                        let prompt =
                            format!("Are you sure you want to delete {} tasks?", ids.len());
                        if !confirm(&prompt)? {
                            ui::print_info("Delete cancelled");
                            return Ok(());
                        }
                    }

                    let refreshed = tasks_domain.bulk_delete(&ids).await?;

                    ui::print_success(&format!("Deleted {} task(s)", ids.len()));
                    ui::print_info(&format!("{} task(s) remaining", refreshed.len()));
                }
            }
        }

        Commands::Profile(profile_cmd) => {
            let session = require_session(&store).await?;
            let api = ApiClient::new(base_url).with_token(&session.token);
            let auth = AuthDomain::new(api, store);

            match profile_cmd {
                ProfileCommands::Show => {
                    let user = auth.profile().await?;
                    ui::display_profile(&user);
                }

                ProfileCommands::Set { name, email } => {
                    let current = auth.profile().await?;
                    let user = auth
                        .update_profile(
                            name.unwrap_or(current.name),
                            email.unwrap_or(current.email),
                        )
                        .await?;
                    ui::print_success(&format!("Profile updated for {}", user.email));
                }
            }
        }

        Commands::Config { set_api_url } => {
            if let Some(url) = set_api_url {
                config.set_api_url(&url).await?;
                ui::print_success(&format!("API URL set to {url}"));
            } else {
                println!("{}: {}", "API URL".bold(), base_url);
                println!("{}: {}", "Client directory".bold(), dir.display());
                match store.load().await? {
                    Some(session) => ui::print_info(&format!(
                        "Logged in as {} <{}>",
                        session.user.name, session.user.email
                    )),
                    None => ui::print_info("Not logged in"),
                }
            }
        }
    }

    Ok(())
}

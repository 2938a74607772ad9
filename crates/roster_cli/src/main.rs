//! Command-line shell for the employee roster.
//!
//! # Responsibility
//! - Parse commands and feed them through the roster core.
//! - Print tables and operator messages; exit non-zero on failure.

mod api;
mod config;
mod render;

use api::{ActionResponse, Shell, TableResponse};
use clap::{Args, Parser, Subcommand};
use config::ShellConfig;
use log::{info, warn};
use roster_core::db::open_db;
use roster_core::EmployeeForm;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Maintain a small roster of employee records.
#[derive(Parser, Debug)]
#[command(name = "roster", version)]
struct Cli {
    /// Path to the roster database file
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every employee
    List,
    /// Show employees whose ID or name contains QUERY (case-sensitive)
    Search { query: String },
    /// Show one employee
    Show { id: String },
    /// Add a new employee
    Add(FormArgs),
    /// Overwrite every field of an existing employee
    Update(FormArgs),
    /// Permanently delete an employee
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Form fields; blanks are reported by the core as missing.
#[derive(Args, Debug)]
struct FormArgs {
    #[arg(long, default_value = "")]
    id: String,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    department: String,
    /// Exactly 11 digits
    #[arg(long, default_value = "")]
    phone: String,
    /// Present or Absent
    #[arg(long, default_value = "")]
    attendance: String,
}

impl From<FormArgs> for EmployeeForm {
    fn from(args: FormArgs) -> Self {
        Self {
            id: args.id,
            name: args.name,
            department: args.department,
            phone: args.phone,
            attendance: args.attendance,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = ShellConfig::resolve(cli.db, cli.log_level, cli.log_dir);

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = roster_core::init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!(
                "error: cannot open roster database `{}`: {err}",
                config.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };
    info!("event=shell_start module=cli status=ok");

    let mut shell = Shell::new(&conn);
    let succeeded = match cli.command {
        Command::List => print_table(shell.list()),
        Command::Search { query } => print_table(shell.search(&query)),
        Command::Show { id } => match shell.show(&id) {
            Ok(form) => {
                print_form(&form);
                true
            }
            Err(message) => {
                eprintln!("{message}");
                false
            }
        },
        Command::Add(args) => print_action(shell.add(&args.into())),
        Command::Update(args) => print_action(shell.update(&args.into())),
        Command::Delete { id, yes } => {
            let stdin = io::stdin();
            print_action(delete_employee(
                &mut shell,
                &id,
                yes,
                &mut stdin.lock(),
                &mut io::stdout(),
            ))
        }
    };

    drop(shell);
    if let Err((_, err)) = conn.close() {
        warn!("event=db_close module=cli status=error error={err}");
    }

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_table(response: TableResponse) -> bool {
    if response.ok {
        print!("{}", render::render_table(&response.rows));
        println!("{}", response.message);
    } else {
        eprintln!("{}", response.message);
    }
    response.ok
}

fn print_action(response: ActionResponse) -> bool {
    if response.ok {
        println!("{}", response.message);
    } else {
        eprintln!("{}", response.message);
    }
    response.ok
}

fn print_form(form: &EmployeeForm) {
    println!("Employee ID:  {}", form.id);
    println!("Name:         {}", form.name);
    println!("Department:   {}", form.department);
    println!("Phone Number: {}", form.phone);
    println!("Attendance:   {}", form.attendance);
}

/// Deletes an existing employee, prompting first unless `yes` is set.
///
/// Unknown ids fail before any prompt is shown.
fn delete_employee(
    shell: &mut Shell<'_>,
    id: &str,
    yes: bool,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> ActionResponse {
    if let Err(message) = shell.show(id) {
        return ActionResponse::failure(message);
    }
    if !yes && !confirm_delete(id, input, output) {
        return ActionResponse::cancelled(id.trim());
    }
    shell.delete(id)
}

/// Asks the operator to confirm a delete; only `y`/`yes` confirms.
///
/// An unwritable prompt counts as a refusal.
fn confirm_delete(id: &str, input: &mut impl BufRead, output: &mut impl Write) -> bool {
    let prompted = write!(
        output,
        "Are you sure you want to delete employee '{}'? [y/N] ",
        id.trim()
    )
    .and_then(|()| output.flush());
    if prompted.is_err() {
        return false;
    }

    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

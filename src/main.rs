use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_budget_command, handle_daily, handle_list, handle_recurring, handle_streak,
    handle_summary, AddArgs, BudgetCommands,
};
use expense_tracker::config::ExpensePaths;
use expense_tracker::models::parse_date;
use expense_tracker::storage::Storage;
use expense_tracker::AppContext;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track expenses, a monthly budget and a daily usage streak",
    long_about = "Record categorized expenses, review them by category, by day \
                  and against a monthly budget, and keep a streak of consecutive \
                  days of use."
)]
struct Cli {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Treat this date (DD-MM-YYYY) as today
    #[arg(long, global = true, env = "EXPENSE_TRACKER_TODAY", hide = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense
    Add(AddArgs),

    /// List expenses grouped by category
    #[command(alias = "ls")]
    List,

    /// Show expenses broken down by day
    Daily,

    /// Show budget, total spent and remaining budget
    Summary,

    /// List recurring expenses
    Recurring,

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show the usage streak
    Streak,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    expense_tracker::logging::init_tracing(cli.verbose);

    let today: NaiveDate = match cli.today.as_deref() {
        Some(raw) => parse_date(raw).context("Invalid --today value")?,
        None => Local::now().date_naive(),
    };

    let paths = ExpensePaths::new()?;
    let storage = Storage::new(paths.clone())?;
    let mut ctx = AppContext::open(storage, today)?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut ctx, args, today)?,
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Daily) => handle_daily(&ctx),
        Some(Commands::Summary) => handle_summary(&ctx),
        Some(Commands::Recurring) => handle_recurring(&ctx),
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut ctx, cmd)?,
        Some(Commands::Streak) => handle_streak(&ctx),
        Some(Commands::Config) => {
            let settings = ctx.settings();
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Store file:      {}", paths.store_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!(
                "  Monthly budget:  {}",
                settings
                    .monthly_budget
                    .format_with_symbol(&settings.currency_symbol)
            );
        }
        None => {
            println!("Expense Tracker");
            println!();
            print!(
                "{}",
                expense_tracker::display::format_streak(&ctx.streak(), ctx.launch_change())
            );
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}

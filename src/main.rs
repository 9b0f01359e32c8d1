use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use expense_forecast::cli;
use expense_forecast::config::paths::{ExpensePaths, DATA_DIR_ENV};
use expense_forecast::config::settings::Settings;
use expense_forecast::models::Category;
use expense_forecast::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Track expenses, check your monthly budget and forecast next month's spending",
    long_about = "expense records discretionary expenses in a local CSV file, shows \
                  total spending against a monthly budget, and fits a simple trend \
                  on monthly totals to forecast what next month will cost."
)]
struct Cli {
    /// Directory holding expenses, settings and the forecast model
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. "250" or "99.50")
        amount: String,
        /// Category: Food, Travel, Shopping, Bills, Entertainment or Other
        #[arg(short, long, default_value = "Other")]
        category: Category,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all recorded expenses
    #[command(alias = "ls")]
    List,

    /// Delete every recorded expense
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show spending against the monthly budget
    Budget {
        /// Set a new monthly budget before showing the status
        #[arg(long)]
        set: Option<String>,
    },

    /// Show spending by category
    Summary {
        /// Show only the top N categories
        #[arg(long)]
        top: Option<usize>,
    },

    /// Train the forecast model on all recorded expenses
    Train,

    /// Predict next month's total spending
    Predict,

    /// Show the stored forecast model
    Model,

    /// Add random sample expenses from the last 30 days
    Sample {
        /// Number of expenses to generate
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();

    let paths = match args.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.init()?;

    match args.command {
        Some(Commands::Add {
            amount,
            category,
            date,
        }) => cli::handle_add(&storage, &settings, amount, category, date)?,
        Some(Commands::List) => cli::handle_list(&storage, &settings)?,
        Some(Commands::Clear { yes }) => cli::handle_clear(&storage, yes)?,
        Some(Commands::Budget { set }) => cli::handle_budget(&storage, &paths, &mut settings, set)?,
        Some(Commands::Summary { top }) => cli::handle_summary(&storage, &settings, top)?,
        Some(Commands::Train) => cli::handle_train(&storage)?,
        Some(Commands::Predict) => cli::handle_predict(&storage, &settings)?,
        Some(Commands::Model) => cli::handle_model(&storage)?,
        Some(Commands::Sample { count }) => cli::handle_sample(&storage, count)?,
        Some(Commands::History { limit }) => cli::handle_history(&storage, limit)?,
        Some(Commands::Config) => {
            println!("expense-forecast Configuration");
            println!("==============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Model artifact:  {}", paths.model_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Monthly budget:  {:.2}", settings.monthly_budget);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("expense - expense tracking with a next-month forecast");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}

use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for sitetrack
/// CLI application to track job sites on a three-column task board
#[derive(Parser)]
#[command(
    name = "sitetrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple job-site tracking CLI: sites, crews and photos on a to-do / in-progress / done board",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Create an account
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long = "first-name", default_value = "")]
        first_name: String,

        #[arg(long = "last-name", default_value = "")]
        last_name: String,

        #[arg(long, default_value = "")]
        company: String,
    },

    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out of the current session
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Add a work site
    Add {
        /// Site name (must be non-empty)
        name: String,

        /// Create directly in a column (todo, in-progress, done)
        #[arg(long = "status")]
        status: Option<String>,

        /// Assign a team member right away
        #[arg(long = "assign")]
        assign: Option<String>,
    },

    /// List work sites
    List {
        #[arg(long, help = "Filter by column (todo, in-progress, done)")]
        status: Option<String>,

        #[arg(long, help = "Filter by assignee")]
        assigned: Option<String>,
    },

    /// Rename a work site
    Rename {
        id: String,
        new_name: String,
    },

    /// Delete a work site by id
    Del {
        id: String,
    },

    /// Assign a team member to a site
    Assign {
        id: String,
        member: String,
    },

    /// Set the comment on a site
    Comment {
        id: String,
        text: String,
    },

    /// Select a site for detail and photo viewing
    Select {
        id: String,
    },

    /// Show the selected site's details
    Detail,

    /// Attach, detach and browse site photos
    Photo {
        #[command(subcommand)]
        action: PhotoAction,
    },

    /// Render the task board
    Board,

    /// Move a site to a column, or reorder it within its column
    Move {
        id: String,

        /// Target column (todo, in-progress, done)
        column: String,

        /// Position within the target column (1-based)
        #[arg(long = "at")]
        at: Option<usize>,
    },

    /// Print the audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the site list
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Only export one column (todo, in-progress, done)")]
        status: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum PhotoAction {
    /// Upload one or more files and attach them to a site
    Attach {
        id: String,

        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Detach the n-th photo (1-based) from a site
    Detach {
        id: String,
        index: usize,
    },

    /// List the photos of a site
    List {
        id: String,
    },

    /// Open the viewer on the n-th photo (1-based)
    View {
        id: String,
        index: usize,
    },

    /// Move the viewer to the previous photo
    Prev,

    /// Move the viewer to the next photo
    Next,
}

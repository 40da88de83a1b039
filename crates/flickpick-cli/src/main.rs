use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, clear, config, search, show, watched};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "flickpick")]
#[command(about = "flickpick - Find movies and keep track of what you've watched")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse movies interactively (default)
    #[command(long_about = "Interactive browser: type to search, pick a result to see details, rate it and add it to your watched list. Superseded searches are cancelled as you type.")]
    Browse,

    /// Search for movies by title
    Search {
        /// Free-text query (minimum 3 characters)
        query: String,
    },

    /// Show details for one movie
    Show {
        /// IMDb identifier, e.g. tt1375666
        imdb_id: String,
    },

    /// Manage the watched list
    Watched {
        #[command(subcommand)]
        cmd: WatchedCommands,
    },

    /// Configure the OMDb API key and options
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },

    /// Clear stored data
    Clear {
        /// Clear the watched list and credentials
        #[arg(long, action = ArgAction::SetTrue)]
        all: bool,

        /// Clear the watched list
        #[arg(long, action = ArgAction::SetTrue)]
        watched: bool,

        /// Clear stored credentials
        #[arg(long, action = ArgAction::SetTrue)]
        credentials: bool,
    },
}

#[derive(Subcommand)]
enum WatchedCommands {
    /// List watched movies with a summary
    List,

    /// Fetch a movie by id, rate it, and add it to the list
    Add {
        /// IMDb identifier
        imdb_id: String,

        /// Your rating (1-10); prompts interactively when omitted
        #[arg(long)]
        rating: Option<u8>,
    },

    /// Remove a movie from the list
    Remove {
        /// IMDb identifier
        imdb_id: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show the API key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },

    /// Set the OMDb API key
    #[command(long_about = "Store the OMDb API key. Get a free key at https://www.omdbapi.com/apikey.aspx. Prompts interactively when --key is not given.")]
    Key {
        /// The API key (if not provided, will prompt)
        #[arg(long)]
        key: Option<String>,
    },

    /// Configure search and rating options
    Options {
        /// Minimum query length before a search is sent
        #[arg(long)]
        min_query_length: Option<usize>,

        /// Maximum star rating
        #[arg(long)]
        max_rating: Option<u8>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => browse::run_browse(&output).await,
        Commands::Search { query } => search::run_search(&query, &output).await,
        Commands::Show { imdb_id } => show::run_show(&imdb_id, &output).await,
        Commands::Watched { cmd } => match cmd {
            WatchedCommands::List => watched::run_list(&output),
            WatchedCommands::Add { imdb_id, rating } => {
                watched::run_add(&imdb_id, rating, &output).await
            }
            WatchedCommands::Remove { imdb_id } => watched::run_remove(&imdb_id, &output),
        },
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show { full: false });
            match cmd {
                ConfigCommands::Show { full } => config::run_show(full, &output),
                ConfigCommands::Key { key } => config::run_key(key, &output),
                ConfigCommands::Options {
                    min_query_length,
                    max_rating,
                } => config::run_options(min_query_length, max_rating, &output),
            }
        }
        Commands::Clear {
            all,
            watched,
            credentials,
        } => clear::run_clear(all, watched, credentials, &output),
    }
}

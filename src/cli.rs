use clap::{Parser, Subcommand};

/// Check opening hours, browse the menu, and total orders.
#[derive(Parser, Debug)]
#[command(name = "restaurant")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the restaurant definition JSON file.
    #[arg(short, long, default_value = "restaurant.json")]
    pub file: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show name, location, hours, and menu.
    #[default]
    Details,

    /// Show whether the restaurant is open.
    Status {
        /// Check at this time of day (HH:MM or HH:MM:SS) instead of now.
        #[arg(long)]
        at: Option<String>,
    },

    /// List the menu.
    Menu,

    /// Total the price of the named items.
    Total {
        /// Item names, repeated once per portion.
        items: Vec<String>,
    },

    /// Pick items interactively and total them.
    Order,
}

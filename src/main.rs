use clap::Parser;
use std::path::Path;

use restaurant_rs::cli::{Cli, Command};
use restaurant_rs::clock::{FixedClock, parse_time};
use restaurant_rs::config::load_restaurant;
use restaurant_rs::error::{RestaurantError, Result};
use restaurant_rs::interface::{
    display_details, display_menu, display_status, display_total, missing_item_hint,
    prompt_order_items,
};
use restaurant_rs::logging::init_cli_logger;
use restaurant_rs::models::Restaurant;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let restaurant = load(&cli.file)?;

    match cli.command.unwrap_or_default() {
        Command::Details => {
            display_details(&restaurant);
            Ok(())
        }
        Command::Status { at } => cmd_status(restaurant, at.as_deref()),
        Command::Menu => {
            display_menu(restaurant.get_menu());
            Ok(())
        }
        Command::Total { items } => cmd_total(&restaurant, &items),
        Command::Order => cmd_order(&restaurant),
    }
}

/// Load the definition file, explaining its shape when it is missing.
fn load(file_path: &str) -> Result<Restaurant> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Restaurant definition not found: {}", file_path);
        eprintln!("Create it with name, location, opening_time, closing_time and menu fields.");
    }

    load_restaurant(path)
}

/// Report open/closed, optionally at a fixed time of day.
fn cmd_status(restaurant: Restaurant, at: Option<&str>) -> Result<()> {
    let restaurant = match at {
        Some(input) => {
            let time = parse_time(input).ok_or_else(|| {
                RestaurantError::InvalidInput(format!("Invalid time of day: {}", input))
            })?;
            restaurant.with_clock(FixedClock(time))
        }
        None => restaurant,
    };

    display_status(&restaurant);
    Ok(())
}

/// Total the named items, suggesting a close name when one is unknown.
fn cmd_total(restaurant: &Restaurant, items: &[String]) -> Result<()> {
    match restaurant.calculate_order_total(items) {
        Ok(total) => {
            display_total(items, total);
            Ok(())
        }
        Err(RestaurantError::ItemNotFound(name)) => {
            if let Some(hint) = missing_item_hint(restaurant.get_menu(), &name) {
                eprintln!("{}", hint);
            }
            Err(RestaurantError::ItemNotFound(name))
        }
        Err(e) => Err(e),
    }
}

/// Pick items from the menu interactively, then total them.
fn cmd_order(restaurant: &Restaurant) -> Result<()> {
    if restaurant.get_menu().is_empty() {
        println!("The menu is empty. Nothing to order.");
        return Ok(());
    }

    let selected = prompt_order_items(restaurant.get_menu())?;
    let total = restaurant.calculate_order_total(&selected)?;
    display_total(&selected, total);
    Ok(())
}

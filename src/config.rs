use std::fs;
use std::path::Path;

use chrono::NaiveTime;
use serde::Deserialize;
use tracing::info;

use crate::error::{RestaurantError, Result};
use crate::models::{MenuItem, Restaurant};

/// On-disk description of a restaurant.
#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantConfig {
    pub name: String,
    pub location: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

impl RestaurantConfig {
    /// Build a restaurant, keeping the menu in file order.
    ///
    /// Opening time must be earlier than closing time.
    pub fn into_restaurant(self) -> Result<Restaurant> {
        if self.opening_time >= self.closing_time {
            return Err(RestaurantError::InvalidInput(format!(
                "opening time {} must be earlier than closing time {}",
                self.opening_time, self.closing_time
            )));
        }

        let mut restaurant = Restaurant::new(
            self.name,
            self.location,
            self.opening_time,
            self.closing_time,
        );
        for item in self.menu {
            restaurant.add_to_menu(item.name, item.price);
        }
        Ok(restaurant)
    }
}

/// Load a restaurant from a JSON definition file.
pub fn load_restaurant<P: AsRef<Path>>(path: P) -> Result<Restaurant> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let config: RestaurantConfig = serde_json::from_str(&content)?;
    let restaurant = config.into_restaurant()?;

    info!(
        path = %path.display(),
        restaurant = restaurant.name(),
        items = restaurant.get_menu().len(),
        "loaded restaurant definition"
    );
    Ok(restaurant)
}

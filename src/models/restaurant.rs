use std::fmt;

use chrono::NaiveTime;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{RestaurantError, Result};
use crate::models::MenuItem;

/// A restaurant with a daily operating window and a menu.
///
/// The menu keeps insertion order and is searched linearly; it only ever
/// holds a handful of items.
pub struct Restaurant {
    name: String,
    location: String,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    menu: Vec<MenuItem>,
    clock: Box<dyn Clock>,
}

impl Restaurant {
    /// Create a restaurant with an empty menu, reading time from the system clock.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            opening_time,
            closing_time,
            menu: Vec::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source used by [`Restaurant::is_restaurant_open`].
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.opening_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }

    /// Current time of day according to the configured clock.
    pub fn current_time(&self) -> NaiveTime {
        self.clock.now()
    }

    /// True when the current time lies strictly between opening and closing.
    ///
    /// The opening and closing instants themselves count as closed.
    pub fn is_restaurant_open(&self) -> bool {
        self.is_open_at(self.current_time())
    }

    /// True when `now` lies strictly between opening and closing.
    pub fn is_open_at(&self, now: NaiveTime) -> bool {
        let open = self.opening_time < now && now < self.closing_time;
        debug!(restaurant = %self.name, %now, open, "checked opening hours");
        open
    }

    /// Current menu in insertion order.
    pub fn get_menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// First menu item with exactly this name.
    pub fn find_item_by_name(&self, name: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.name == name)
    }

    /// Append an item to the menu. Duplicate names are accepted.
    pub fn add_to_menu(&mut self, name: impl Into<String>, price: u32) {
        let item = MenuItem::new(name, price);
        debug!(item = %item.name, price, "adding menu item");
        self.menu.push(item);
    }

    /// Remove the first item with this name.
    pub fn remove_from_menu(&mut self, name: &str) -> Result<()> {
        let index = self
            .menu
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| {
                warn!(item = name, "cannot remove item missing from menu");
                RestaurantError::ItemNotFound(name.to_string())
            })?;

        self.menu.remove(index);
        debug!(item = name, remaining = self.menu.len(), "removed menu item");
        Ok(())
    }

    /// Sum the prices of the selected items.
    ///
    /// Each name is looked up on its own, so repeated names are charged once
    /// per occurrence. Fails on the first name that is not on the menu.
    pub fn calculate_order_total<S: AsRef<str>>(&self, selected: &[S]) -> Result<u32> {
        selected.iter().try_fold(0u32, |total, name| {
            let name = name.as_ref();
            let item = self.find_item_by_name(name).ok_or_else(|| {
                warn!(item = name, "ordered item missing from menu");
                RestaurantError::ItemNotFound(name.to_string())
            })?;
            total.checked_add(item.price).ok_or_else(|| {
                RestaurantError::InvalidInput("Order total overflows".to_string())
            })
        })
    }
}

impl fmt::Debug for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Restaurant")
            .field("name", &self.name)
            .field("location", &self.location)
            .field("opening_time", &self.opening_time)
            .field("closing_time", &self.closing_time)
            .field("menu", &self.menu)
            .finish_non_exhaustive()
    }
}

/// Details view: identity, hours, then one menu item per line.
impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Restaurant: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Opening time: {}", self.opening_time)?;
        writeln!(f, "Closing time: {}", self.closing_time)?;
        write!(f, "Menu:")?;
        for item in &self.menu {
            write!(f, "\n{}", item)?;
        }
        Ok(())
    }
}

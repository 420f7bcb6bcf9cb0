use std::fmt;

use serde::Deserialize;

/// A named, priced dish on a menu.
///
/// Prices are whole currency units and can never be negative.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: u32,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.price)
    }
}

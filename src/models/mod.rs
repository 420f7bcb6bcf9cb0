mod menu_item;
mod restaurant;

pub use menu_item::MenuItem;
pub use restaurant::Restaurant;

pub mod prompts;
pub mod render;

pub use prompts::{missing_item_hint, prompt_order_items, suggest_item};
pub use render::{display_details, display_menu, display_status, display_total, status_line};

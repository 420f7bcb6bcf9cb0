use dialoguer::MultiSelect;
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::MenuItem;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Let the user tick menu items; returns the chosen names in menu order.
pub fn prompt_order_items(menu: &[MenuItem]) -> Result<Vec<String>> {
    let options: Vec<String> = menu
        .iter()
        .map(|item| format!("{} ({})", item.name, item.price))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Select items for the order (space to toggle, enter to confirm)")
        .items(&options)
        .interact()?;

    Ok(chosen
        .into_iter()
        .map(|index| menu[index].name.clone())
        .collect())
}

/// Closest menu item name to `input`, if any is similar enough.
pub fn suggest_item<'a>(menu: &'a [MenuItem], input: &str) -> Option<&'a str> {
    let input = input.to_lowercase();

    menu.iter()
        .map(|item| (item.name.as_str(), jaro_winkler(&item.name.to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name)
}

/// "Did you mean" line for a name missing from the menu.
pub fn missing_item_hint(menu: &[MenuItem], missing: &str) -> Option<String> {
    suggest_item(menu, missing).map(|name| format!("Did you mean '{}'?", name))
}

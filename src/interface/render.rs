use crate::models::{MenuItem, Restaurant};

/// Print the restaurant's details view.
pub fn display_details(restaurant: &Restaurant) {
    println!("{}", restaurant);
}

/// Print whether the restaurant is open at the clock's current time.
pub fn display_status(restaurant: &Restaurant) {
    println!("{}", status_line(restaurant));
}

/// One-line open/closed status. Reads the clock once.
pub fn status_line(restaurant: &Restaurant) -> String {
    let now = restaurant.current_time();
    let state = if restaurant.is_open_at(now) {
        "open"
    } else {
        "closed"
    };

    format!(
        "{} is {} at {} (hours {} - {})",
        restaurant.name(),
        state,
        now.format("%H:%M:%S"),
        restaurant.opening_time(),
        restaurant.closing_time()
    )
}

/// Print the menu as an aligned table.
pub fn display_menu(menu: &[MenuItem]) {
    if menu.is_empty() {
        println!("Menu: (empty)");
        return;
    }

    println!();
    println!("=== Menu ({} items) ===", menu.len());
    println!();

    let max_name_len = menu.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for (i, item) in menu.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {:>6}",
            i + 1,
            item.name,
            item.price,
            width = max_name_len
        );
    }

    println!();
}

/// Print an order and its total.
pub fn display_total<S: AsRef<str>>(selected: &[S], total: u32) {
    if selected.is_empty() {
        println!("No items selected. Total: 0");
        return;
    }

    println!();
    println!("--- Order ---");
    for name in selected {
        println!("  {}", name.as_ref());
    }
    println!("Total: {}", total);
    println!();
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::NaiveTime;

    use super::*;
    use crate::clock::FixedClock;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn sample_restaurant() -> Restaurant {
        Restaurant::new("Amelie's cafe", "Chennai", hms(10, 30, 0), hms(22, 0, 0))
    }

    #[test]
    fn test_status_line_open() {
        let restaurant = sample_restaurant().with_clock(FixedClock(hms(12, 0, 0)));
        assert_eq!(
            status_line(&restaurant),
            "Amelie's cafe is open at 12:00:00 (hours 10:30:00 - 22:00:00)"
        );
    }

    #[test]
    fn test_status_line_uses_single_clock_reading() {
        let reads = Rc::new(Cell::new(0));
        let counter = Rc::clone(&reads);
        let restaurant = sample_restaurant().with_clock(move || {
            counter.set(counter.get() + 1);
            if counter.get() == 1 {
                hms(22, 0, 0)
            } else {
                hms(21, 59, 59)
            }
        });

        assert_eq!(
            status_line(&restaurant),
            "Amelie's cafe is closed at 22:00:00 (hours 10:30:00 - 22:00:00)"
        );
        assert_eq!(reads.get(), 1);
    }
}

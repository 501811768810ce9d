//! Categories command handler.

use anyhow::Result;
use mealmate_core::domain::display::filter_chips;
use mealmate_core::{CategoryMeta, Dish};

use crate::bootstrap::CliContext;
use crate::presentation::print_separator;

/// `(to try, tried)` counts for the dishes a predicate selects.
fn counts<'a>(dishes: impl Iterator<Item = &'a Dish>) -> (usize, usize) {
    dishes.fold((0, 0), |(to_try, tried), d| {
        if d.is_tried {
            (to_try, tried + 1)
        } else {
            (to_try + 1, tried)
        }
    })
}

/// Execute the categories command: every filter chip with its counts.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let all = ctx.engine().all_dishes();

    println!("{:<8} {:<14} {:>6} {:>6}", "Tag", "Filter", "To try", "Tried");
    print_separator(37);
    for (filter, label) in filter_chips() {
        let (to_try, tried) = counts(all.iter().filter(|d| filter.matches(&d.category)));
        println!("{:<8} {label:<14} {to_try:>6} {tried:>6}", filter.tag());
    }

    let (to_try, tried) = counts(all.iter().filter(|d| d.category.known().is_none()));
    if to_try + tried > 0 {
        let other = CategoryMeta::OTHER;
        println!("{:<8} {:<14} {to_try:>6} {tried:>6}", other.badge, other.chip_label);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealmate_core::{Category, NewDish};

    #[test]
    fn test_counts_split_by_status() {
        let mut tried = NewDish::new("a", "a", Category::Main).into_dish(1);
        tried.is_tried = true;
        let untried = NewDish::new("b", "b", Category::Main).into_dish(2);
        let dishes = [tried, untried.clone(), untried];
        assert_eq!(counts(dishes.iter()), (2, 1));
    }
}

//! Universal item list
//!
//! Everything the stall knows how to make. Staff curate the live menu from
//! this list; it is compiled in and never changes at runtime.

/// Reference entry of the universal list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniversalItem {
    pub name: &'static str,
    pub category: &'static str,
    pub price_full: f64,
    pub price_half: f64,
}

const fn item(
    name: &'static str,
    category: &'static str,
    price_full: f64,
    price_half: f64,
) -> UniversalItem {
    UniversalItem {
        name,
        category,
        price_full,
        price_half,
    }
}

pub const NORMAL_MOMOS: &str = "Normal Momos";
pub const HEALTHY_MOMOS: &str = "Healthy Momos";
pub const DIM_SUMS: &str = "Dim Sums";

pub static UNIVERSAL_ITEMS: [UniversalItem; 17] = [
    item("Veg Maida Momos", NORMAL_MOMOS, 200.0, 150.0),
    item("Paneer Maida Momos", NORMAL_MOMOS, 200.0, 150.0),
    item("Chicken Maida Momos", NORMAL_MOMOS, 200.0, 150.0),
    item("Veg Ragi Momos", HEALTHY_MOMOS, 250.0, 180.0),
    item("Veg Oats Momos", HEALTHY_MOMOS, 250.0, 180.0),
    item("Paneer Ragi Momos", HEALTHY_MOMOS, 250.0, 180.0),
    item("Paneer Oats Momos", HEALTHY_MOMOS, 250.0, 180.0),
    item("Chicken Ragi Momos", HEALTHY_MOMOS, 250.0, 180.0),
    item("Chicken Oats Momos", HEALTHY_MOMOS, 250.0, 180.0),
    item("Chicken Dim Sum", DIM_SUMS, 10.0, 70.0),
    item("Veg Dim Sum", DIM_SUMS, 110.0, 65.0),
    item("Prawn Dim Sum", DIM_SUMS, 140.0, 80.0),
    item("Pork Dim Sum", DIM_SUMS, 130.0, 75.0),
    item("Beef Dim Sum", DIM_SUMS, 135.0, 80.0),
    item("Mushroom Dim Sum", DIM_SUMS, 115.0, 70.0),
    item("Shrimp Dim Sum", DIM_SUMS, 145.0, 85.0),
    item("Crab Dim Sum", DIM_SUMS, 150.0, 90.0),
];

/// Exact, case-sensitive name lookup
pub fn find(name: &str) -> Option<&'static UniversalItem> {
    UNIVERSAL_ITEMS.iter().find(|item| item.name == name)
}

/// Items put on a fresh menu (the momo categories)
pub fn starter_menu() -> impl Iterator<Item = &'static UniversalItem> {
    UNIVERSAL_ITEMS
        .iter()
        .filter(|item| item.category != DIM_SUMS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = UNIVERSAL_ITEMS.iter().map(|i| i.name).collect();
        assert_eq!(names.len(), UNIVERSAL_ITEMS.len());
    }

    #[test]
    fn test_find() {
        let item = find("Veg Maida Momos").unwrap();
        assert_eq!(item.category, NORMAL_MOMOS);
        assert_eq!((item.price_full, item.price_half), (200.0, 150.0));
        assert!(find("veg maida momos").is_none());
        assert!(find("Pizza").is_none());
    }

    #[test]
    fn test_starter_menu_is_the_nine_momos() {
        let starters: Vec<_> = starter_menu().collect();
        assert_eq!(starters.len(), 9);
        assert!(starters.iter().all(|i| i.name.ends_with("Momos")));
    }
}

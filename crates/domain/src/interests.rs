//! Interest tag catalog
//!
//! The catalog drives the interest picker; custom tags typed by the user are
//! allowed and sorted after the catalog entries.

use std::collections::HashSet;

/// All catalog interests, in picker display order.
pub const CATALOG: &[&str] = &[
    "Musique",
    "Voyages",
    "Cuisine",
    "Cinema",
    "Sport",
    "Lecture",
    "Photographie",
    "Jeux video",
    "Animaux",
    "Randonnee",
    "Danse",
    "Art",
    "Cafe",
    "Series",
    "Tech",
    "Mode",
    "Brunch",
    "Yoga",
    "Running",
    "Concerts",
];

/// Order a selection: catalog entries first in catalog order, then custom
/// tags sorted alphabetically.
pub fn ordered_selection(selected: &HashSet<String>) -> Vec<String> {
    let mut ordered: Vec<String> = CATALOG
        .iter()
        .filter(|&&tag| selected.contains(tag))
        .map(|&tag| tag.to_string())
        .collect();

    let mut custom: Vec<String> = selected
        .iter()
        .filter(|tag| !CATALOG.contains(&tag.as_str()))
        .cloned()
        .collect();
    custom.sort();

    ordered.extend(custom);
    ordered
}

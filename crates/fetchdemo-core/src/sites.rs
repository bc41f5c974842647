//! The fixed page list every strategy fetches, in report order.

pub const DEMO_SITES: &[&str] = &[
    "https://www.google.com",
    "https://www.microsoft.com",
    "https://bangordailynews.com/",
    "https://www.mainerobotics.org/",
    "https://stackoverflow.com/",
    "https://xkcd.com/",
    "https://www.yahoo.com/",
    "https://store.steampowered.com/",
    "https://www.geeksforgeeks.org/",
];

/// Owned copy of `DEMO_SITES` for a run.
pub fn demo_sites() -> Vec<String> {
    DEMO_SITES.iter().map(|s| s.to_string()).collect()
}

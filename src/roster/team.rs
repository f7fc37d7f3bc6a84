//! Team code normalisation
//!
//! Data sources disagree on franchise codes (`PHO` vs `PHX`, `BRK` vs `BKN`),
//! and relocated franchises keep their historical codes in older records.

const ALIASES: &[(&str, &str)] = &[
    ("PHO", "PHX"),
    ("BRK", "BKN"),
    ("NJN", "BKN"),
    ("NJ", "BKN"),
    ("CHO", "CHA"),
    ("CHH", "CHA"),
    ("GS", "GSW"),
    ("NO", "NOP"),
    ("NOH", "NOP"),
    ("NOK", "NOP"),
    ("NY", "NYK"),
    ("SA", "SAS"),
    ("UTAH", "UTA"),
    ("WSH", "WAS"),
    ("SEA", "OKC"),
    ("VAN", "MEM"),
];

/// Canonical upper-case code for a team
pub fn canonical_team(code: &str) -> String {
    let upper = code.trim().to_ascii_uppercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == upper)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(upper)
}

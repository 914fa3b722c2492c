//! Known stations, their lines, and fuzzy name suggestions.

use std::fmt;

use tracing::debug;

/// Maximum number of suggestions returned for an unknown station.
pub const MAX_SUGGESTIONS: usize = 5;

/// Inputs shorter than this get no suggestions.
const MIN_SUGGEST_CHARS: usize = 2;

/// A metro line identifier such as "M1".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line(&'static str);

impl Line {
    /// Line assigned to stations without an explicit mapping.
    pub const DEFAULT: Self = Self("M1");

    /// Create a line from its identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Returns the line identifier.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A station in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    /// Canonical station name.
    pub name: &'static str,

    /// Explicit line, if the station has one.
    pub line: Option<Line>,
}

impl Station {
    /// A station served by an explicit line.
    pub const fn on_line(name: &'static str, line: &'static str) -> Self {
        Self {
            name,
            line: Some(Line::new(line)),
        }
    }

    /// A station with no explicit line.
    pub const fn unmapped(name: &'static str) -> Self {
        Self { name, line: None }
    }
}

/// Stations served by the network, in canonical order.
const PARIS_STATIONS: &[Station] = &[
    Station::on_line("Chatelet", "M1"),
    Station::on_line("République", "M3"),
    Station::on_line("Bastille", "M1"),
    Station::on_line("Nation", "M1"),
    Station::on_line("Opéra", "M3"),
    Station::on_line("Gare du Nord", "M4"),
    Station::unmapped("Concorde"),
    Station::unmapped("Louvre"),
    Station::unmapped("Palais Royal"),
    Station::unmapped("Tuileries"),
];

/// Read-only set of known stations.
///
/// # Examples
///
/// ```
/// use metro_server::stations::StationDirectory;
///
/// let directory = StationDirectory::paris();
/// assert!(directory.is_known("Chatelet"));
/// assert!(!directory.is_known("chatelet"));
/// assert_eq!(directory.suggest("chat"), ["Chatelet"]);
/// ```
#[derive(Debug, Clone)]
pub struct StationDirectory {
    stations: Vec<Station>,
}

impl StationDirectory {
    /// Create a directory from stations in canonical order.
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// The Paris metro stations served by this deployment.
    pub fn paris() -> Self {
        Self::new(PARIS_STATIONS.to_vec())
    }

    /// Stations in canonical order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of known stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the directory has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Exact, case-sensitive membership.
    pub fn is_known(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Line serving `name`, or [`Line::DEFAULT`] when the station has no
    /// explicit mapping or is not known.
    pub fn line_for(&self, name: &str) -> Line {
        self.find(name)
            .and_then(|station| station.line)
            .unwrap_or_default()
    }

    /// Suggest known stations for a mistyped name.
    ///
    /// Case-insensitive. Stations whose name starts with `input` come first,
    /// then stations containing it elsewhere, each group in canonical
    /// order. At most [`MAX_SUGGESTIONS`] names are returned, and none for
    /// inputs shorter than two characters.
    pub fn suggest(&self, input: &str) -> Vec<&'static str> {
        if input.chars().count() < MIN_SUGGEST_CHARS {
            return Vec::new();
        }

        let needle = input.to_lowercase();
        let lowered: Vec<(&'static str, String)> = self
            .stations
            .iter()
            .map(|s| (s.name, s.name.to_lowercase()))
            .collect();

        let prefix = lowered
            .iter()
            .filter(|(_, lower)| lower.starts_with(&needle));
        let substring = lowered
            .iter()
            .filter(|(_, lower)| !lower.starts_with(&needle) && lower.contains(&needle));

        let suggestions: Vec<&'static str> = prefix
            .chain(substring)
            .map(|(name, _)| *name)
            .take(MAX_SUGGESTIONS)
            .collect();

        debug!(input, ?suggestions, "station suggestions");
        suggestions
    }

    fn find(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name == name)
    }
}

impl Default for StationDirectory {
    fn default() -> Self {
        Self::paris()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_stations() {
        let dir = StationDirectory::paris();
        assert_eq!(dir.len(), 10);
        assert!(dir.is_known("Chatelet"));
        assert!(dir.is_known("Gare du Nord"));
        assert!(dir.is_known("Tuileries"));
    }

    #[test]
    fn membership_is_case_sensitive() {
        let dir = StationDirectory::paris();
        assert!(!dir.is_known("chatelet"));
        assert!(!dir.is_known("CHATELET"));
        assert!(!dir.is_known("Chatelet "));
        assert!(!dir.is_known(""));
    }

    #[test]
    fn explicit_lines() {
        let dir = StationDirectory::paris();
        assert_eq!(dir.line_for("Chatelet").as_str(), "M1");
        assert_eq!(dir.line_for("République").as_str(), "M3");
        assert_eq!(dir.line_for("Opéra").as_str(), "M3");
        assert_eq!(dir.line_for("Gare du Nord").as_str(), "M4");
    }

    #[test]
    fn unmapped_station_gets_default_line() {
        let dir = StationDirectory::paris();
        assert_eq!(dir.line_for("Concorde"), Line::DEFAULT);
        assert_eq!(dir.line_for("Louvre"), Line::DEFAULT);
        assert_eq!(dir.line_for("Nowhere"), Line::DEFAULT);
    }

    #[test]
    fn suggest_short_input_is_empty() {
        let dir = StationDirectory::paris();
        assert!(dir.suggest("").is_empty());
        assert!(dir.suggest("C").is_empty());
        assert!(dir.suggest("é").is_empty());
    }

    #[test]
    fn suggest_prefix_match() {
        let dir = StationDirectory::paris();
        assert_eq!(dir.suggest("Chat"), ["Chatelet"]);
        assert_eq!(dir.suggest("chat"), ["Chatelet"]);
        assert_eq!(dir.suggest("GARE"), ["Gare du Nord"]);
    }

    #[test]
    fn suggest_typo_without_match() {
        // "Chatlet" is not contained in any name; a shorter prefix still matches
        let dir = StationDirectory::paris();
        assert!(dir.suggest("Chatlet").is_empty());
        assert_eq!(dir.suggest("Ch"), ["Chatelet"]);
    }

    #[test]
    fn suggest_substring_in_canonical_order() {
        let dir = StationDirectory::paris();
        assert_eq!(dir.suggest("on"), ["Nation", "Concorde"]);
        assert_eq!(dir.suggest("le"), ["Chatelet", "Bastille", "Tuileries"]);
        assert_eq!(dir.suggest("re"), ["Gare du Nord", "Louvre"]);
    }

    #[test]
    fn suggest_substring_only() {
        let dir = StationDirectory::paris();
        assert_eq!(dir.suggest("telet"), ["Chatelet"]);
        assert_eq!(dir.suggest("royal"), ["Palais Royal"]);
    }

    #[test]
    fn suggest_non_ascii_case_insensitive() {
        let dir = StationDirectory::paris();
        assert_eq!(dir.suggest("OPÉ"), ["Opéra"]);
        assert_eq!(dir.suggest("publi"), ["République"]);
    }

    #[test]
    fn suggest_truncates_to_five() {
        let dir = StationDirectory::new(
            ["Aa1", "Aa2", "Aa3", "Xaa", "Aa4", "Aa5", "Aa6"]
                .into_iter()
                .map(Station::unmapped)
                .collect(),
        );
        assert_eq!(dir.suggest("aa"), ["Aa1", "Aa2", "Aa3", "Aa4", "Aa5"]);
    }

    #[test]
    fn suggest_substring_fills_remaining_slots() {
        let dir = StationDirectory::new(
            ["Xab", "Ab1", "Yab", "Ab2"]
                .into_iter()
                .map(Station::unmapped)
                .collect(),
        );
        assert_eq!(dir.suggest("ab"), ["Ab1", "Ab2", "Xab", "Yab"]);
    }

    #[test]
    fn suggest_is_idempotent() {
        let dir = StationDirectory::paris();
        assert_eq!(dir.suggest("re"), dir.suggest("re"));
    }
}

//! The replay's history sink: visit counts, record counts, and display
//! names for the summary log.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use starlog_core::{CollaboratorError, HistorySink, NameKind};
use starlog_types::{Event, StarSystem};

/// Ship display names keyed by internal model name.
const SHIP_NAMES: &[(&str, &str)] = &[
    ("adder", "Adder"),
    ("anaconda", "Anaconda"),
    ("asp", "Asp Explorer"),
    ("belugaliner", "Beluga Liner"),
    ("cobramkiii", "Cobra Mk III"),
    ("diamondbackxl", "Diamondback Explorer"),
    ("dolphin", "Dolphin"),
    ("empire_trader", "Imperial Clipper"),
    ("federation_corvette", "Federal Corvette"),
    ("ferdelance", "Fer-de-Lance"),
    ("krait_mkii", "Krait Mk II"),
    ("mamba", "Mamba"),
    ("python", "Python"),
    ("sidewinder", "Sidewinder"),
    ("type9", "Type-9 Heavy"),
    ("viper", "Viper Mk III"),
];

/// Suit display names keyed by internal suit-name prefix.
const SUIT_NAMES: &[(&str, &str)] = &[
    ("flightsuit", "Flight Suit"),
    ("utilitysuit", "Maverick Suit"),
    ("explorationsuit", "Artemis Suit"),
    ("tacticalsuit", "Dominator Suit"),
];

/// Counts what reconstruction reports.
#[derive(Debug, Default)]
pub struct VisitCounter {
    visits: BTreeMap<String, u32>,
    records: BTreeMap<String, u32>,
    problems: u32,
    last_arrival: Option<DateTime<Utc>>,
}

impl VisitCounter {
    /// Visits per system name.
    pub const fn visits(&self) -> &BTreeMap<String, u32> {
        &self.visits
    }

    /// Indexed scan and discovery records per system name.
    pub const fn records(&self) -> &BTreeMap<String, u32> {
        &self.records
    }

    /// Number of entries reported as not fully processed.
    pub const fn problems(&self) -> u32 {
        self.problems
    }

    /// When the player last arrived in a system.
    pub const fn last_arrival(&self) -> Option<DateTime<Utc>> {
        self.last_arrival
    }

    /// The `n` most visited systems, most visited first.
    pub fn most_visited(&self, n: usize) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> =
            self.visits.iter().map(|(name, count)| (name.as_str(), *count)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

impl HistorySink for VisitCounter {
    fn register_visit(&mut self, system: &StarSystem, at: DateTime<Utc>) {
        let count = self.visits.entry(system.name.clone()).or_default();
        *count = count.saturating_add(1);
        self.last_arrival = Some(at);
    }

    fn index_record(&mut self, system: &str, _record: &Event) -> Result<(), CollaboratorError> {
        let count = self.records.entry(system.to_owned()).or_default();
        *count = count.saturating_add(1);
        Ok(())
    }

    fn resolve_name(&mut self, kind: NameKind, raw: &str) -> Option<String> {
        let raw = raw.to_ascii_lowercase();
        match kind {
            NameKind::Ship => SHIP_NAMES
                .iter()
                .find(|(key, _)| *key == raw)
                .map(|(_, name)| (*name).to_owned()),
            NameKind::Suit => suit_name(&raw),
            NameKind::Body => None,
        }
    }

    fn report(&mut self, _event: &Event, _problem: &str) {
        self.problems = self.problems.saturating_add(1);
    }
}

/// `"utilitysuit_class3"` becomes `"Maverick Suit (class 3)"`.
fn suit_name(raw: &str) -> Option<String> {
    let (prefix, name) = SUIT_NAMES.iter().find(|(prefix, _)| raw.starts_with(prefix))?;
    let class = raw
        .get(prefix.len()..)
        .and_then(|rest| rest.strip_prefix("_class"))
        .and_then(|grade| grade.parse::<u8>().ok());
    Some(class.map_or_else(|| (*name).to_owned(), |c| format!("{name} (class {c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_visits_per_system() {
        let mut counter = VisitCounter::default();
        let t = DateTime::<Utc>::default();
        counter.register_visit(&StarSystem::named("Sol"), t);
        counter.register_visit(&StarSystem::named("Lave"), t);
        counter.register_visit(&StarSystem::named("Sol"), t);
        assert_eq!(counter.visits().get("Sol"), Some(&2));
        assert_eq!(counter.most_visited(1), vec![("Sol", 2)]);
        assert_eq!(counter.last_arrival(), Some(t));
    }

    #[test]
    fn resolves_ship_and_suit_names() {
        let mut counter = VisitCounter::default();
        assert_eq!(
            counter.resolve_name(NameKind::Ship, "Krait_MkII").as_deref(),
            Some("Krait Mk II")
        );
        assert_eq!(
            counter.resolve_name(NameKind::Suit, "utilitysuit_class3").as_deref(),
            Some("Maverick Suit (class 3)")
        );
        assert_eq!(
            counter.resolve_name(NameKind::Suit, "flightsuit").as_deref(),
            Some("Flight Suit")
        );
        assert!(counter.resolve_name(NameKind::Ship, "unknown_hull").is_none());
        assert!(counter.resolve_name(NameKind::Body, "Sol 3").is_none());
    }
}

//! Naming-convention inference over filename stems.
//!
//! A directory "has a format" when every stem in it is the same length and
//! every stem is an ISO date written with one shared separator character.
//! Detection is all-or-nothing: one odd name disqualifies the directory.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::{self, parse_iso_date, proper_length_parts, ISO_SEPARATOR};

/// The kind of naming convention detected in a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    #[default]
    None,
    IsoDate,
}

/// Detected naming convention of a directory.
///
/// `separator` is only meaningful for [`FormatKind::IsoDate`]; `None` there
/// means the names carry no separator (`YYYYMMDD`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDecision {
    pub kind: FormatKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<char>,
}

impl FormatDecision {
    /// No convention detected.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// ISO date naming with the given separator.
    #[must_use]
    pub fn iso_date(separator: Option<char>) -> Self {
        Self {
            kind: FormatKind::IsoDate,
            separator,
        }
    }

    /// Whether any convention was detected.
    #[must_use]
    pub fn is_detected(&self) -> bool {
        self.kind != FormatKind::None
    }
}

impl fmt::Display for FormatDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.separator) {
            (FormatKind::None, _) => write!(f, "no naming convention detected"),
            (FormatKind::IsoDate, Some(sep)) => write!(f, "ISO date names separated by '{sep}'"),
            (FormatKind::IsoDate, None) => write!(f, "ISO date names without separator"),
        }
    }
}

/// A stem that parsed as an ISO date, with the separator it was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoStem {
    pub date: NaiveDate,
    pub separator: Option<char>,
}

/// Decide the naming convention shared by `stems`.
#[must_use]
pub fn analyze_stems<S: AsRef<str>>(stems: &[S]) -> FormatDecision {
    if stems.is_empty() {
        return FormatDecision::none();
    }
    // names of differing lengths cannot share a fixed-width convention
    if compute_spread(stems) > 0 {
        return FormatDecision::none();
    }

    let common = common_position_characters(stems);
    iso_decision(stems, &common)
}

/// Difference between the longest and shortest stem, in characters.
#[must_use]
pub fn compute_spread<S: AsRef<str>>(strings: &[S]) -> usize {
    let lengths = strings.iter().map(|s| s.as_ref().chars().count());
    let (min, max) = lengths.fold((usize::MAX, 0), |(min, max), len| {
        (min.min(len), max.max(len))
    });
    max.saturating_sub(min)
}

/// Characters that sit at the same index in every string, sorted and
/// deduplicated. Comparison stops at the shortest string.
#[must_use]
pub fn common_position_characters<S: AsRef<str>>(strings: &[S]) -> Vec<char> {
    let Some((first, rest)) = strings.split_first() else {
        return Vec::new();
    };
    let mut others: Vec<std::str::Chars<'_>> = rest.iter().map(|s| s.as_ref().chars()).collect();

    let mut common = BTreeSet::new();
    for ch in first.as_ref().chars() {
        let mut all_match = true;
        for other in &mut others {
            match other.next() {
                Some(c) if c == ch => {}
                Some(_) => all_match = false,
                None => return common.into_iter().collect(),
            }
        }
        if all_match {
            common.insert(ch);
        }
    }
    common.into_iter().collect()
}

/// Check a single stem for ISO date naming.
///
/// Extended-length stems try each candidate in `common_characters` as the
/// separator; the first that splits the stem into ISO-shaped parts is
/// substituted with `-` before parsing. Basic-length stems are parsed as-is.
#[must_use]
pub fn iso_formatted_stem(stem: &str, common_characters: &[char]) -> Option<IsoStem> {
    let length = stem.chars().count();
    if length != date::EXTENDED_LEN && length != date::BASIC_LEN {
        return None;
    }

    let mut separator = None;
    let mut candidate = stem.to_string();
    if length == date::EXTENDED_LEN {
        for &ch in common_characters {
            let parts: Vec<&str> = stem.split(ch).collect();
            if proper_length_parts(&parts) {
                candidate = stem.replace(ch, &ISO_SEPARATOR.to_string());
                separator = Some(ch);
                break;
            }
        }
    }

    parse_iso_date(&candidate).map(|date| IsoStem { date, separator })
}

/// Decide whether every stem is ISO-formatted with one shared separator.
#[must_use]
pub fn iso_decision<S: AsRef<str>>(stems: &[S], common_characters: &[char]) -> FormatDecision {
    if stems.is_empty() {
        return FormatDecision::none();
    }

    let mut separators = BTreeSet::new();
    for stem in stems {
        match iso_formatted_stem(stem.as_ref(), common_characters) {
            Some(iso) => {
                separators.insert(iso.separator);
            }
            None => return FormatDecision::none(),
        }
    }

    match separators.len() {
        1 => FormatDecision::iso_date(separators.into_iter().next().flatten()),
        _ => FormatDecision::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn compute_spread_measures_length_range() {
        assert_eq!(compute_spread(&["one", "two", "six"]), 0);
        assert_eq!(compute_spread(&["one", "two", "four"]), 1);
        assert_eq!(compute_spread(&["one", "twenty-sevens"]), 10);
        assert_eq!(compute_spread::<&str>(&[]), 0);
    }

    #[test]
    fn compute_spread_counts_characters_not_bytes() {
        assert_eq!(compute_spread(&["ünï", "abc"]), 0);
    }

    #[test]
    fn common_position_characters_are_sorted_and_unique() {
        assert_eq!(
            common_position_characters(&["app", "apple", "apricot"]),
            vec!['a', 'p']
        );
        assert_eq!(
            common_position_characters(&["jason", "lakom", "casom"]),
            vec!['a', 'o']
        );
        assert!(common_position_characters(&["jimmy", "alpha", "corona"]).is_empty());
        assert!(common_position_characters::<&str>(&[]).is_empty());
    }

    #[test]
    fn iso_formatted_stem_finds_separator() {
        let dash = iso_formatted_stem("2025-01-01", &['-']).unwrap();
        assert_eq!(dash.separator, Some('-'));

        let week = iso_formatted_stem("2025_W03_1", &['-', '_']).unwrap();
        assert_eq!(week.separator, Some('_'));

        let letter = iso_formatted_stem("2025M01M01", &['M', 'N', 'P']).unwrap();
        assert_eq!(letter.separator, Some('M'));
    }

    #[test]
    fn iso_formatted_stem_basic_form_has_no_separator() {
        let basic = iso_formatted_stem("20250101", &[]).unwrap();
        assert_eq!(basic.separator, None);
        assert_eq!(basic.date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn iso_formatted_stem_parses_unsubstituted_dash_dates() {
        let raw = iso_formatted_stem("2025-01-01", &[]).unwrap();
        assert_eq!(raw.separator, None);
    }

    #[test]
    fn iso_formatted_stem_rejects_bad_stems() {
        assert_eq!(iso_formatted_stem("2025-01", &['-']), None);
        assert_eq!(iso_formatted_stem("202501011", &['-']), None);
        assert_eq!(iso_formatted_stem("2025-W01-01", &[]), None);
        assert_eq!(iso_formatted_stem("2025-13-01", &['-']), None);
        assert_eq!(iso_formatted_stem("meeting-01", &['-']), None);
    }

    #[test]
    fn iso_decision_over_lists() {
        assert_eq!(
            iso_decision(&["2025-01-01", "2025-01-02"], &[]),
            FormatDecision::iso_date(None)
        );
        assert_eq!(
            iso_decision(&["2025PW01P1", "2025PW01P2"], &['-', 'P']),
            FormatDecision::iso_date(Some('P'))
        );
        assert_eq!(
            iso_decision(&["20250101", "20250102"], &['2', '5']),
            FormatDecision::iso_date(None)
        );
        assert!(!iso_decision(&["2025-01-01", "2025-01"], &['-']).is_detected());
        assert!(!iso_decision(&["20250101", "202501011"], &['2', '5']).is_detected());
        assert!(!iso_decision(&["2025-W01-01", "2025-W01-2"], &[]).is_detected());
    }

    #[test]
    fn analyze_detects_dash_separated_dates() {
        let decision = analyze_stems(&["2025-01-01", "2025-01-02"]);
        assert!(decision.is_detected());
        assert_eq!(decision.kind, FormatKind::IsoDate);
        assert_eq!(decision.separator, Some('-'));
    }

    #[test]
    fn analyze_detects_unseparated_dates() {
        let decision = analyze_stems(&["20250101", "20250102"]);
        assert_eq!(decision, FormatDecision::iso_date(None));
    }

    #[test]
    fn analyze_detects_week_dates() {
        let decision = analyze_stems(&["2025_W03_1", "2025_W03_2", "2025_W04_5"]);
        assert_eq!(decision, FormatDecision::iso_date(Some('_')));
    }

    #[test]
    fn analyze_rejects_mixed_separators() {
        assert!(!analyze_stems(&["2025-01-01", "2025_01-02"]).is_detected());
        assert!(!analyze_stems(&["2025-01-01", "2025_01_02"]).is_detected());
    }

    #[test]
    fn analyze_rejects_mixed_basic_and_extended() {
        // equal lengths are required before any date parsing happens
        assert!(!analyze_stems(&["2025-01-01", "20250102"]).is_detected());
    }

    #[test]
    fn analyze_single_malformed_stem_disqualifies_directory() {
        let stems = ["2025-01-01", "2025-01-02", "2025-02-31"];
        assert!(!analyze_stems(&stems).is_detected());
    }

    #[test]
    fn analyze_empty_is_not_detected() {
        assert_eq!(analyze_stems::<&str>(&[]), FormatDecision::none());
    }

    #[test]
    fn decision_display_is_human_readable() {
        assert!(FormatDecision::none().to_string().contains("no naming"));
        assert!(FormatDecision::iso_date(Some('_')).to_string().contains("'_'"));
        assert!(FormatDecision::iso_date(None)
            .to_string()
            .contains("without separator"));
    }

    #[test]
    fn decision_serializes_kind_in_snake_case() {
        let json = serde_json::to_value(FormatDecision::iso_date(Some('.'))).unwrap();
        assert_eq!(json["kind"], "iso_date");
        assert_eq!(json["separator"], ".");
    }

    fn calendar_date() -> impl Strategy<Value = NaiveDate> {
        (1900i32..2200, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    proptest! {
        #[test]
        fn stems_of_unequal_length_are_never_detected(
            short in "[0-9a-z_-]{1,9}",
            extra in "[0-9a-z_-]{1,5}",
        ) {
            let long = format!("{short}{extra}");
            prop_assert!(!analyze_stems(&[short, long]).is_detected());
        }

        #[test]
        fn consistently_separated_dates_report_their_separator(
            dates in proptest::collection::vec(calendar_date(), 1..8),
            sep in prop::sample::select(vec!['-', '_', '.', ' ', '~', 'x']),
        ) {
            let stems: Vec<String> = dates
                .iter()
                .map(|d| date::format_iso_date(*d, Some(sep)))
                .collect();
            prop_assert_eq!(analyze_stems(&stems), FormatDecision::iso_date(Some(sep)));
        }

        #[test]
        fn unseparated_dates_report_no_separator(
            dates in proptest::collection::vec(calendar_date(), 1..8),
        ) {
            let stems: Vec<String> = dates
                .iter()
                .map(|d| date::format_iso_date(*d, None))
                .collect();
            prop_assert_eq!(analyze_stems(&stems), FormatDecision::iso_date(None));
        }
    }
}

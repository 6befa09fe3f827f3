//! Toggle Selections
//!
//! The three click-toggle shapes used by the UI: a multi-select set (survey
//! sources), an at-most-one-open index (FAQ accordion, interview-type chips),
//! and a plain boolean (pricing period). Kept pure so the rules are testable
//! without a DOM.

use std::collections::HashSet;
use std::hash::Hash;

/// Toggle membership: insert if absent, remove if present.
pub fn toggle_member<T: Eq + Hash>(set: &mut HashSet<T>, item: T) {
    if !set.remove(&item) {
        set.insert(item);
    }
}

/// Accordion toggle: clicking the open entry closes it, clicking another
/// entry moves the single open slot there.
pub fn toggle_open(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
    }
}

/// Survey submission is allowed only for a non-empty selection.
pub fn can_submit<T>(selected: &HashSet<T>) -> bool {
    !selected.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_pair_is_identity() {
        let mut set: HashSet<&str> = ["linkedin", "reddit"].into_iter().collect();
        let before = set.clone();

        toggle_member(&mut set, "youtube");
        assert!(set.contains("youtube"));
        toggle_member(&mut set, "youtube");
        assert_eq!(set, before);
    }

    #[test]
    fn test_toggle_removes_existing() {
        let mut set: HashSet<&str> = ["linkedin"].into_iter().collect();
        toggle_member(&mut set, "linkedin");
        assert!(set.is_empty());
    }

    #[test]
    fn test_accordion_at_most_one_open() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));

        // Clicking another entry replaces, never accumulates
        let open = toggle_open(open, 4);
        assert_eq!(open, Some(4));

        // Clicking the open entry closes it
        let open = toggle_open(open, 4);
        assert_eq!(open, None);
    }

    #[test]
    fn test_submit_enabled_iff_non_empty() {
        let mut set: HashSet<&str> = HashSet::new();
        assert!(!can_submit(&set));

        toggle_member(&mut set, "github");
        assert!(can_submit(&set));

        toggle_member(&mut set, "github");
        assert!(!can_submit(&set));
    }
}

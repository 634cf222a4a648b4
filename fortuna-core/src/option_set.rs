use serde::{Deserialize, Serialize};

/// Opaque identifier of a wheel option, unique within its `OptionSet`.
pub type OptionId = u64;

/// A single candidate on the wheel.
///
/// Created on manual entry or when a search result is added; never mutated in
/// place. `text` is non-empty; texts may repeat, ids never do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelOption {
    pub id: OptionId,
    pub text: String,
}

/// Insertion-ordered collection of wheel options.
///
/// Order is significant: an option's position determines its slice on the
/// wheel. Ids come from a per-set monotonic counter, so no two options ever
/// share one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionSet {
    options: Vec<WheelOption>,
    next_id: OptionId,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new option at the end of the sequence.
    ///
    /// The text is trimmed first; whitespace-only input is rejected and the
    /// set is left unchanged.
    pub fn add(&mut self, text: &str) -> Option<OptionId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.options.push(WheelOption {
            id,
            text: text.to_string(),
        });
        Some(id)
    }

    /// Removes the option with the given id, keeping the relative order of
    /// the remaining options. Returns whether anything was removed.
    pub fn remove(&mut self, id: OptionId) -> bool {
        let before = self.options.len();
        self.options.retain(|o| o.id != id);
        self.options.len() != before
    }

    /// Empties the sequence unconditionally.
    pub fn clear(&mut self) {
        self.options.clear();
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WheelOption> {
        self.options.get(index)
    }

    /// Position of the option with the given id, if present.
    pub fn position(&self, id: OptionId) -> Option<usize> {
        self.options.iter().position(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WheelOption> {
        self.options.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_in_order() {
        let mut set = OptionSet::new();
        set.add("ramen");
        set.add("bubble tea");
        set.add("sushi");

        assert_eq!(set.len(), 3);
        let texts: Vec<_> = set.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, ["ramen", "bubble tea", "sushi"]);
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut set = OptionSet::new();
        assert_eq!(set.add(""), None);
        assert_eq!(set.add("   "), None);
        assert!(set.is_empty());

        assert!(set.add("Sushi").is_some());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn add_trims_text() {
        let mut set = OptionSet::new();
        set.add("  ramen  ");
        assert_eq!(set.get(0).unwrap().text, "ramen");
    }

    #[test]
    fn ids_are_unique_even_with_repeated_text() {
        let mut set = OptionSet::new();
        let a = set.add("ramen").unwrap();
        let b = set.add("ramen").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut set = OptionSet::new();
        let _a = set.add("a").unwrap();
        let b = set.add("b").unwrap();
        let _c = set.add("c").unwrap();

        assert!(set.remove(b));
        let texts: Vec<_> = set.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, ["a", "c"]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut set = OptionSet::new();
        set.add("a");
        assert!(!set.remove(999));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn removed_id_is_never_reused() {
        let mut set = OptionSet::new();
        let a = set.add("a").unwrap();
        set.remove(a);
        let b = set.add("b").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = OptionSet::new();
        set.add("a");
        set.add("b");
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn position_finds_by_id() {
        let mut set = OptionSet::new();
        let _a = set.add("a").unwrap();
        let b = set.add("b").unwrap();
        assert_eq!(set.position(b), Some(1));
        assert_eq!(set.position(999), None);
    }
}

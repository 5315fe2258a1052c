use std::collections::HashSet;

/// Scroll-reveal observer settings shared by every card.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardId {
    pub section: String,
    pub index: usize,
}

impl CardId {
    pub fn new(section: &str, index: usize) -> Self {
        Self {
            section: section.to_string(),
            index,
        }
    }
}

/// Cards currently carrying the `visible` class.
#[derive(Debug, Default)]
pub struct RevealSet {
    visible: HashSet<CardId>,
}

impl RevealSet {
    /// Returns true when this call added the class.
    pub fn reveal(&mut self, card: CardId) -> bool {
        self.visible.insert(card)
    }

    pub fn hide_section(&mut self, section: &str) {
        self.visible.retain(|c| c.section != section);
    }

    pub fn is_visible(&self, card: &CardId) -> bool {
        self.visible.contains(card)
    }

    pub fn count_in(&self, section: &str) -> usize {
        self.visible.iter().filter(|c| c.section == section).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_shot() {
        let mut r = RevealSet::default();
        assert!(r.reveal(CardId::new("home", 0)));
        assert!(!r.reveal(CardId::new("home", 0)));
        assert!(r.is_visible(&CardId::new("home", 0)));
    }

    #[test]
    fn test_hide_section_leaves_others() {
        let mut r = RevealSet::default();
        r.reveal(CardId::new("home", 0));
        r.reveal(CardId::new("home", 1));
        r.reveal(CardId::new("about", 0));
        r.hide_section("home");
        assert_eq!(r.count_in("home"), 0);
        assert_eq!(r.count_in("about"), 1);
    }
}

/// One top-level content panel. `cards` is how many revealable cards it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub cards: usize,
}

impl Section {
    pub const fn new(name: &'static str, cards: usize) -> Self {
        Self { name, cards }
    }

    pub fn dom_id(&self) -> String {
        format!("{}-page", self.name)
    }
}

/// Which section is showing. Any string is accepted as the current page.
#[derive(Debug, Clone)]
pub struct PageState {
    sections: Vec<Section>,
    current: String,
}

impl PageState {
    pub fn new(sections: Vec<Section>, initial: &str) -> Self {
        Self {
            sections,
            current: initial.to_string(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn set_current(&mut self, name: &str) {
        self.current = name.to_string();
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.current == name && self.section(name).is_some()
    }

    /// A nav link is active when its target equals the current page, known or not.
    pub fn is_active(&self, target: &str) -> bool {
        self.current == target
    }

    pub fn visible_sections(&self) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| s.name == self.current)
            .collect()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

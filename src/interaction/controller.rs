use std::collections::HashSet;

use super::{
    config::SiteConfig,
    effects::{self, ScrollMetrics, ScrollState, Typewriter},
    form::{ContactForm, THANK_YOU},
    konami::KeySequence,
    navigation::{PageState, Section},
    reveal::{CardId, RevealSet},
    schedule::{DelayedTask, Scheduler, TaskId, TaskKind},
};

/// Everything the browser can tell the page about.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Page finished hydrating at this scroll position.
    Loaded(ScrollMetrics),
    Navigate(String),
    MenuToggle,
    /// Any click on the document; `inside_menu` covers the toggle and the panel.
    DocumentClick { inside_menu: bool },
    CardVisible(CardId),
    CardHover { card: CardId, hovered: bool },
    FieldInput { field: String, value: String },
    FieldBlur(String),
    Submit,
    Scroll(ScrollMetrics),
    KeyDown(u32),
    /// Click on a button that does not navigate.
    ButtonClick(String),
    /// Click on a link whose href starts with `#`.
    AnchorClick(String),
    TimerFired(TaskId),
}

impl PageEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PageEvent::Loaded(_) => "loaded",
            PageEvent::Navigate(_) => "navigate",
            PageEvent::MenuToggle => "menu-toggle",
            PageEvent::DocumentClick { .. } => "document-click",
            PageEvent::CardVisible(_) => "card-visible",
            PageEvent::CardHover { .. } => "card-hover",
            PageEvent::FieldInput { .. } => "field-input",
            PageEvent::FieldBlur(_) => "field-blur",
            PageEvent::Submit => "submit",
            PageEvent::Scroll(_) => "scroll",
            PageEvent::KeyDown(_) => "keydown",
            PageEvent::ButtonClick(_) => "button-click",
            PageEvent::AnchorClick(_) => "anchor-click",
            PageEvent::TimerFired(_) => "timer",
        }
    }
}

/// Side effects the controller cannot perform on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Schedule(DelayedTask),
    ScrollToTop,
    /// Smooth-scroll the element matching this selector into view.
    ScrollIntoView(String),
    Notify(String),
}

pub struct PageController {
    config: SiteConfig,
    pages: PageState,
    menu_open: bool,
    reveal: RevealSet,
    form: ContactForm,
    konami: KeySequence,
    scroll: ScrollState,
    typewriter: Typewriter,
    pressed: HashSet<String>,
    hovered: Option<CardId>,
    rainbow: bool,
    scheduler: Scheduler,
}

impl PageController {
    pub fn new(config: SiteConfig, sections: Vec<Section>, hero_title: &str) -> Self {
        let scroll = ScrollState::new(config.header_offset, config.parallax_rate);
        Self {
            config,
            pages: PageState::new(sections, "home"),
            menu_open: false,
            reveal: RevealSet::default(),
            form: ContactForm::default(),
            konami: KeySequence::default(),
            scroll,
            typewriter: Typewriter::new(hero_title),
            pressed: HashSet::new(),
            hovered: None,
            rainbow: false,
            scheduler: Scheduler::default(),
        }
    }

    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Command> {
        if !matches!(event, PageEvent::Scroll(_)) {
            log::debug!("dispatch {}", event.name());
        }
        match event {
            PageEvent::Loaded(metrics) => self.on_loaded(metrics),
            PageEvent::Navigate(target) => self.on_navigate(&target),
            PageEvent::MenuToggle => self.on_menu_toggle(),
            PageEvent::DocumentClick { inside_menu } => self.on_document_click(inside_menu),
            PageEvent::CardVisible(card) => self.on_card_visible(card),
            PageEvent::CardHover { card, hovered } => self.on_card_hover(card, hovered),
            PageEvent::FieldInput { field, value } => self.on_field_input(&field, &value),
            PageEvent::FieldBlur(field) => self.on_field_blur(&field),
            PageEvent::Submit => self.on_submit(),
            PageEvent::Scroll(metrics) => self.on_scroll(metrics),
            PageEvent::KeyDown(code) => self.on_key_down(code),
            PageEvent::ButtonClick(id) => self.on_button_click(id),
            PageEvent::AnchorClick(href) => self.on_anchor_click(href),
            PageEvent::TimerFired(id) => self.on_timer(id),
        }
    }

    fn schedule(&mut self, kind: TaskKind, delay: std::time::Duration) -> Command {
        Command::Schedule(self.scheduler.schedule(kind, delay))
    }

    fn on_loaded(&mut self, metrics: ScrollMetrics) -> Vec<Command> {
        self.scroll.seed(metrics);
        let delay = self.config.typewriter_start();
        vec![self.schedule(TaskKind::TypeNextChar, delay)]
    }

    fn on_navigate(&mut self, target: &str) -> Vec<Command> {
        if self.pages.section(target).is_none() {
            log::warn!("navigating to unknown section {target:?}");
        }
        self.pages.set_current(target);
        self.menu_open = false;
        let delay = self.config.reveal_delay();
        vec![Command::ScrollToTop, self.schedule(TaskKind::Restagger, delay)]
    }

    fn on_menu_toggle(&mut self) -> Vec<Command> {
        self.menu_open = !self.menu_open;
        Vec::new()
    }

    fn on_document_click(&mut self, inside_menu: bool) -> Vec<Command> {
        if !inside_menu {
            self.menu_open = false;
        }
        Vec::new()
    }

    fn on_card_visible(&mut self, card: CardId) -> Vec<Command> {
        self.reveal.reveal(card);
        Vec::new()
    }

    fn on_card_hover(&mut self, card: CardId, hovered: bool) -> Vec<Command> {
        if hovered {
            self.hovered = Some(card);
        } else if self.hovered.as_ref() == Some(&card) {
            self.hovered = None;
        }
        Vec::new()
    }

    fn on_field_input(&mut self, field: &str, value: &str) -> Vec<Command> {
        self.form.set_value(field, value);
        Vec::new()
    }

    fn on_field_blur(&mut self, field: &str) -> Vec<Command> {
        self.form.validate_field(field);
        Vec::new()
    }

    fn on_submit(&mut self) -> Vec<Command> {
        if self.is_sending() {
            return Vec::new();
        }
        if !self.form.validate_all() {
            return Vec::new();
        }
        self.form.begin_sending();
        let delay = self.config.submit_latency();
        vec![self.schedule(TaskKind::FinishSubmit, delay)]
    }

    fn on_scroll(&mut self, metrics: ScrollMetrics) -> Vec<Command> {
        self.scroll.update(metrics);
        Vec::new()
    }

    fn on_key_down(&mut self, code: u32) -> Vec<Command> {
        if !self.konami.push(code) {
            return Vec::new();
        }
        log::info!("konami sequence entered");
        self.rainbow = true;
        let delay = self.config.rainbow();
        vec![self.schedule(TaskKind::EndRainbow, delay)]
    }

    fn on_button_click(&mut self, id: String) -> Vec<Command> {
        self.pressed.insert(id.clone());
        let delay = self.config.pulse();
        vec![self.schedule(TaskKind::ReleaseButton(id), delay)]
    }

    fn on_anchor_click(&mut self, href: String) -> Vec<Command> {
        vec![Command::ScrollIntoView(href)]
    }

    fn on_timer(&mut self, id: TaskId) -> Vec<Command> {
        let Some(kind) = self.scheduler.take(id) else {
            log::warn!("{id} fired but was never scheduled");
            return Vec::new();
        };
        match kind {
            TaskKind::Restagger => self.restagger(),
            TaskKind::RevealCard(card) => {
                self.reveal.reveal(card);
                Vec::new()
            }
            TaskKind::FinishSubmit => {
                self.form.reset();
                vec![Command::Notify(THANK_YOU.to_string())]
            }
            TaskKind::TypeNextChar => {
                if self.typewriter.advance() {
                    let delay = self.config.typewriter_step();
                    vec![self.schedule(TaskKind::TypeNextChar, delay)]
                } else {
                    Vec::new()
                }
            }
            TaskKind::ReleaseButton(button) => {
                self.pressed.remove(&button);
                Vec::new()
            }
            TaskKind::EndRainbow => {
                self.rainbow = false;
                Vec::new()
            }
        }
    }

    /// Replays the reveal on the section showing now, not the one navigated to.
    fn restagger(&mut self) -> Vec<Command> {
        let Some(section) = self.pages.visible_sections().first().map(|s| (*s).clone()) else {
            return Vec::new();
        };
        log::debug!(
            "replaying reveal on {} ({} cards were visible)",
            section.name,
            self.reveal.count_in(section.name)
        );
        self.reveal.hide_section(section.name);
        (0..section.cards)
            .map(|i| {
                let delay = self.config.stagger(i);
                self.schedule(TaskKind::RevealCard(CardId::new(section.name, i)), delay)
            })
            .collect()
    }

    pub fn current_page(&self) -> &str {
        self.pages.current()
    }

    pub fn sections(&self) -> &[Section] {
        self.pages.sections()
    }

    pub fn is_section_visible(&self, name: &str) -> bool {
        self.pages.is_visible(name)
    }

    pub fn is_link_active(&self, target: &str) -> bool {
        self.pages.is_active(target)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_card_visible(&self, card: &CardId) -> bool {
        self.reveal.is_visible(card)
    }

    pub fn card_transform(&self, card: &CardId) -> &'static str {
        effects::card_transform(self.hovered.as_ref() == Some(card))
    }

    pub fn button_transform(&self, id: &str) -> &'static str {
        effects::button_transform(self.pressed.contains(id))
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_sending(&self) -> bool {
        self.form.submit_state() == super::form::SubmitState::Sending
    }

    pub fn header_transform(&self) -> &'static str {
        self.scroll.header_transform()
    }

    pub fn parallax_offset(&self) -> f64 {
        self.scroll.parallax_offset()
    }

    pub fn progress_percent(&self) -> f64 {
        self.scroll.progress_percent()
    }

    pub fn hero_text(&self) -> &str {
        self.typewriter.visible()
    }

    pub fn rainbow_active(&self) -> bool {
        self.rainbow
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::interaction::{form::SENDING_LABEL, form::SUBMIT_LABEL, konami::KONAMI_SEQUENCE};

    /// Fires scheduled tasks in due order, the way browser timers would.
    struct ManualClock {
        now: Duration,
        queue: Vec<(Duration, TaskId)>,
        notices: Vec<String>,
        scrolls: Vec<Command>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                now: Duration::ZERO,
                queue: Vec::new(),
                notices: Vec::new(),
                scrolls: Vec::new(),
            }
        }

        fn send(&mut self, ctrl: &mut PageController, event: PageEvent) {
            for cmd in ctrl.dispatch(event) {
                match cmd {
                    Command::Schedule(task) => self.queue.push((self.now + task.delay, task.id)),
                    Command::Notify(s) => self.notices.push(s),
                    c => self.scrolls.push(c),
                }
            }
        }

        fn advance(&mut self, ctrl: &mut PageController, by: Duration) {
            let until = self.now + by;
            loop {
                self.queue.sort();
                match self.queue.first() {
                    Some(&(due, id)) if due <= until => {
                        self.queue.remove(0);
                        self.now = due;
                        self.send(ctrl, PageEvent::TimerFired(id));
                    }
                    _ => break,
                }
            }
            self.now = until;
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller() -> PageController {
        PageController::new(
            SiteConfig::default(),
            vec![
                Section::new("home", 3),
                Section::new("about", 2),
                Section::new("contact", 1),
            ],
            "Hi!",
        )
    }

    fn fill_valid(clock: &mut ManualClock, ctrl: &mut PageController) {
        for (field, value) in [("name", "Ada"), ("email", "a@b.co"), ("message", "Hello")] {
            clock.send(
                ctrl,
                PageEvent::FieldInput {
                    field: field.to_string(),
                    value: value.to_string(),
                },
            );
        }
    }

    #[test]
    fn test_navigate_shows_exactly_one_section() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        clock.send(&mut ctrl, PageEvent::Navigate("about".to_string()));
        let visible = ctrl
            .sections()
            .iter()
            .filter(|s| ctrl.is_section_visible(s.name))
            .count();
        assert_eq!(visible, 1);
        assert!(ctrl.is_section_visible("about"));
        assert!(ctrl.is_link_active("about"));
        assert!(!ctrl.is_link_active("home"));
        assert_eq!(clock.scrolls, vec![Command::ScrollToTop]);
    }

    #[test]
    fn test_navigate_unknown_shows_nothing() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        clock.send(&mut ctrl, PageEvent::Navigate("pricing".to_string()));
        assert_eq!(ctrl.current_page(), "pricing");
        assert!(ctrl.sections().iter().all(|s| !ctrl.is_section_visible(s.name)));
        clock.advance(&mut ctrl, ms(1000));
        assert_eq!(ctrl.pending_tasks(), 0);
    }

    #[test]
    fn test_navigate_restaggers_cards() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        for i in 0..3 {
            clock.send(&mut ctrl, PageEvent::CardVisible(CardId::new("home", i)));
        }
        clock.send(&mut ctrl, PageEvent::Navigate("home".to_string()));
        clock.advance(&mut ctrl, ms(99));
        assert!(ctrl.is_card_visible(&CardId::new("home", 2)));
        // reveal delay elapsed, card 0 goes back in immediately
        clock.advance(&mut ctrl, ms(1));
        assert!(ctrl.is_card_visible(&CardId::new("home", 0)));
        assert!(!ctrl.is_card_visible(&CardId::new("home", 1)));
        assert!(!ctrl.is_card_visible(&CardId::new("home", 2)));
        clock.advance(&mut ctrl, ms(100));
        assert!(ctrl.is_card_visible(&CardId::new("home", 1)));
        clock.advance(&mut ctrl, ms(100));
        assert!(ctrl.is_card_visible(&CardId::new("home", 2)));
    }

    #[test]
    fn test_stale_restagger_still_runs() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        clock.send(&mut ctrl, PageEvent::Navigate("about".to_string()));
        clock.send(&mut ctrl, PageEvent::Navigate("contact".to_string()));
        assert_eq!(ctrl.pending_tasks(), 2);
        clock.advance(&mut ctrl, ms(100));
        // both restaggers target the section showing when they fire
        assert!(ctrl.is_card_visible(&CardId::new("contact", 0)));
        assert!(!ctrl.is_card_visible(&CardId::new("about", 0)));
        assert_eq!(ctrl.pending_tasks(), 0);
    }

    #[test]
    fn test_menu_toggle_and_outside_click() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        clock.send(&mut ctrl, PageEvent::MenuToggle);
        assert!(ctrl.menu_open());
        clock.send(&mut ctrl, PageEvent::DocumentClick { inside_menu: true });
        assert!(ctrl.menu_open());
        clock.send(&mut ctrl, PageEvent::DocumentClick { inside_menu: false });
        assert!(!ctrl.menu_open());
        clock.send(&mut ctrl, PageEvent::MenuToggle);
        clock.send(&mut ctrl, PageEvent::MenuToggle);
        assert!(!ctrl.menu_open());
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        clock.send(&mut ctrl, PageEvent::MenuToggle);
        clock.send(&mut ctrl, PageEvent::Navigate("about".to_string()));
        assert!(!ctrl.menu_open());
    }

    #[test]
    fn test_blur_validates_single_field() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        clock.send(&mut ctrl, PageEvent::FieldBlur("name".to_string()));
        assert!(ctrl.form().error("name").is_some());
        assert!(ctrl.form().error("email").is_none());
    }

    #[test]
    fn test_invalid_submit_is_blocked() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        clock.send(&mut ctrl, PageEvent::Submit);
        assert!(!ctrl.is_sending());
        assert_eq!(ctrl.pending_tasks(), 0);
        assert!(ctrl.form().error("message").is_some());
    }

    #[test]
    fn test_valid_submit_round_trip() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        fill_valid(&mut clock, &mut ctrl);
        clock.send(&mut ctrl, PageEvent::Submit);
        assert!(ctrl.is_sending());
        assert_eq!(ctrl.form().submit_label(), SENDING_LABEL);

        // disabled control swallows a second submit
        clock.send(&mut ctrl, PageEvent::Submit);
        assert_eq!(ctrl.pending_tasks(), 1);

        clock.advance(&mut ctrl, ms(1999));
        assert!(ctrl.is_sending());
        clock.advance(&mut ctrl, ms(1));
        assert!(!ctrl.is_sending());
        assert_eq!(ctrl.form().submit_label(), SUBMIT_LABEL);
        assert_eq!(ctrl.form().value("name"), Some(""));
        assert_eq!(ctrl.form().value("email"), Some(""));
        assert_eq!(clock.notices, vec![THANK_YOU.to_string()]);
    }

    #[test]
    fn test_konami_triggers_and_reverts() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        for code in KONAMI_SEQUENCE {
            clock.send(&mut ctrl, PageEvent::KeyDown(code));
        }
        assert!(ctrl.rainbow_active());
        clock.advance(&mut ctrl, ms(4999));
        assert!(ctrl.rainbow_active());
        clock.advance(&mut ctrl, ms(1));
        assert!(!ctrl.rainbow_active());
    }

    #[test]
    fn test_konami_deviation_does_nothing() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        let mut codes = KONAMI_SEQUENCE;
        codes[9] = 66;
        for code in codes {
            clock.send(&mut ctrl, PageEvent::KeyDown(code));
        }
        assert!(!ctrl.rainbow_active());
        assert_eq!(ctrl.pending_tasks(), 0);
    }

    #[test]
    fn test_typewriter_after_load() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        clock.send(&mut ctrl, PageEvent::Loaded(ScrollMetrics::default()));
        assert_eq!(ctrl.hero_text(), "");
        clock.advance(&mut ctrl, ms(1000));
        assert_eq!(ctrl.hero_text(), "H");
        clock.advance(&mut ctrl, ms(100));
        assert_eq!(ctrl.hero_text(), "Hi");
        clock.advance(&mut ctrl, ms(1000));
        assert_eq!(ctrl.hero_text(), "Hi!");
        assert_eq!(ctrl.pending_tasks(), 0);
    }

    #[test]
    fn test_header_stays_when_restored_page_scrolls_up() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        let at = |scroll_y| ScrollMetrics {
            scroll_y,
            scroll_height: 3000.0,
            client_height: 1000.0,
        };
        clock.send(&mut ctrl, PageEvent::Loaded(at(800.0)));
        assert_eq!(ctrl.header_transform(), "translateY(0)");
        assert_eq!(ctrl.parallax_offset(), -400.0);
        assert_eq!(ctrl.progress_percent(), 40.0);

        clock.send(&mut ctrl, PageEvent::Scroll(at(790.0)));
        assert_eq!(ctrl.header_transform(), "translateY(0)");
        clock.send(&mut ctrl, PageEvent::Scroll(at(850.0)));
        assert_eq!(ctrl.header_transform(), "translateY(-100%)");
    }

    #[test]
    fn test_button_pulse() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        clock.send(&mut ctrl, PageEvent::ButtonClick("download".to_string()));
        assert_eq!(ctrl.button_transform("download"), "scale(0.98)");
        clock.advance(&mut ctrl, ms(150));
        assert_eq!(ctrl.button_transform("download"), "scale(1)");
    }

    #[test]
    fn test_card_hover() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        let card = CardId::new("home", 1);
        clock.send(
            &mut ctrl,
            PageEvent::CardHover {
                card: card.clone(),
                hovered: true,
            },
        );
        assert_eq!(ctrl.card_transform(&card), "translateY(-10px) scale(1.02)");
        assert_eq!(
            ctrl.card_transform(&CardId::new("home", 0)),
            "translateY(0) scale(1)"
        );
        clock.send(
            &mut ctrl,
            PageEvent::CardHover {
                card: card.clone(),
                hovered: false,
            },
        );
        assert_eq!(ctrl.card_transform(&card), "translateY(0) scale(1)");
    }

    #[test]
    fn test_anchor_click_scrolls() {
        let mut ctrl = controller();
        assert_eq!(
            ctrl.dispatch(PageEvent::AnchorClick("#services".to_string())),
            vec![Command::ScrollIntoView("#services".to_string())]
        );
    }

    #[test]
    fn test_unknown_timer_is_ignored() {
        let mut ctrl = controller();
        let mut clock = ManualClock::new();
        clock.send(&mut ctrl, PageEvent::ButtonClick("x".to_string()));
        clock.advance(&mut ctrl, ms(150));
        let fired = PageEvent::TimerFired(TaskId::default());
        assert!(ctrl.dispatch(fired).is_empty());
    }
}

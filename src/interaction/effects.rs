/// Document scroll position as reported by the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

/// Header hide/show, parallax and progress bar, all derived from scrolling.
#[derive(Debug, Clone)]
pub struct ScrollState {
    header_offset: f64,
    parallax_rate: f64,
    last_y: f64,
    header_hidden: bool,
    metrics: ScrollMetrics,
}

impl ScrollState {
    pub fn new(header_offset: f64, parallax_rate: f64) -> Self {
        Self {
            header_offset,
            parallax_rate,
            last_y: 0.0,
            header_hidden: false,
            metrics: ScrollMetrics::default(),
        }
    }

    /// Takes the position the page loaded at without judging a direction.
    pub fn seed(&mut self, metrics: ScrollMetrics) {
        self.last_y = metrics.scroll_y;
        self.metrics = metrics;
    }

    pub fn update(&mut self, metrics: ScrollMetrics) {
        let y = metrics.scroll_y;
        self.header_hidden = y > self.last_y && y > self.header_offset;
        self.last_y = y;
        self.metrics = metrics;
    }

    pub fn header_hidden(&self) -> bool {
        self.header_hidden
    }

    pub fn header_transform(&self) -> &'static str {
        if self.header_hidden() {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }

    pub fn parallax_offset(&self) -> f64 {
        self.metrics.scroll_y * self.parallax_rate
    }

    /// Percent of the scrollable distance covered; 0 when nothing can scroll.
    pub fn progress_percent(&self) -> f64 {
        let range = self.metrics.scroll_height - self.metrics.client_height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.metrics.scroll_y / range * 100.0).clamp(0.0, 100.0)
    }
}

/// Reveals the hero heading one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            shown: 0,
        }
    }

    /// Shows one more character; false once everything is already shown.
    pub fn advance(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((i, _)) => &self.text[..i],
            None => &self.text,
        }
    }
}

pub fn card_transform(hovered: bool) -> &'static str {
    if hovered {
        "translateY(-10px) scale(1.02)"
    } else {
        "translateY(0) scale(1)"
    }
}

pub fn button_transform(pressed: bool) -> &'static str {
    if pressed {
        "scale(0.98)"
    } else {
        "scale(1)"
    }
}

pub const RAINBOW_BACKGROUND: &str =
    "linear-gradient(45deg, #ff6b6b, #4ecdc4, #45b7d1, #96ceb4, #ffeaa7)";
pub const RAINBOW_SIZE: &str = "400% 400%";
pub const RAINBOW_ANIMATION: &str = "rainbow 2s ease infinite";

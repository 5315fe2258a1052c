use std::{sync::LazyLock, time::Duration};

use serde::{Deserialize, Serialize};

static SITE_CONFIG: LazyLock<SiteConfig> =
    LazyLock::new(|| SiteConfig::from_json(include_str!("../../site.json")));

/// Timings and thresholds for every cosmetic reaction on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub reveal_delay_ms: u64,
    pub stagger_step_ms: u64,
    pub submit_latency_ms: u64,
    pub typewriter_start_ms: u64,
    pub typewriter_step_ms: u64,
    pub pulse_ms: u64,
    pub rainbow_ms: u64,
    /// Header only hides once the page is scrolled further than this.
    pub header_offset: f64,
    pub parallax_rate: f64,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 100,
            stagger_step_ms: 100,
            submit_latency_ms: 2000,
            typewriter_start_ms: 1000,
            typewriter_step_ms: 100,
            pulse_ms: 150,
            rainbow_ms: 5000,
            header_offset: 100.0,
            parallax_rate: -0.5,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Settings bundled from `site.json`, parsed on first use.
    pub fn global() -> &'static SiteConfig {
        &SITE_CONFIG
    }

    /// Missing keys keep their defaults; unreadable input falls back entirely.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            log::warn!("ignoring bad site config: {e}");
            Self::default()
        })
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn stagger(&self, index: usize) -> Duration {
        Duration::from_millis(self.stagger_step_ms * index as u64)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn typewriter_start(&self) -> Duration {
        Duration::from_millis(self.typewriter_start_ms)
    }

    pub fn typewriter_step(&self) -> Duration {
        Duration::from_millis(self.typewriter_step_ms)
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }

    pub fn rainbow(&self) -> Duration {
        Duration::from_millis(self.rainbow_ms)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

mod config;
mod controller;
mod effects;
mod form;
mod konami;
mod navigation;
mod reveal;
mod schedule;

pub use config::SiteConfig;
pub use controller::{Command, PageController, PageEvent};
pub use effects::{ScrollMetrics, RAINBOW_ANIMATION, RAINBOW_BACKGROUND, RAINBOW_SIZE};
pub use form::{FieldError, FieldKind, FieldSpec, CONTACT_FIELDS};
pub use navigation::Section;
pub use reveal::{CardId, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
pub use schedule::{DelayedTask, TaskId};

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::interaction::{Command, PageController, PageEvent, ScrollMetrics};

/// Feeds browser events into the controller and carries out what it asks for.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    controller: RwSignal<PageController>,
}

impl Dispatcher {
    pub fn new(controller: PageController) -> Self {
        Self {
            controller: RwSignal::new(controller),
        }
    }

    pub fn send(self, event: PageEvent) {
        let Some(commands) = self.controller.try_update(|c| c.dispatch(event)) else {
            return;
        };
        for cmd in commands {
            self.run(cmd);
        }
    }

    /// Derived view of controller state. Subscribers only rerun when the
    /// derived value changes, not on every event the controller handles.
    pub fn memo<T>(self, f: impl Fn(&PageController) -> T + Send + Sync + 'static) -> Memo<T>
    where
        T: PartialEq + Send + Sync + 'static,
    {
        let controller = self.controller;
        Memo::new(move |_| controller.with(|c| f(c)))
    }

    fn run(self, cmd: Command) {
        match cmd {
            Command::Schedule(task) => {
                let id = task.id;
                // no handle kept, so the task cannot be cancelled once set
                set_timeout(move || self.send(PageEvent::TimerFired(id)), task.delay);
            }
            Command::ScrollToTop => {
                let opts = ScrollToOptions::new();
                opts.set_top(0.0);
                opts.set_behavior(ScrollBehavior::Smooth);
                window().scroll_to_with_scroll_to_options(&opts);
            }
            Command::ScrollIntoView(selector) => {
                let target = match document().query_selector(&selector) {
                    Ok(Some(el)) => el,
                    Ok(None) => return,
                    Err(e) => {
                        log::warn!("bad anchor selector {selector}: {e:?}");
                        return;
                    }
                };
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
            Command::Notify(msg) => {
                if let Err(e) = window().alert_with_message(&msg) {
                    log::warn!("couldn't show notice: {e:?}");
                }
            }
        }
    }
}

pub fn use_dispatcher() -> Dispatcher {
    expect_context::<Dispatcher>()
}

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let root = document().document_element()?;
    Some(ScrollMetrics {
        scroll_y: window().scroll_y().unwrap_or(root.scroll_top() as f64),
        scroll_height: root.scroll_height() as f64,
        client_height: root.client_height() as f64,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;
    use crate::interaction::{Section, SiteConfig};

    fn dispatcher() -> Dispatcher {
        Owner::new().set();
        Dispatcher::new(PageController::new(
            SiteConfig::default(),
            vec![Section::new("home", 2), Section::new("about", 1)],
            "Hi",
        ))
    }

    #[test]
    fn test_scroll_leaves_unrelated_readers_clean() {
        let dispatcher = dispatcher();
        let runs = Arc::new(AtomicUsize::new(0));
        let hidden = dispatcher.memo(|c| !c.is_section_visible("home"));
        let header = dispatcher.memo(|c| c.header_transform());
        let section_view = {
            let runs = runs.clone();
            Memo::new(move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                hidden.get()
            })
        };
        assert!(!section_view.get());
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        dispatcher.send(PageEvent::Scroll(ScrollMetrics {
            scroll_y: 500.0,
            scroll_height: 2000.0,
            client_height: 1000.0,
        }));
        assert_eq!(header.get(), "translateY(-100%)");
        assert!(!section_view.get());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}

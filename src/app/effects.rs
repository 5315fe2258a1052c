use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener, use_window};

use crate::interaction::{PageEvent, RAINBOW_ANIMATION, RAINBOW_BACKGROUND, RAINBOW_SIZE};

use super::dispatch::{scroll_metrics, use_dispatcher};

/// Window-wide listeners plus the scroll progress bar.
#[component]
pub fn GlobalEffects() -> impl IntoView {
    let dispatcher = use_dispatcher();

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        if let Some(metrics) = scroll_metrics() {
            dispatcher.send(PageEvent::Scroll(metrics));
        }
    });

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        dispatcher.send(PageEvent::KeyDown(ev.key_code()));
    });

    let rainbow = dispatcher.memo(|c| c.rainbow_active());
    let progress = dispatcher.memo(|c| c.progress_percent());
    Effect::new(move |_| set_rainbow(rainbow.get()));

    view! {
        <div
            class="fixed top-0 left-0 h-[3px] bg-purple z-[9999] transition-[width] duration-300 ease-in-out"
            style:width=move || format!("{}%", progress.get())
        ></div>
    }
}

fn set_rainbow(on: bool) {
    let Some(body) = document().body() else {
        log::warn!("no body element for the rainbow background");
        return;
    };
    let style = body.style();
    let res = if on {
        style
            .set_property("background", RAINBOW_BACKGROUND)
            .and_then(|_| style.set_property("background-size", RAINBOW_SIZE))
            .and_then(|_| style.set_property("animation", RAINBOW_ANIMATION))
    } else {
        style
            .remove_property("background")
            .and_then(|_| style.remove_property("background-size"))
            .and_then(|_| style.remove_property("animation"))
            .map(|_| ())
    };
    if let Err(e) = res {
        log::warn!("couldn't update body style: {e:?}");
    }
}

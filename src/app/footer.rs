use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::interaction::PageEvent;

use super::{
    content::{SECTIONS, SITE_NAME},
    dispatch::use_dispatcher,
};

fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let dispatcher = use_dispatcher();
    view! {
        <footer class="border-t border-muted/30 py-8 mt-16">
            <div class="max-w-6xl mx-auto px-4 flex flex-col md:flex-row justify-between gap-4">
                <p class="text-muted">{format!("© {} {SITE_NAME}", build_year())}</p>
                <nav class="flex flex-wrap gap-4">
                    {SECTIONS
                        .iter()
                        .map(|s| {
                            let target = s.name;
                            view! {
                                <a
                                    href=format!("#{target}")
                                    data-page=target
                                    class="hover:text-cyan"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        dispatcher.send(PageEvent::Navigate(target.to_string()));
                                    }
                                >
                                    {s.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}

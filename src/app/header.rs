use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;

use crate::interaction::PageEvent;

use super::{
    content::{SECTIONS, SITE_NAME},
    dispatch::use_dispatcher,
};

#[component]
pub fn Header() -> impl IntoView {
    let dispatcher = use_dispatcher();
    let toggle_ref = NodeRef::<html::Button>::new();
    let panel_ref = NodeRef::<html::Ul>::new();

    // clicks landing outside both the toggle and the panel close the menu
    let _ = use_event_listener(use_document(), ev::click, move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let inside = |el: Option<web_sys::HtmlElement>| {
            el.map(|el| el.contains(Some(&target))).unwrap_or(false)
        };
        let inside_menu = inside(toggle_ref.get_untracked().map(Into::into))
            || inside(panel_ref.get_untracked().map(Into::into));
        dispatcher.send(PageEvent::DocumentClick { inside_menu });
    });

    let menu_open = dispatcher.memo(|c| c.menu_open());
    let header_transform = dispatcher.memo(|c| c.header_transform());
    let menu_class = move |base: &'static str| {
        move || {
            if menu_open.get() {
                format!("{base} active")
            } else {
                base.to_string()
            }
        }
    };

    view! {
        <header
            class="fixed top-0 inset-x-0 z-50 bg-background/90 backdrop-blur shadow-lg transition-transform duration-300"
            style:transform=move || header_transform.get()
        >
            <nav class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a
                    href="#"
                    data-page="home"
                    class="text-2xl font-bold text-cyan"
                    on:click=move |ev| {
                        ev.prevent_default();
                        dispatcher.send(PageEvent::Navigate("home".to_string()));
                    }
                >
                    {SITE_NAME}
                </a>
                <ul node_ref=panel_ref class=menu_class("nav-links")>
                    {SECTIONS
                        .iter()
                        .map(|s| view! { <NavLink target=s.name label=s.label /> })
                        .collect_view()}
                </ul>
                <button
                    node_ref=toggle_ref
                    class=menu_class("menu-toggle")
                    aria-label="Toggle navigation"
                    on:click=move |_| dispatcher.send(PageEvent::MenuToggle)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}

#[component]
pub fn NavLink(target: &'static str, label: &'static str) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let active = dispatcher.memo(move |c| c.is_link_active(target));
    view! {
        <li>
            <a
                href=format!("#{target}")
                data-page=target
                class="nav-link"
                class:active=move || active.get()
                on:click=move |ev| {
                    ev.prevent_default();
                    dispatcher.send(PageEvent::Navigate(target.to_string()));
                }
            >
                {label}
            </a>
        </li>
    }
}

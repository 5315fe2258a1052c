use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::interaction::{CardId, PageEvent, SiteConfig, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

use super::{
    contact::ContactForm,
    content::{CardContent, SectionContent, HERO_TITLE},
    dispatch::use_dispatcher,
};

#[component]
pub fn SectionPage(content: &'static SectionContent) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let name = content.name;
    let hidden = dispatcher.memo(move |c| !c.is_section_visible(name));
    view! {
        <section
            id=format!("{name}-page")
            class="page min-h-screen pt-24 pb-16"
            class:page-hidden=move || hidden.get()
        >
            {(name == "home").then(|| view! { <Hero /> })}
            <h2 id=format!("{name}-cards") class="text-3xl font-bold text-center my-12">
                {content.heading}
            </h2>
            <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3 max-w-6xl mx-auto px-4">
                {content
                    .cards
                    .iter()
                    .enumerate()
                    .map(|(index, card)| view! { <Card section=name index card /> })
                    .collect_view()}
            </div>
            {(name == "contact").then(|| view! { <ContactForm /> })}
        </section>
    }
}

#[component]
fn Card(section: &'static str, index: usize, card: &'static CardContent) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let card_ref = NodeRef::<html::Div>::new();
    let id = CardId::new(section, index);

    let _ = use_intersection_observer_with_options(
        card_ref,
        {
            let id = id.clone();
            move |entries, _| {
                if entries.iter().any(|e| e.is_intersecting()) {
                    dispatcher.send(PageEvent::CardVisible(id.clone()));
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![REVEAL_THRESHOLD])
            .root_margin(REVEAL_ROOT_MARGIN.to_string()),
    );

    let hover = {
        let id = id.clone();
        move |hovered: bool| {
            dispatcher.send(PageEvent::CardHover {
                card: id.clone(),
                hovered,
            })
        }
    };
    let leave = hover.clone();
    let visible = {
        let id = id.clone();
        dispatcher.memo(move |c| c.is_card_visible(&id))
    };
    let transform = dispatcher.memo(move |c| c.card_transform(&id));

    view! {
        <div
            node_ref=card_ref
            class="card p-6 rounded-lg bg-brightBlack/30 border border-muted/30 transition-all duration-300"
            class:visible=move || visible.get()
            style:transform=move || transform.get()
            on:mouseenter=move |_| hover(true)
            on:mouseleave=move |_| leave(false)
        >
            <div class="text-4xl mb-4">{card.icon}</div>
            <h3 class="text-xl font-bold mb-2">{card.title}</h3>
            <p class="leading-relaxed">{card.body}</p>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let dispatcher = use_dispatcher();
    let parallax = dispatcher.memo(|c| c.parallax_offset());
    let text = dispatcher.memo(|c| c.hero_text().to_string());
    view! {
        <div
            class="hero flex flex-col items-center text-center py-24 px-4"
            style:transform=move || format!("translateY({}px)", parallax.get())
        >
            <h1 class="text-4xl lg:text-6xl font-bold min-h-[1.2em]" aria-label=HERO_TITLE>
                {move || text.get()}
            </h1>
            <p class="text-lg text-muted mt-6 max-w-2xl">
                "Design and engineering for small businesses that want a site they can be proud of."
            </p>
            <div class="flex flex-wrap gap-4 justify-center mt-10">
                <NavButton target="portfolio" label="See our work" />
                <NavButton target="contact" label="Start a project" />
                <PulseButton id="brochure" label="Get the brochure" />
            </div>
            <a
                href="#home-cards"
                class="mt-10 text-cyan hover:underline"
                on:click=move |ev| {
                    ev.prevent_default();
                    dispatcher.send(PageEvent::AnchorClick("#home-cards".to_string()));
                }
            >
                "What we do ↓"
            </a>
        </div>
    }
}

#[component]
pub fn NavButton(target: &'static str, label: &'static str) -> impl IntoView {
    let dispatcher = use_dispatcher();
    view! {
        <button
            class="btn px-6 py-3 rounded-md font-medium bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30"
            data-page=target
            on:click=move |ev| {
                ev.prevent_default();
                dispatcher.send(PageEvent::Navigate(target.to_string()));
            }
        >
            {label}
        </button>
    }
}

/// Button without a target section; it only shrinks briefly when clicked.
#[component]
pub fn PulseButton(id: &'static str, label: &'static str) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let config = expect_context::<SiteConfig>();
    let transform = dispatcher.memo(move |c| c.button_transform(id));
    view! {
        <button
            class="btn px-6 py-3 rounded-md font-medium border border-muted/30 transition-transform"
            style:transition-duration=format!("{}ms", config.pulse_ms)
            style:transform=move || transform.get()
            on:click=move |_| dispatcher.send(PageEvent::ButtonClick(id.to_string()))
        >
            {label}
        </button>
    }
}

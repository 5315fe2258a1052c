mod contact;
mod content;
mod dispatch;
mod effects;
mod footer;
mod header;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::interaction::{PageController, PageEvent, SiteConfig};
use dispatch::{scroll_metrics, Dispatcher};
use effects::GlobalEffects;
use footer::Footer;
use header::Header;
use sections::SectionPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/web-devs.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", content::SITE_NAME) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Site />
            </Routes>
        </Router>
    }
}

/// The whole single-page site; sections swap in place without a route change.
#[component]
fn Site() -> impl IntoView {
    let config = SiteConfig::global().clone();
    provide_context(config.clone());
    let controller = PageController::new(config, content::sections(), content::HERO_TITLE);
    let dispatcher = Dispatcher::new(controller);
    provide_context(dispatcher);

    // effects only run in the browser, so timers start after hydration
    Effect::new(move |_| {
        let metrics = scroll_metrics().unwrap_or_default();
        dispatcher.send(PageEvent::Loaded(metrics));
    });

    let title = dispatcher.memo(|c| {
        content::SECTIONS
            .iter()
            .find(|s| s.name == c.current_page())
            .map(|s| s.label)
            .unwrap_or("Not found")
    });

    view! {
        <Title text=move || title.get() />
        <GlobalEffects />
        <Header />
        <main class="flex flex-col flex-grow mx-auto w-full max-w-7xl">
            {content::SECTIONS
                .iter()
                .map(|content| view! { <SectionPage content /> })
                .collect_view()}
        </main>
        <Footer />
    }
}

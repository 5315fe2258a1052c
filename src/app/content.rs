use crate::interaction::Section;

pub const SITE_NAME: &str = "web.devs";
pub const HERO_TITLE: &str = "We build fast, friendly websites";

pub struct CardContent {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub struct SectionContent {
    pub name: &'static str,
    pub label: &'static str,
    pub heading: &'static str,
    pub cards: &'static [CardContent],
}

pub static SECTIONS: [SectionContent; 5] = [
    SectionContent {
        name: "home",
        label: "Home",
        heading: "What we do best",
        cards: &[
            CardContent {
                icon: "⚡",
                title: "Performance first",
                body: "Pages that render on the server and hydrate in a blink.",
            },
            CardContent {
                icon: "📱",
                title: "Responsive",
                body: "Layouts that hold up from a phone in portrait to a 4K monitor.",
            },
            CardContent {
                icon: "♿",
                title: "Accessible",
                body: "Semantic markup and keyboard support baked in from day one.",
            },
        ],
    },
    SectionContent {
        name: "about",
        label: "About",
        heading: "About us",
        cards: &[
            CardContent {
                icon: "👋",
                title: "Who we are",
                body: "A small studio of engineers and designers who like shipping.",
            },
            CardContent {
                icon: "🧭",
                title: "How we work",
                body: "Short iterations, honest estimates and weekly demos.",
            },
        ],
    },
    SectionContent {
        name: "services",
        label: "Services",
        heading: "Services",
        cards: &[
            CardContent {
                icon: "🎨",
                title: "Design",
                body: "Brand systems, wireframes and interactive prototypes.",
            },
            CardContent {
                icon: "🛠",
                title: "Development",
                body: "Marketing sites, web apps and the APIs behind them.",
            },
            CardContent {
                icon: "📈",
                title: "Optimization",
                body: "Audits for speed, search ranking and conversion.",
            },
        ],
    },
    SectionContent {
        name: "portfolio",
        label: "Portfolio",
        heading: "Recent work",
        cards: &[
            CardContent {
                icon: "☕",
                title: "Roastery storefront",
                body: "Subscription checkout for a specialty coffee roaster.",
            },
            CardContent {
                icon: "🧗",
                title: "Climbing gym",
                body: "Class booking and route setting announcements.",
            },
            CardContent {
                icon: "🎹",
                title: "Music school",
                body: "Lesson scheduling with a teacher availability calendar.",
            },
            CardContent {
                icon: "⌨",
                title: "Keyboard shop",
                body: "Group-buy tracker with live inventory.",
            },
        ],
    },
    SectionContent {
        name: "contact",
        label: "Contact",
        heading: "Get in touch",
        cards: &[CardContent {
            icon: "✉",
            title: "Start a project",
            body: "Tell us what you are building and we will reply within two days.",
        }],
    },
];

pub fn sections() -> Vec<Section> {
    SECTIONS
        .iter()
        .map(|s| Section::new(s.name, s.cards.len()))
        .collect()
}

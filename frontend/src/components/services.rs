use yew::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::components::scroll_section::ScrollSection;

#[derive(Clone, Copy, PartialEq)]
enum Icon {
    Bag,
    Megaphone,
    Code,
    Palette,
}

struct Service {
    icon: Icon,
    title: &'static str,
    description: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        icon: Icon::Bag,
        title: "E-Commerce",
        description: "Maßgeschneiderte Shopify-Shops, die deine Marke authentisch widerspiegeln und Kunden begeistern.",
    },
    Service {
        icon: Icon::Megaphone,
        title: "Marketing",
        description: "Strategische Kampagnen, die deine Zielgruppe erreichen und nachhaltiges Wachstum ermöglichen.",
    },
    Service {
        icon: Icon::Code,
        title: "Entwicklung",
        description: "Technisch exzellente Lösungen mit modernen Technologien für optimale Performance.",
    },
    Service {
        icon: Icon::Palette,
        title: "Design",
        description: "Visuelle Identitäten, die im Gedächtnis bleiben und deine Markengeschichte erzählen.",
    },
];

/// Reveal delay for the card at `index`.
pub fn stagger(index: usize) -> f64 {
    index as f64 * 0.1
}

fn icon(icon: Icon) -> Html {
    let paths = match icon {
        Icon::Bag => html! {
            <>
                <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z" />
                <path d="M3 6h18" />
                <path d="M16 10a4 4 0 0 1-8 0" />
            </>
        },
        Icon::Megaphone => html! {
            <>
                <path d="m3 11 18-5v12L3 14v-3z" />
                <path d="M11.6 16.8a3 3 0 1 1-5.8-1.6" />
            </>
        },
        Icon::Code => html! {
            <>
                <polyline points="16 18 22 12 16 6" />
                <polyline points="8 6 2 12 8 18" />
            </>
        },
        Icon::Palette => html! {
            <>
                <circle cx="13.5" cy="6.5" r=".5" />
                <circle cx="17.5" cy="10.5" r=".5" />
                <circle cx="8.5" cy="7.5" r=".5" />
                <circle cx="6.5" cy="12.5" r=".5" />
                <path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z" />
            </>
        },
    };

    html! {
        <svg
            class="service-card__icon"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { paths }
        </svg>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="services section">
            <ScrollSection class="section__inner">
                <ScrollReveal distance={30.0} duration={0.6} margin={100.0} class="section__header">
                    <p class="eyebrow">{"Was wir bieten"}</p>
                    <h2 class="section__title">{"Unsere Leistungen"}</h2>
                </ScrollReveal>

                <div class="services__grid">
                    {
                        SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <ScrollReveal
                                key={service.title}
                                distance={30.0}
                                duration={0.6}
                                delay={stagger(index)}
                                margin={50.0}
                            >
                                <div class="service-card">
                                    { icon(service.icon) }
                                    <h3 class="service-card__title">{service.title}</h3>
                                    <p class="service-card__copy">{service.description}</p>
                                </div>
                            </ScrollReveal>
                        }).collect::<Html>()
                    }
                </div>
            </ScrollSection>

            <style>
                {r#"
                .services__grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .service-card {
                    height: 100%;
                    padding: 2rem;
                    border: 1px solid var(--border);
                    border-radius: 2px;
                    background: rgba(28, 27, 26, 0.6);
                    transition: background 0.5s;
                }

                .service-card:hover {
                    background: rgba(60, 57, 54, 0.5);
                }

                .service-card__icon {
                    width: 2rem;
                    height: 2rem;
                    margin-bottom: 1.5rem;
                    color: var(--accent);
                    transition: transform 0.3s;
                }

                .service-card:hover .service-card__icon {
                    transform: scale(1.1);
                }

                .service-card__title {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }

                .service-card__copy {
                    color: var(--muted);
                    line-height: 1.7;
                }

                @media (min-width: 768px) {
                    .services__grid { grid-template-columns: 1fr 1fr; }
                }

                @media (min-width: 1024px) {
                    .services__grid { gap: 3rem; }
                    .service-card { padding: 2.5rem; }
                }
                "#}
            </style>
        </section>
    }
}

//! Landing page component
//!
//! Single-page marketing site for The Print Route:
//! - SEO meta tags and schema.org structured data
//! - Sticky header with anchor navigation, mobile menu and theme toggle
//! - Hero with the three-step print flow
//! - "Why" benefit cards and "How it works" steps
//! - Routing console preview with demo orders and analytics
//! - Early-access section hosting the lead form
//! - Footer

use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::core::{SeoMeta, SiteConfig, demo_orders};
use crate::ui::common::ButtonVariant;
use crate::ui::dashboard_preview::DashboardPreview;
use crate::ui::hero::PrintFlowHero;
use crate::ui::icon::{Icon, icons};
use crate::ui::lead_form::EarlyAccessForm;
use crate::ui::page_meta::PageMeta;
use crate::ui::theme::{ThemeContext, ThemeMode, use_theme_context};

/// Header anchors as (section id, label)
const NAV_LINKS: [(&str, &str); 4] = [
    ("why", "Why"),
    ("how", "How it works"),
    ("preview", "Dashboard"),
    ("contact", "Contact"),
];

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = use_theme_context();
    let config = SiteConfig::compiled();
    // Stamped once on the server and reused during hydration
    let rendered_at = SharedValue::new(|| Utc::now().timestamp_millis()).into_inner();
    let now = DateTime::<Utc>::from_timestamp_millis(rendered_at).unwrap_or_else(Utc::now);

    view! {
        <PageMeta meta=SeoMeta::for_site(&config.site_url) structured_data=true />
        <LandingStyles />

        <div class="min-h-screen bg-theme-primary text-theme-primary">
            <Header theme=theme />

            <main id="top" class="flex flex-col">
                <PrintFlowHero />
                <WhySection />
                <HowSection />
                <DashboardPreview orders=demo_orders(now) />
                <ContactSection />
            </main>

            <Footer year=now.year() />
        </div>

        <ScrollAnimationScript />
    }
}

#[component]
fn Header(theme: ThemeContext) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="sticky top-0 z-20 border-b border-theme bg-theme-header backdrop-blur">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-4 py-3 md:px-8">
                <a
                    href="#top"
                    class="flex items-center gap-2 text-lg font-semibold transition-colors hover:text-sky-400"
                    aria-label="The Print Route - Go to top"
                >
                    <Logo />
                    "The Print Route"
                </a>

                // Desktop Navigation
                <nav class="hidden items-center gap-6 text-xs font-medium text-theme-secondary md:flex">
                    {NAV_LINKS
                        .iter()
                        .map(|(id, label)| view! {
                            <a href=format!("#{}", id) class="hover:text-theme-primary">{*label}</a>
                        })
                        .collect_view()}
                    <ThemeToggle theme=theme />
                </nav>

                // Mobile menu button
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md border border-theme p-1 text-theme-secondary md:hidden"
                    on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                    aria-label="Toggle navigation"
                    aria-expanded=move || mobile_menu_open.get().to_string()
                >
                    {move || {
                        if mobile_menu_open.get() {
                            view! { <Icon icon=icons::X class="h-4 w-4" /> }
                        } else {
                            view! { <Icon icon=icons::MENU class="h-4 w-4" /> }
                        }
                    }}
                </button>
            </div>

            // Mobile menu
            <Show when=move || mobile_menu_open.get()>
                <div class="border-t border-theme px-4 pb-3 pt-2 text-sm md:hidden">
                    <nav class="flex flex-col gap-2">
                        {NAV_LINKS
                            .iter()
                            .map(|(id, label)| view! {
                                <a
                                    href=format!("#{}", id)
                                    class="text-left text-theme-secondary"
                                    on:click=move |_| set_mobile_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            })
                            .collect_view()}
                        <div class="mt-1">
                            <ThemeToggle theme=theme />
                        </div>
                    </nav>
                </div>
            </Show>
        </header>
    }
}

#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            type="button"
            class=ButtonVariant::Pill.class()
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                let mode = theme.mode.get();
                let icon = if mode == ThemeMode::Dark { icons::MOON } else { icons::SUN };
                view! {
                    <Icon icon=icon class="h-3 w-3" />
                    <span>{mode.display_name()}</span>
                }
            }}
        </button>
    }
}

#[component]
fn WhySection() -> impl IntoView {
    view! {
        <section id="why" class="section-block">
            <div class="mx-auto max-w-5xl">
                <div class="landing-scroll-animate">
                    <h2 class="section-eyebrow">"Why The Print Route"</h2>
                    <p class="section-title">
                        "Turn fragmented print requests into a predictable, routed workflow."
                    </p>
                    <p class="mt-2 max-w-2xl text-sm text-theme-tertiary md:text-base">
                        "Instead of manually forwarding PDFs to different print partners, The Print Route turns each order into structured data you can route, track, and optimize across providers and countries."
                    </p>
                </div>

                <div class="mt-6 grid gap-4 md:grid-cols-3">
                    <FeatureCard
                        title="Discover hidden capacity"
                        description="Balance volume across local and global providers without losing control of costs or lead times."
                    />
                    <FeatureCard
                        title="Accelerate operations"
                        description="Stop chasing emails. Define rules once and let routing run automatically from tools like TAN or n8n."
                    />
                    <FeatureCard
                        title="Reduce support tickets"
                        description="Status and tracking links are unified, so fewer customers ask: \"where is my order?\"."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="card landing-scroll-animate">
            <h3 class="text-sm font-semibold text-theme-primary">{title}</h3>
            <p class="mt-2 text-xs text-theme-tertiary md:text-sm">{description}</p>
        </article>
    }
}

#[component]
fn HowSection() -> impl IntoView {
    view! {
        <section id="how" class="section-block">
            <div class="mx-auto max-w-5xl">
                <div class="landing-scroll-animate">
                    <h2 class="section-eyebrow">"How it works"</h2>
                    <p class="section-title">"From incoming webhook to delivered print – in three steps."</p>
                </div>

                <div class="mt-6 grid gap-4 md:grid-cols-3">
                    <StepCard
                        step=1
                        label="Intake"
                        title="Connect TAN or n8n"
                        description="Standardise orders as JSON: file URL, quantity, material, and destination. No PII needed – just anonymous IDs."
                    />
                    <StepCard
                        step=2
                        label="Smart routing"
                        title="Rule-based + AI scoring"
                        description="Route Sweden large-format to local providers, marketing runs to global providers, and fallbacks to generic partners by SLA and cost."
                    />
                    <StepCard
                        step=3
                        label="Fulfillment"
                        title="Unified tracking layer"
                        description="Each provider returns tracking into a single, clean URL you can send from your app, CRM, or support tooling."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(
    step: u8,
    label: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="card landing-scroll-animate">
            <p
                class="text-xs font-semibold uppercase tracking-wide text-theme-tertiary"
                aria-label=format!("Step {}", step)
            >
                {format!("{}. {}", step, label)}
            </p>
            <h3 class="mt-2 text-sm font-semibold text-theme-primary">{title}</h3>
            <p class="mt-2 text-xs text-theme-tertiary md:text-sm">{description}</p>
        </article>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="bg-theme-primary px-4 py-10 md:px-8 md:py-14">
            <div class="mx-auto max-w-4xl text-center landing-scroll-animate">
                <h2 class="section-eyebrow">"Early access"</h2>
                <p class="section-title">
                    "Ready to route your first print orders through The Print Route?"
                </p>
                <p class="mt-2 text-sm text-theme-tertiary md:text-base">
                    "We're building the first version focused on apps like TAN and workflow tools like n8n. Share your use case and we'll send a short activation plan."
                </p>
                <EarlyAccessForm />
            </div>
        </section>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <span class="inline-flex h-7 w-7 items-center justify-center rounded-lg bg-gradient-to-br from-sky-500 to-emerald-500 text-white">
            <Icon icon=icons::ROUTE class="h-4 w-4" />
        </span>
    }
}

#[component]
fn Footer(year: i32) -> impl IntoView {
    view! {
        <footer class="border-t border-theme bg-theme-primary px-4 py-5 md:px-8">
            <div class="mx-auto flex max-w-5xl flex-col items-center justify-between gap-3 text-[11px] text-theme-tertiary md:flex-row">
                <p>{copyright_notice(year)}</p>
                <div class="flex gap-3">
                    <span>"GDPR-friendly: no live customer PII in this demo."</span>
                </div>
            </div>
        </footer>
    }
}

fn copyright_notice(year: i32) -> String {
    format!("© {} The Print Route. All rights reserved.", year)
}

/// CSS for landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.5s ease-out forwards;
            }

            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            /* Hero flow steps */
            @keyframes flow-from-left {
                from { opacity: 0; transform: translateX(-20px); }
                to { opacity: 1; transform: translateX(0); }
            }

            @keyframes flow-from-below {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }

            @keyframes flow-from-right {
                from { opacity: 0; transform: translateX(20px); }
                to { opacity: 1; transform: translateX(0); }
            }

            .flow-from-left { opacity: 0; animation: flow-from-left 0.5s ease-out 0.3s forwards; }
            .flow-from-below { opacity: 0; animation: flow-from-below 0.5s ease-out 0.5s forwards; }
            .flow-from-right { opacity: 0; animation: flow-from-right 0.5s ease-out 0.7s forwards; }

            @keyframes truck-drive {
                0%, 100% { transform: translateX(0); }
                50% { transform: translateX(8px); }
            }

            .truck-drive {
                display: inline-block;
                animation: truck-drive 1.5s ease-in-out 1s infinite;
            }

            /* Scroll animations */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(4px);
                transition: opacity 0.25s ease-out, transform 0.25s ease-out;
            }

            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }

            @media (prefers-reduced-motion: reduce) {
                html { scroll-behavior: auto; }
                .landing-fade-in-up, .flow-from-left, .flow-from-below, .flow-from-right, .truck-drive {
                    animation: none;
                    opacity: 1;
                }
                .landing-scroll-animate { opacity: 1; transform: none; transition: none; }
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const targets = document.querySelectorAll('.landing-scroll-animate');
                    if (!('IntersectionObserver' in window)) {
                        targets.forEach(el => el.classList.add('visible'));
                        return;
                    }

                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -20% 0px'
                    });

                    targets.forEach(el => observer.observe(el));
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}

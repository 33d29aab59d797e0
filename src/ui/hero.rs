//! Hero section with the three-step print flow

use leptos::prelude::*;

use crate::ui::common::CtaLink;
use crate::ui::icon::{Icon, icons};

/// One step of the webhook → routing → fulfillment flow
#[component]
fn FlowStep(
    icon: &'static [&'static str],
    tag: &'static str,
    /// Pill and icon colors for the step tag
    tag_class: &'static str,
    icon_class: &'static str,
    title: &'static str,
    /// Entrance animation class
    entrance: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!(
            "relative z-10 rounded-xl border border-theme bg-theme-card p-4 backdrop-blur-sm lg:w-1/3 {}",
            entrance,
        )>
            <div class=format!(
                "mb-3 inline-flex items-center gap-2 rounded-full px-2.5 py-1 text-xs {}",
                tag_class,
            )>
                <Icon icon=icon class=icon_class />
                <span>{tag}</span>
            </div>
            <h3 class="mb-2 text-sm font-semibold text-theme-primary">{title}</h3>
            {children()}
        </div>
    }
}

#[component]
pub fn PrintFlowHero() -> impl IntoView {
    view! {
        <section class="hero-bg w-full border-b border-theme">
            <div class="mx-auto max-w-6xl px-4 py-12 md:px-8 md:py-16 lg:py-20">
                <div class="flex flex-col gap-12 lg:flex-row lg:items-center lg:gap-16">
                    <div class="space-y-6 lg:w-1/2 landing-fade-in-up">
                        <span class="badge">"Print routing SaaS"</span>
                        <h1 class="text-balance text-3xl font-semibold tracking-tight sm:text-4xl lg:text-5xl">
                            "The Print Route: Seamless Routing for Every Print Need"
                        </h1>
                        <p class="max-w-xl text-pretty text-theme-secondary">
                            "Send your order – we analyze geo, format, and price, then route it to the optimal provider and handle delivery end-to-end."
                        </p>
                        <div class="flex flex-wrap items-center gap-4">
                            <CtaLink target="preview">"Start Routing"</CtaLink>
                            <span class="text-sm text-theme-tertiary">
                                "From webhook to doorstep, in three automated steps."
                            </span>
                        </div>
                    </div>

                    <div class="lg:w-1/2 landing-fade-in-up landing-delay-200">
                        <div class="relative">
                            // Connector behind the cards, desktop only
                            <div class="hidden lg:absolute lg:left-0 lg:right-0 lg:top-1/2 lg:block lg:-translate-y-1/2" aria-hidden="true">
                                <div class="h-0.5 bg-gradient-to-r from-sky-500 via-emerald-500 to-purple-500"></div>
                            </div>

                            <div class="flex flex-col gap-6 lg:flex-row lg:items-center lg:gap-4">
                                <FlowStep
                                    icon=icons::MAIL
                                    tag="Webhook"
                                    tag_class="bg-slate-900/70 text-slate-300"
                                    icon_class="h-3.5 w-3.5 text-sky-400"
                                    title="Intake Request"
                                    entrance="flow-from-left"
                                >
                                    <p class="text-xs leading-relaxed text-theme-tertiary">
                                        "JSON payload with file, qty, material & address."
                                    </p>
                                </FlowStep>

                                <FlowStep
                                    icon=icons::ROUTE
                                    tag="Smart Routing"
                                    tag_class="bg-emerald-900/40 text-emerald-200"
                                    icon_class="h-3.5 w-3.5 text-emerald-300"
                                    title="Rule-based + AI"
                                    entrance="flow-from-below"
                                >
                                    <div class="space-y-1.5 text-xs leading-relaxed text-theme-secondary">
                                        <p>
                                            "If "
                                            <span class="font-semibold text-theme-primary">"Sweden + large-format"</span>
                                            " → Local provider"
                                        </p>
                                        <p>
                                            "If "
                                            <span class="font-semibold text-theme-primary">"marketing / global"</span>
                                            " → Global provider"
                                        </p>
                                    </div>
                                    <p class="mt-2 text-xs leading-relaxed text-theme-tertiary">
                                        "Mock AI scores providers by geo, format & price."
                                    </p>
                                </FlowStep>

                                <FlowStep
                                    icon=icons::TRUCK
                                    tag="Fulfillment"
                                    tag_class="bg-indigo-900/40 text-indigo-200"
                                    icon_class="h-3.5 w-3.5 text-indigo-300"
                                    title="Delivery & Tracking"
                                    entrance="flow-from-right"
                                >
                                    <p class="text-xs leading-relaxed text-theme-tertiary">
                                        "Provider ships, we email tracking to you."
                                    </p>
                                    <div class="mt-3 flex justify-center">
                                        <span class="truck-drive text-sky-400">
                                            <Icon icon=icons::TRUCK class="h-5 w-5" />
                                        </span>
                                    </div>
                                </FlowStep>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

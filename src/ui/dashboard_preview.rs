//! Routing console preview: demo orders table and the ETA/cost chart

use leptos::prelude::*;

use crate::core::analytics::ChartLayout;
use crate::core::{LineChart, Order, analytics_points};
use crate::ui::common::CtaLink;

const ETA_COLOR: &str = "#22c55e";
const COST_COLOR: &str = "#0ea5e9";
const AXIS_COLOR: &str = "#64748b";

#[component]
pub fn DashboardPreview(orders: Vec<Order>) -> impl IntoView {
    let points = analytics_points(&orders);

    view! {
        <section id="preview" class="section-block">
            <div class="mx-auto flex max-w-6xl flex-col gap-8 lg:flex-row">
                <div class="space-y-4 lg:w-2/5 landing-scroll-animate">
                    <h2 class="section-eyebrow">"Routing console"</h2>
                    <p class="section-title">"See exactly where each print job is going."</p>
                    <p class="text-sm text-theme-tertiary md:text-base">
                        "The dashboard gives operations, support, and product a single view of orders, providers, ETAs, and cost patterns across your whole print network."
                    </p>
                    <CtaLink target="contact">"Request early access"</CtaLink>
                </div>

                <div class="flex flex-1 flex-col gap-4">
                    <OrdersCard orders=orders />
                    <AnalyticsCard layout=LineChart::default().layout(&points) />
                </div>
            </div>
        </section>
    }
}

#[component]
fn OrdersCard(orders: Vec<Order>) -> impl IntoView {
    view! {
        <div class="overflow-hidden rounded-xl border border-theme bg-theme-card landing-scroll-animate">
            <div class="flex items-center justify-between border-b border-theme px-3 py-2">
                <p class="text-xs font-semibold uppercase tracking-wide text-theme-secondary">"Recent orders"</p>
                <p class="text-[11px] text-theme-tertiary">"Demo data – no live customer PII"</p>
            </div>
            <div class="grid grid-cols-6 gap-2 border-b border-theme px-3 py-2 text-[11px] font-medium uppercase tracking-wide text-theme-tertiary md:text-xs">
                <span>"Created"</span>
                <span>"Material"</span>
                <span>"Destination"</span>
                <span>"Provider"</span>
                <span>"ETA"</span>
                <span class="text-right">"Cost"</span>
            </div>
            <div class="divide-y divide-theme">
                {orders
                    .into_iter()
                    .map(|order| view! {
                        <div
                            class="grid grid-cols-6 gap-2 px-3 py-2 text-[11px] text-theme-primary md:text-xs lg:text-sm"
                            data-status=order.status.as_str()
                            title=order.status.display_name()
                        >
                            <span class="truncate text-theme-tertiary">{order.created_label()}</span>
                            <span class="truncate">{order.quantity_label()}</span>
                            <span class="truncate text-theme-secondary">{order.destination_label()}</span>
                            <span class="truncate">{order.provider_label()}</span>
                            <span class="truncate">{order.eta_label()}</span>
                            <span class="truncate text-right">{order.cost_label()}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn AnalyticsCard(layout: ChartLayout) -> impl IntoView {
    let chart = LineChart::default();
    let view_box = format!("0 0 {} {}", chart.width, chart.height);
    let left = chart.margin;
    let right = chart.width - chart.margin;
    let baseline = chart.baseline();

    view! {
        <div class="rounded-xl border border-theme bg-theme-card p-3 landing-scroll-animate">
            <div class="mb-2 flex items-center justify-between">
                <p class="text-xs font-semibold uppercase tracking-wide text-theme-secondary">"Routing analytics"</p>
                <p class="text-[11px] text-emerald-400">"Mock view of ETA & cost per job"</p>
            </div>
            <div class="mb-1 flex gap-4 text-[11px]">
                <span style=format!("color: {}", ETA_COLOR)>"ETA (days)"</span>
                <span style=format!("color: {}", COST_COLOR)>"Cost (€)"</span>
            </div>
            <svg
                class="h-48 w-full"
                viewBox=view_box
                preserveAspectRatio="none"
                role="img"
                aria-label="ETA in days and cost in euros per order"
                font-size="11"
            >
                <line x1=left y1=baseline x2=right y2=baseline stroke=AXIS_COLOR />

                // ETA axis on the left
                {layout.eta_ticks.iter().map(|tick| view! {
                    <text x={left - 6.0} y=tick.position text-anchor="end" dominant-baseline="middle" fill=ETA_COLOR>
                        {tick.text.clone()}
                    </text>
                }).collect_view()}

                // Cost axis on the right
                {layout.cost_ticks.iter().map(|tick| view! {
                    <text x={right + 6.0} y=tick.position text-anchor="start" dominant-baseline="middle" fill=COST_COLOR>
                        {tick.text.clone()}
                    </text>
                }).collect_view()}

                {layout.x_labels.iter().map(|label| view! {
                    <text x=label.position y={baseline + 16.0} text-anchor="middle" fill=AXIS_COLOR>
                        {label.text.clone()}
                    </text>
                }).collect_view()}

                <polyline points=layout.eta_line.clone() fill="none" stroke=ETA_COLOR stroke-width="2" />
                <polyline points=layout.cost_line.clone() fill="none" stroke=COST_COLOR stroke-width="2" />
            </svg>
        </div>
    }
}

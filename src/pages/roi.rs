use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Icon, IconName, PageHero, Pill, Rise, Section, SectionHeading, Tone};
use crate::routes::SiteRoute;
use crate::sections::CallToAction;
use crate::theme::Theme;

struct Financials {
    revenue: &'static str,
    ebitda_margin: &'static str,
}

const BEFORE: Financials = Financials {
    revenue: "₹35–40 Cr",
    ebitda_margin: "10–12%",
};

const AFTER: Financials = Financials {
    revenue: "₹45–48 Cr",
    ebitda_margin: "15–18%",
};

const DRIVERS: [(IconName, &str); 5] = [
    (IconName::ArrowUpRight, "ARPOB Improvement"),
    (IconName::PieChart, "Cost Standardization"),
    (IconName::Clock, "LOS Reduction"),
    (IconName::Building, "Higher Asset Utilization"),
    (IconName::Wallet, "Better Payer Mix"),
];

#[component]
fn Comparison(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Paper>
            <div class="comparison">
                <Rise class="card muted-card">
                    <h3 class="caption">"Before VBHC"</h3>
                    <p class="figure-label">"Annual Revenue"</p>
                    <div class="figure">{BEFORE.revenue}</div>
                    <hr/>
                    <p class="figure-label">"EBITDA Margin"</p>
                    <div class="figure">{BEFORE.ebitda_margin}</div>
                </Rise>

                <div class="comparison-arrow">
                    <Icon name=IconName::ArrowRight/>
                </div>

                <Rise class="card positive-card" delay_ms=200>
                    <div class="card-heading">
                        <h3 class="caption positive">"After VBHC"</h3>
                        <Pill icon=IconName::Activity text="Active Optimization"/>
                    </div>
                    <p class="figure-label">"Annual Revenue" <span class="badge">"+20% Growth"</span></p>
                    <div class="figure positive">{AFTER.revenue}</div>
                    <hr/>
                    <p class="figure-label">"EBITDA Margin" <span class="badge">"+50% Uplift"</span></p>
                    <div class="figure positive">{AFTER.ebitda_margin}</div>
                </Rise>
            </div>

            <Rise class="payback" delay_ms=400>
                <p class="caption">"Projected Payback Period"</p>
                <div class="payback-value">
                    <Icon name=IconName::Clock/>
                    "Less than 12 Months"
                </div>
            </Rise>
        </Section>
    }
}

#[component]
fn Drivers(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Canvas>
            <SectionHeading eyebrow="The Levers" title="Where ROI Comes From"/>
            <div class="tile-row five">
                {DRIVERS
                    .iter()
                    .enumerate()
                    .map(|(index, (icon, label))| {
                        view! {
                            <Rise class="tile" delay_ms={index as u32 * 80}>
                                <Icon name=*icon size=28/>
                                <span>{*label}</span>
                            </Rise>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn RoiPage(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Title text=SiteRoute::Roi.title()/>
        <div class="roi-page">
            <PageHero
                theme
                eyebrow="Financial Impact"
                icon=IconName::TrendingUp
                title="The Business Case:"
                accent="ROI."
                lede="Financial impact analysis for a typical 75-Bed Hospital implementation."
            />
            <Comparison theme/>
            <Drivers theme/>
            <CallToAction theme/>
        </div>
    }
}

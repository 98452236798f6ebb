use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::SiteRoute;
use crate::sections::*;
use crate::theme::Theme;

#[component]
pub fn HomePage(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Title text=SiteRoute::Home.title()/>
        <div class="home-page">
            <Hero theme/>
            <WhyVbhc theme/>
            <TheProblem theme/>
            <TheSolution theme/>
            <MeasurableImpact theme/>
            <WhoWeWorkWith theme/>
            <CallToAction theme/>
        </div>
    }
}

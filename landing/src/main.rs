// Stats Landing Page - Leptos 0.8 Edition
// Developed with 💀 by The Stats Landing Team (c)2025

use leptos::prelude::*;
use stats_landing::sections::StatsSection;

fn main() {
    console_error_panic_hook::set_once();
    stats_landing::logging::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <main>
            <StatsSection />
        </main>
    }
}

use countup::stagger::transition_delay_css;
use countup::{AnimationConfig, CountUpAnimator, STATS, Stat, Threshold, format_percent};
use leptos::prelude::*;

use crate::hooks::use_animate_on_scroll;
use crate::raf::RafScheduler;

/// Grid of percentage stats that count up once half the section is on screen.
#[component]
pub fn StatsSection() -> impl IntoView {
    let config = AnimationConfig::default();
    let threshold = Threshold::new(config.threshold).unwrap_or_default();
    let (section_ref, is_visible) = use_animate_on_scroll(threshold);

    let items = STATS
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            let stat = *stat;
            let delay = format!(
                "transition-delay: {}",
                transition_delay_css(index, config.stagger_ms)
            );
            view! {
                <div
                    class=move || if is_visible.get() { "stat-cell is-visible" } else { "stat-cell" }
                    style=delay
                >
                    <StatItem stat=stat config=config is_visible=is_visible />
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            node_ref=section_ref
            class=move || if is_visible.get() { "stats is-visible" } else { "stats" }
        >
            <div class="container">
                <div class="stats-grid">{items}</div>
            </div>
        </section>
    }
}

#[component]
fn StatItem(
    stat: Stat,
    config: AnimationConfig,
    #[prop(into)] is_visible: Signal<bool>,
) -> impl IntoView {
    let (count, set_count) = signal(0u32);
    let animator = StoredValue::new_local(CountUpAnimator::new(
        RafScheduler,
        config,
        stat.value,
        move |value| set_count.set(value),
    ));

    Effect::new(move || {
        let visible = is_visible.get();
        animator.try_with_value(|a| a.set_active(visible));
    });

    // Cancel the pending frame before the count signal goes away.
    on_cleanup(move || {
        animator.try_with_value(|a| a.dispose());
    });

    view! {
        <div class="stat">
            <p class="stat-value">{move || format_percent(count.get())}</p>
            <p class="stat-label">{stat.label}</p>
        </div>
    }
}

// =============================================================================
// Timeless Web - Animated Counter Component
// =============================================================================
// Counts from zero to `end` the first time at least half of it is on screen.
// =============================================================================

use gloo_timers::callback::Interval;
use leptos::html::Div;
use leptos::prelude::*;

use crate::config::{COUNTER_DURATION_MS, VISIBILITY_THRESHOLD};
use crate::counter::{CounterAnimation, Trigger};
use crate::services::{VisibilityObserver, VisibilityReport};

type Ticker = StoredValue<Option<Interval>, LocalStorage>;

/// Statistic that counts up once when scrolled into view.
///
/// # Arguments
/// * `end` - Target value
/// * `suffix` - Text appended after the number (e.g. "+")
/// * `duration` - Full animation time in milliseconds
#[component]
pub fn AnimatedCounter(
    end: i64,
    #[prop(optional, into)] suffix: String,
    #[prop(default = COUNTER_DURATION_MS)] duration: u32,
) -> impl IntoView {
    let animation = StoredValue::new(CounterAnimation::new(end, duration));
    let (count, set_count) = signal(animation.with_value(|anim| anim.value()));

    let node_ref = NodeRef::<Div>::new();
    let observer: StoredValue<Option<VisibilityObserver>, LocalStorage> = StoredValue::new_local(None);
    let ticker: Ticker = StoredValue::new_local(None);

    let report = move |seen: VisibilityReport| {
        let trigger = animation
            .try_update_value(|anim| anim.on_visibility(seen.intersecting, seen.ratio))
            .unwrap_or(Trigger::Ignored);

        match trigger {
            Trigger::Ignored => {}
            Trigger::Settled => {
                set_count.set(animation.with_value(|anim| anim.value()));
                observer.try_update_value(|guard| guard.take());
            }
            Trigger::Start => {
                log::debug!("Counter to {} triggered", end);
                start_ticking(animation, set_count, ticker);
                // Fires once; later visibility changes are irrelevant
                observer.try_update_value(|guard| guard.take());
            }
        }
    };

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        if animation.with_value(|anim| anim.has_fired()) {
            return;
        }
        if observer.with_value(|guard| guard.is_some()) {
            return;
        }

        match VisibilityObserver::observe(&element, VISIBILITY_THRESHOLD, report) {
            Ok(guard) => observer.set_value(Some(guard)),
            Err(err) => {
                // Without an observer there is no trigger; run straight away
                log::warn!("Counter cannot observe visibility, starting now: {}", err);
                report(VisibilityReport {
                    intersecting: true,
                    ratio: 1.0,
                });
            }
        }
    });

    on_cleanup(move || {
        ticker.try_update_value(|interval| interval.take());
        observer.try_update_value(|guard| guard.take());
    });

    view! {
        <div node_ref=node_ref class="stat-value">
            {move || format!("{}{}", count.get(), suffix)}
        </div>
    }
}

/// Start the tick interval; it cancels itself once the target is reached.
fn start_ticking(
    animation: StoredValue<CounterAnimation>,
    set_count: WriteSignal<i64>,
    ticker: Ticker,
) {
    let tick_ms = animation.with_value(|anim| anim.tick_ms());

    let interval = Interval::new(tick_ms, move || {
        let running = animation
            .try_update_value(|anim| anim.tick())
            .unwrap_or(false);
        if let Some(value) = animation.try_with_value(|anim| anim.value()) {
            set_count.set(value);
        }

        if !running {
            ticker.try_update_value(|interval| interval.take());
            if let Some(end) = animation.try_with_value(|anim| anim.end()) {
                log::debug!("Counter reached {}", end);
            }
        }
    });

    ticker.set_value(Some(interval));
}

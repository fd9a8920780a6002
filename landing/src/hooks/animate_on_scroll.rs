//! Scroll-into-view signal backed by `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use countup::{Threshold, VisibilityLatch};
use leptos::html::Section;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observer plus the closure JS calls back into.
struct Observation {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

/// Attach the returned ref to a `<section>`; the signal turns `true` once the
/// section reaches `threshold` and stays `true`.
///
/// The observer disconnects as soon as the section is visible, and again when
/// the owning component is cleaned up. Browsers without `IntersectionObserver`
/// get the section revealed immediately.
pub fn use_animate_on_scroll(threshold: Threshold) -> (NodeRef<Section>, ReadSignal<bool>) {
    let node_ref = NodeRef::<Section>::new();
    let (is_visible, set_visible) = signal(false);
    let observation = StoredValue::new_local(None::<Observation>);

    Effect::new(move || {
        let Some(element) = node_ref.get() else {
            return;
        };
        let attached = observation.try_with_value(Option::is_some).unwrap_or(true);
        if attached || is_visible.get_untracked() {
            return;
        }

        match observe(&element, threshold, set_visible) {
            Ok(live) => observation.set_value(Some(live)),
            Err(err) => {
                tracing::warn!(error = ?err, "IntersectionObserver unavailable; revealing section");
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        observation.try_update_value(|slot| {
            if let Some(live) = slot.take() {
                live.observer.disconnect();
            }
        });
    });

    (node_ref, is_visible)
}

fn observe(
    element: &web_sys::HtmlElement,
    threshold: Threshold,
    set_visible: WriteSignal<bool>,
) -> Result<Observation, JsValue> {
    let latch = Rc::new(RefCell::new(VisibilityLatch::new(threshold)));

    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let ratio = entry.intersection_ratio();
                if latch.borrow_mut().observe(entry.is_intersecting(), ratio) {
                    tracing::debug!(ratio, "section scrolled into view");
                    set_visible.set(true);
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold.get()));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(Observation {
        observer,
        _callback: callback,
    })
}

//! DOM side of the reveal controller.
//!
//! Owns the `IntersectionObserver` subscription and translates its entries
//! into [`ViewportReveal::on_visibility`] calls, writing the resulting style
//! back to each element. The `Closure` stays alive for the subscription's
//! lifetime and is dropped together with the handle from the page effect
//! destructor.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::{ViewportReveal, HIDDEN_TRANSFORM, REVEAL_TRANSITION};

/// Ties an observed element back to its slot in the controller.
const INDEX_ATTR: &str = "data-reveal-index";

pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    /// Query `selector` once, hide every match and start observing it.
    ///
    /// An empty match still installs and simply never fires. Returns `None`
    /// only when the document is unavailable or the observer cannot be
    /// constructed.
    pub fn install(selector: &str, threshold: f64) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let nodes = document.query_selector_all(selector).ok()?;

        let mut targets: Vec<HtmlElement> = Vec::new();
        for i in 0..nodes.length() {
            let element = match nodes.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
                Some(element) => element,
                None => continue,
            };
            let _ = element.set_attribute(INDEX_ATTR, &targets.len().to_string());
            let style = element.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", HIDDEN_TRANSFORM);
            let _ = style.set_property("transition", REVEAL_TRANSITION);
            targets.push(element);
        }

        let state = Rc::new(RefCell::new(ViewportReveal::new(targets.len(), threshold)));
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = match entry.target().dyn_into::<HtmlElement>() {
                        Ok(target) => target,
                        Err(_) => continue,
                    };
                    let index = match target
                        .get_attribute(INDEX_ATTR)
                        .and_then(|raw| raw.parse::<usize>().ok())
                    {
                        Some(index) => index,
                        None => continue,
                    };
                    if state
                        .borrow_mut()
                        .on_visibility(index, entry.intersection_ratio())
                    {
                        let style = target.style();
                        let _ = style.set_property("opacity", "1");
                        let _ = style.set_property("transform", "none");
                        // Revealed elements never revert, so stop watching them.
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        for target in &targets {
            observer.observe(target);
        }
        log::info!("revealing {} elements on scroll", targets.len());

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    /// Drop every remaining subscription.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

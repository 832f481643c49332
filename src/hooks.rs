use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Shrinks the viewport so elements start animating a bit after they peek in.
const ROOT_MARGIN: &str = "-100px";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    in_view: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
        if visible {
            in_view.set(true);
            observer.disconnect();
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    observer.observe(element);
    Some((observer, callback))
}

/// True once `node` has scrolled into view. Never flips back.
///
/// Browsers without `IntersectionObserver` report the element as visible
/// right away so content is never left hidden.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observed = node.cast::<Element>().and_then(|element| {
                    let observed = observe_once(&element, in_view.clone());
                    if observed.is_none() {
                        in_view.set(true);
                    }
                    observed
                });

                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *in_view
}

/// CSS class pair used by the reveal animations in `landing.rs`.
pub fn reveal_class(in_view: bool) -> &'static str {
    if in_view {
        "reveal visible"
    } else {
        "reveal"
    }
}

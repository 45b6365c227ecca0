use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::functional::UseReducerDispatcher;
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;

/// One-shot visibility of an observed element. The only transition is
/// `Pending -> Revealed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// What the observer (or its absence) reported for an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Intersecting,
    Outside,
    /// No way to observe the element; treat it as seen.
    Unobservable,
}

impl RevealState {
    pub fn observe(self, visibility: Visibility) -> Self {
        match (self, visibility) {
            (RevealState::Pending, Visibility::Intersecting | Visibility::Unobservable) => {
                RevealState::Revealed
            }
            (state, _) => state,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RevealState::Pending => "reveal-pending",
            RevealState::Revealed => "reveal-shown",
        }
    }
}

impl Reducible for RevealState {
    type Action = Visibility;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.observe(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observer_supported() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false)
}

fn observe_once(
    node: &NodeRef,
    threshold: f64,
    dispatcher: UseReducerDispatcher<RevealState>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let Some(element) = node.cast::<Element>() else {
        debug!("Reveal target not mounted, showing content");
        dispatcher.dispatch(Visibility::Unobservable);
        return None;
    };
    if !observer_supported() {
        debug!("IntersectionObserver unavailable, showing content");
        dispatcher.dispatch(Visibility::Unobservable);
        return None;
    }

    let callback = {
        let dispatcher = dispatcher.clone();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if intersecting {
                dispatcher.dispatch(Visibility::Intersecting);
                // Seen once is enough.
                observer.disconnect();
            } else {
                dispatcher.dispatch(Visibility::Outside);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(err) => {
            warn!("Could not create IntersectionObserver: {:?}", err);
            dispatcher.dispatch(Visibility::Unobservable);
            None
        }
    }
}

/// Watches the returned node once and reports when it first comes into view.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, RevealState) {
    let node = use_node_ref();
    let state = use_reducer_eq(RevealState::default);

    {
        let node = node.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let observer = observe_once(&node, threshold, dispatcher);
                move || {
                    // The closure has to outlive the observer, drop them together.
                    if let Some((observer, callback)) = observer {
                        observer.disconnect();
                        drop(callback);
                    }
                }
            },
            (),
        );
    }

    (node, *state)
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Transition delay in milliseconds.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or(REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let (node, state) = use_reveal(props.threshold);

    html! {
        <div
            ref={node}
            class={classes!("reveal", state.class(), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay)}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Center,
    Left,
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub en: AttrValue,
    pub jp: AttrValue,
    #[prop_or_default]
    pub align: Align,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let align = match props.align {
        Align::Center => "section-heading--center",
        Align::Left => "section-heading--left",
    };

    html! {
        <ScrollReveal class={classes!("section-heading", align)}>
            <h2 class="section-heading__title">
                <span class="section-heading__bar"></span>
                { props.en.clone() }
            </h2>
            <span class="section-heading__sub">{ props.jp.clone() }</span>
        </ScrollReveal>
    }
}

pub const STYLES: &str = r#"
.reveal {
    transition-property: opacity, transform;
    transition-duration: 1000ms;
    transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1);
}
.reveal-pending {
    opacity: 0;
    transform: translateY(3rem);
}
.reveal-shown {
    opacity: 1;
    transform: translateY(0);
}
.section-heading {
    display: flex;
    flex-direction: column;
    margin-bottom: 5rem;
}
.section-heading--center { align-items: center; }
.section-heading--left { align-items: flex-start; }
.section-heading__title {
    font-family: "Cormorant Garamond", serif;
    font-size: clamp(3rem, 6vw, 4.5rem);
    line-height: 1;
    margin: 0 0 1rem;
}
.section-heading__bar {
    display: block;
    width: 3rem;
    height: 4px;
    background: #C5A059;
    margin-bottom: 1.5rem;
}
.section-heading__sub {
    font-size: 0.875rem;
    letter-spacing: 0.2em;
    color: #888888;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn pending_until_first_intersection() {
        let state = RevealState::default();
        assert_eq!(state.observe(Visibility::Outside), RevealState::Pending);
        assert_eq!(state.observe(Visibility::Intersecting), RevealState::Revealed);
    }

    #[test]
    fn revealed_is_monotonic() {
        let mut state = RevealState::Pending.observe(Visibility::Intersecting);
        for visibility in [
            Visibility::Outside,
            Visibility::Intersecting,
            Visibility::Outside,
            Visibility::Unobservable,
        ] {
            state = state.observe(visibility);
            assert_eq!(state, RevealState::Revealed);
            assert_eq!(state.class(), "reveal-shown");
        }
    }

    #[test]
    fn missing_observer_reveals() {
        assert_eq!(
            RevealState::Pending.observe(Visibility::Unobservable),
            RevealState::Revealed
        );
    }

    #[test]
    fn reducer_keeps_same_state_when_nothing_changes() {
        let revealed = Rc::new(RevealState::Revealed);
        let next = revealed.clone().reduce(Visibility::Outside);
        assert!(Rc::ptr_eq(&revealed, &next));

        let pending = Rc::new(RevealState::Pending);
        assert_eq!(*pending.reduce(Visibility::Intersecting), RevealState::Revealed);
    }

    #[tokio::test]
    async fn renders_hidden_with_delay() {
        let html = ServerRenderer::<ScrollReveal>::with_props(|| ScrollRevealProps {
            children: Children::default(),
            delay: 200,
            threshold: REVEAL_THRESHOLD,
            class: classes!("division-card"),
            onclick: None,
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("reveal-pending"));
        assert!(html.contains("division-card"));
        assert!(html.contains("transition-delay: 200ms;"));
    }
}

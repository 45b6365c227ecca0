use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Object, Reflect};
use web_sys::{HtmlScriptElement, Window};
use yew::prelude::*;

use crate::config::translate::{
    CALLBACK_NAME, CONTAINER_ID, INCLUDED_LANGUAGES, PAGE_LANGUAGE, SCRIPT_URL,
};

/// Identifies one mount of the nav bar in the callback registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountToken(u64);

/// Holds the callback the translate script should reach when it finishes
/// loading. Only the latest mount is live; releasing an older token does
/// nothing, and firing with nothing registered is a no-op.
pub struct CallbackRegistry<F> {
    next_token: u64,
    active: Option<(MountToken, F)>,
    script_claimed: bool,
}

impl<F> Default for CallbackRegistry<F> {
    fn default() -> Self {
        Self {
            next_token: 0,
            active: None,
            script_claimed: false,
        }
    }
}

impl<F: Clone> CallbackRegistry<F> {
    pub fn register(&mut self, callback: F) -> MountToken {
        self.next_token += 1;
        let token = MountToken(self.next_token);
        self.active = Some((token, callback));
        token
    }

    /// Returns whether `token` was the live registration.
    pub fn release(&mut self, token: MountToken) -> bool {
        match &self.active {
            Some((live, _)) if *live == token => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<F> {
        self.active.as_ref().map(|(_, callback)| callback.clone())
    }

    /// True exactly once per registry: the caller that gets `true` injects
    /// the script tag.
    pub fn claim_script(&mut self) -> bool {
        !std::mem::replace(&mut self.script_claimed, true)
    }

    /// Registers `callback` as the live mount and decides how it gets its
    /// widget.
    pub fn mount(&mut self, callback: F) -> (MountToken, MountStep) {
        let token = self.register(callback);
        let step = if self.claim_script() {
            MountStep::InjectScript
        } else {
            MountStep::BuildWidget
        };
        (token, step)
    }
}

/// What a nav mount has to do to get a widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountStep {
    /// First mount of the session: add the script, which calls back later.
    InjectScript,
    /// Script is already on the page and will not call back again.
    BuildWidget,
}

thread_local! {
    static REGISTRY: RefCell<CallbackRegistry<Rc<dyn Fn()>>> =
        RefCell::new(CallbackRegistry::default());
}

fn dispatch() {
    // Clone out first so the callback never runs under a registry borrow.
    let callback = REGISTRY.with(|registry| registry.borrow().current());
    match callback {
        Some(callback) => callback(),
        None => debug!("Translate script called back with no nav mounted, ignoring"),
    }
}

fn lookup(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    if target.is_undefined() || target.is_null() {
        return Err(JsValue::from_str(&format!("`{}` is not available yet", key)));
    }
    Reflect::get(target, &JsValue::from_str(key))
}

/// Builds the widget into the nav container. `Ok(false)` means there was
/// nothing to do: no container, a widget already in it, or no API yet.
fn construct_widget() -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let Some(container) = window
        .document()
        .and_then(|document| document.get_element_by_id(CONTAINER_ID))
    else {
        return Ok(false);
    };
    if container.child_element_count() > 0 {
        return Ok(false);
    }

    let google = lookup(&window, "google")?;
    let translate = lookup(&google, "translate")?;
    let Ok(constructor) = lookup(&translate, "TranslateElement")?.dyn_into::<Function>() else {
        return Ok(false);
    };
    let layout = lookup(&lookup(&constructor, "InlineLayout")?, "SIMPLE")?;

    let options = Object::new();
    Reflect::set(&options, &"pageLanguage".into(), &PAGE_LANGUAGE.into())?;
    Reflect::set(&options, &"includedLanguages".into(), &INCLUDED_LANGUAGES.into())?;
    Reflect::set(&options, &"layout".into(), &layout)?;
    Reflect::construct(&constructor, &Array::of2(&options, &CONTAINER_ID.into()))?;
    Ok(true)
}

fn mount_widget() {
    match construct_widget() {
        Ok(true) => info!("Translate widget mounted"),
        Ok(false) => debug!("Translate widget not mounted this time"),
        Err(err) => debug!("Translate widget unavailable: {:?}", err),
    }
}

fn inject_script(window: &Window) -> Result<(), JsValue> {
    let dispatcher = Closure::<dyn Fn()>::new(dispatch);
    Reflect::set(window, &JsValue::from_str(CALLBACK_NAME), dispatcher.as_ref())?;
    // Lives for the whole session; the script may call it at any time.
    dispatcher.forget();

    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_src(SCRIPT_URL);
    script.set_async(true);

    let onerror = Closure::<dyn Fn()>::new(|| {
        warn!("Translate script failed to load, widget stays empty");
    });
    script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&script)?;
    Ok(())
}

fn mount() -> MountToken {
    let (token, step) = REGISTRY.with(|registry| {
        registry
            .borrow_mut()
            .mount(Rc::new(mount_widget) as Rc<dyn Fn()>)
    });

    match step {
        MountStep::InjectScript => match web_sys::window() {
            Some(window) => {
                if let Err(err) = inject_script(&window) {
                    warn!("Could not inject translate script: {:?}", err);
                }
            }
            None => warn!("No window, skipping translate script"),
        },
        MountStep::BuildWidget => mount_widget(),
    }
    token
}

fn release(token: MountToken) {
    let released = REGISTRY.with(|registry| registry.borrow_mut().release(token));
    if !released {
        debug!("Translate token {:?} was already replaced", token);
    }
}

/// Loads the translate widget into the nav bar's container for as long as
/// the calling component is mounted.
#[hook]
pub fn use_translate_widget() {
    use_effect_with_deps(
        |_| {
            let token = mount();
            move || release(token)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Rc<dyn Fn()>) {
        let hits = Rc::new(Cell::new(0));
        let callback = {
            let hits = hits.clone();
            Rc::new(move || hits.set(hits.get() + 1)) as Rc<dyn Fn()>
        };
        (hits, callback)
    }

    #[test]
    fn script_is_claimed_once() {
        let mut registry = CallbackRegistry::<Rc<dyn Fn()>>::default();
        assert!(registry.claim_script());
        assert!(!registry.claim_script());
        assert!(!registry.claim_script());
    }

    #[test]
    fn remount_does_not_reclaim_script() {
        let mut registry = CallbackRegistry::default();
        let (_, first) = counter();
        let token = registry.register(first);
        assert!(registry.claim_script());
        registry.release(token);

        let (_, second) = counter();
        registry.register(second);
        assert!(!registry.claim_script());
    }

    #[test]
    fn only_first_mount_injects_script() {
        let mut registry = CallbackRegistry::default();
        let (_, first) = counter();
        let (token, step) = registry.mount(first);
        assert_eq!(step, MountStep::InjectScript);
        assert!(registry.release(token));

        let mut steps = Vec::new();
        for _ in 0..3 {
            let (_, callback) = counter();
            let (token, step) = registry.mount(callback);
            steps.push(step);
            registry.release(token);
        }
        assert_eq!(steps, [MountStep::BuildWidget; 3]);
    }

    #[test]
    fn overlapping_mounts_inject_once_and_keep_latest() {
        let mut registry = CallbackRegistry::default();
        let (old_hits, old) = counter();
        let (new_hits, new) = counter();
        let (stale, first) = registry.mount(old);
        let (_, second) = registry.mount(new);
        assert_eq!((first, second), (MountStep::InjectScript, MountStep::BuildWidget));

        assert!(!registry.release(stale));
        if let Some(callback) = registry.current() {
            callback();
        }
        assert_eq!((old_hits.get(), new_hits.get()), (0, 1));
    }

    #[test]
    fn released_token_fires_nothing() {
        let mut registry = CallbackRegistry::default();
        let (hits, callback) = counter();
        let token = registry.register(callback);
        assert!(registry.release(token));
        assert!(registry.current().is_none());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn stale_release_keeps_newer_mount() {
        let mut registry = CallbackRegistry::default();
        let (old_hits, old) = counter();
        let stale = registry.register(old);
        let (new_hits, new) = counter();
        let live = registry.register(new);
        assert_ne!(stale, live);

        assert!(!registry.release(stale));
        if let Some(callback) = registry.current() {
            callback();
        }
        assert_eq!(old_hits.get(), 0);
        assert_eq!(new_hits.get(), 1);
    }

    #[test]
    fn dispatch_without_mount_is_noop() {
        REGISTRY.with(|registry| {
            let current = registry.borrow().current();
            assert!(current.is_none());
        });
        dispatch();
    }
}

use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icons::{CloseIcon, MenuIcon};
use crate::components::translate::use_translate_widget;
use crate::config::translate::CONTAINER_ID;
use crate::config::NAV_SCROLL_THRESHOLD;
use crate::page::{use_current_page, use_page_nav, PageId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
    pub translate_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    /// Window scrolled to this vertical offset.
    Scrolled(f64),
    ToggleMenu,
    ToggleTranslate,
    /// A destination was picked from either menu.
    Select,
}

impl NavState {
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled(offset) => Self {
                scrolled: offset > NAV_SCROLL_THRESHOLD,
                ..self
            },
            NavAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            NavAction::ToggleTranslate => Self {
                translate_open: !self.translate_open,
                ..self
            },
            NavAction::Select => Self {
                menu_open: false,
                ..self
            },
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Everything visual about the nav bar, derived from page and state only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavStyle {
    /// Dark text on a white bar. The home hero is dark, so the bar stays
    /// clear there until the page scrolls.
    pub solid: bool,
    pub menu_open: bool,
    pub active: PageId,
}

impl NavStyle {
    pub fn compute(page: PageId, state: NavState) -> Self {
        Self {
            solid: state.scrolled || page != PageId::Home,
            menu_open: state.menu_open,
            active: page,
        }
    }

    pub fn bar_class(&self) -> Classes {
        classes!(
            "top-nav",
            if self.solid { "top-nav--solid" } else { "top-nav--clear" }
        )
    }

    pub fn item_class(&self, item: PageId) -> Classes {
        classes!(
            "nav-item",
            if self.solid { "nav-item--dark" } else { "nav-item--light" },
            (item == self.active).then_some("nav-item--active")
        )
    }

    /// The burger sits on the white overlay while the menu is open.
    pub fn toggle_dark(&self) -> bool {
        self.solid || self.menu_open
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let page = use_current_page();
    let on_navigate = use_page_nav();
    let state = use_reducer_eq(NavState::default);
    let style = NavStyle::compute(page, *state);

    {
        let dispatcher = state.dispatcher();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(offset) = web_sys::window().and_then(|window| window.scroll_y().ok()) {
                dispatcher.dispatch(NavAction::Scrolled(offset));
            }
        });
    }
    use_translate_widget();

    let select = {
        let dispatcher = state.dispatcher();
        Callback::from(move |target: PageId| {
            dispatcher.dispatch(NavAction::Select);
            on_navigate.emit(target);
        })
    };
    let toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(NavAction::ToggleMenu);
        })
    };
    let toggle_translate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleTranslate))
    };

    html! {
        <>
            <nav class={style.bar_class()}>
                <div class="nav-content">
                    <div
                        class={classes!("nav-logo", if style.solid { "nav-logo--dark" } else { "nav-logo--light" })}
                        onclick={select.reform(|_: MouseEvent| PageId::Home)}
                    >
                        {"FOMUS Creative Studio"}
                    </div>

                    <div class="nav-desktop">
                        { for PageId::ALL.into_iter().map(|item| html! {
                            <button
                                class={style.item_class(item)}
                                onclick={select.reform(move |_: MouseEvent| item)}
                            >
                                { item.nav_label() }
                                <span class="nav-item__underline"></span>
                            </button>
                        }) }
                        <div class="nav-translate">
                            <button
                                class={classes!("nav-item", if style.solid { "nav-item--dark" } else { "nav-item--light" })}
                                onclick={toggle_translate}
                            >
                                {"Translate"}
                            </button>
                            <div class={classes!("nav-translate__panel", state.translate_open.then_some("open"))}>
                                <div id={CONTAINER_ID}></div>
                            </div>
                        </div>
                    </div>

                    <button
                        class={classes!("burger-menu", if style.toggle_dark() { "burger-menu--dark" } else { "burger-menu--light" })}
                        onclick={toggle_menu}
                    >
                        {
                            if state.menu_open {
                                html! { <CloseIcon /> }
                            } else {
                                html! { <MenuIcon /> }
                            }
                        }
                    </button>
                </div>
            </nav>

            <div class={classes!("mobile-menu", state.menu_open.then_some("mobile-menu-open"))}>
                { for PageId::ALL.into_iter().enumerate().map(|(idx, item)| html! {
                    <button
                        class="mobile-menu__item"
                        style={format!("transition-delay: {}ms;", idx * 100)}
                        onclick={select.reform(move |_: MouseEvent| item)}
                    >
                        { item.nav_label() }
                    </button>
                }) }
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    transition: all 500ms;
                }
                .top-nav--clear {
                    background: transparent;
                    padding: 2rem 0;
                }
                .top-nav--solid {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    padding: 1rem 0;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-family: "Cormorant Garamond", serif;
                    font-size: 1.5rem;
                    font-weight: 700;
                    cursor: pointer;
                    z-index: 50;
                    transition: color 300ms;
                }
                .nav-logo--dark { color: #000000; }
                .nav-logo--light { color: #ffffff; }
                .nav-desktop {
                    display: none;
                    gap: 2.5rem;
                    align-items: center;
                }
                .nav-item {
                    position: relative;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    transition: color 300ms;
                }
                .nav-item--dark { color: #6b7280; }
                .nav-item--dark:hover, .nav-item--dark.nav-item--active { color: #000000; }
                .nav-item--light { color: rgba(255, 255, 255, 0.7); }
                .nav-item--light:hover, .nav-item--light.nav-item--active { color: #ffffff; }
                .nav-item--active { font-weight: 700; }
                .nav-item__underline {
                    position: absolute;
                    bottom: -0.5rem;
                    left: 0;
                    width: 0;
                    height: 2px;
                    background: currentColor;
                    transition: width 300ms;
                }
                .nav-item:hover .nav-item__underline { width: 100%; }
                .nav-translate { position: relative; }
                .nav-translate__panel {
                    display: none;
                    position: absolute;
                    right: 0;
                    margin-top: 0.5rem;
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    padding: 0.75rem;
                    font-size: 0.75rem;
                }
                .nav-translate__panel.open { display: block; }
                .burger-menu {
                    background: none;
                    border: none;
                    cursor: pointer;
                    z-index: 50;
                }
                .burger-menu--dark { color: #000000; }
                .burger-menu--light { color: #ffffff; }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    background: #ffffff;
                    z-index: 40;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    opacity: 0;
                    visibility: hidden;
                    pointer-events: none;
                    transition: all 500ms;
                }
                .mobile-menu.mobile-menu-open {
                    opacity: 1;
                    visibility: visible;
                    pointer-events: auto;
                }
                .mobile-menu__item {
                    background: none;
                    border: none;
                    font-family: "Cormorant Garamond", serif;
                    font-size: 1.875rem;
                    color: #000000;
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: all 500ms;
                }
                .mobile-menu-open .mobile-menu__item {
                    opacity: 1;
                    transform: translateY(0);
                }
                @media (min-width: 768px) {
                    .nav-desktop { display: flex; }
                    .burger-menu { display: none; }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn scroll_threshold_is_strict_and_reactive() {
        let state = NavState::default();
        assert!(!state.apply(NavAction::Scrolled(0.0)).scrolled);
        assert!(!state.apply(NavAction::Scrolled(50.0)).scrolled);
        let scrolled = state.apply(NavAction::Scrolled(50.5));
        assert!(scrolled.scrolled);
        assert!(!scrolled.apply(NavAction::Scrolled(12.0)).scrolled);
    }

    #[test]
    fn selecting_closes_open_menu() {
        let open = NavState::default().apply(NavAction::ToggleMenu);
        assert!(open.menu_open);
        let selected = open.apply(NavAction::Select);
        assert!(!selected.menu_open);
        assert_eq!(selected.apply(NavAction::Select), selected);
    }

    #[test]
    fn translate_panel_toggles() {
        let open = NavState::default().apply(NavAction::ToggleTranslate);
        assert!(open.translate_open);
        assert!(!open.apply(NavAction::ToggleTranslate).translate_open);
    }

    #[test]
    fn reducer_reuses_state_when_unchanged() {
        let state = Rc::new(NavState::default());
        let next = state.clone().reduce(NavAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn home_top_is_clear_until_scrolled() {
        let top = NavStyle::compute(PageId::Home, NavState::default());
        assert!(!top.solid);
        assert!(!top.toggle_dark());

        let scrolled = NavState::default().apply(NavAction::Scrolled(300.0));
        assert!(NavStyle::compute(PageId::Home, scrolled).solid);
    }

    #[test]
    fn other_pages_are_always_solid() {
        for page in PageId::ALL.into_iter().filter(|page| *page != PageId::Home) {
            assert!(NavStyle::compute(page, NavState::default()).solid);
        }
    }

    #[test]
    fn open_menu_darkens_toggle() {
        let open = NavState::default().apply(NavAction::ToggleMenu);
        let style = NavStyle::compute(PageId::Home, open);
        assert!(!style.solid);
        assert!(style.toggle_dark());
    }

    #[test]
    fn only_current_item_is_emphasised() {
        let style = NavStyle::compute(PageId::Kuku, NavState::default());
        for item in PageId::ALL {
            let class = style.item_class(item);
            assert_eq!(class.contains("nav-item--active"), item == PageId::Kuku);
            assert!(class.contains("nav-item--dark"));
        }
    }

    #[tokio::test]
    async fn renders_six_targets_in_each_menu() {
        let html = ServerRenderer::<Nav>::new()
            .hydratable(false)
            .render()
            .await;
        assert_eq!(html.matches(r#"class="mobile-menu__item""#).count(), 6);
        for page in PageId::ALL {
            assert!(html.contains(page.nav_label()));
        }
        assert!(html.contains(r#"id="google_translate_element""#));
        assert!(html.contains("top-nav--clear"));
    }
}

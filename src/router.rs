use log::info;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::content::LandingKind;
use crate::page::PageId;
use crate::pages::{contact::Contact, home::Home, kuku::Kuku, landing::LandingPage};

/// Body for one page, without the shared header and footer. Keyed by page
/// so a page change mounts a fresh body, even between landing pages that
/// share a component.
pub fn render(page: PageId) -> Html {
    let key = page.as_str();
    match LandingKind::try_from(page) {
        Ok(kind) => html! { <LandingPage key={key} kind={kind} /> },
        Err(PageId::Kuku) => html! { <Kuku key={key} /> },
        Err(PageId::Contact) => html! { <Contact key={key} /> },
        Err(_) => html! { <Home key={key} /> },
    }
}

/// Where the window goes when the page changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTarget {
    pub top: f64,
    pub smooth: bool,
}

pub const PAGE_CHANGE_SCROLL: ScrollTarget = ScrollTarget {
    top: 0.0,
    smooth: true,
};

impl ScrollTarget {
    pub fn options(self) -> ScrollToOptions {
        let options = ScrollToOptions::new();
        options.set_top(self.top);
        options.set_behavior(if self.smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        options
    }
}

#[derive(Properties, PartialEq)]
pub struct PageViewProps {
    pub page: PageId,
}

/// Shows `page` and smoothly scrolls the window back to the top whenever
/// the page changes.
#[function_component(PageView)]
pub fn page_view(props: &PageViewProps) -> Html {
    let page = props.page;

    use_effect_with_deps(
        move |page| {
            info!("Rendering {} page", page);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_scroll_to_options(&PAGE_CHANGE_SCROLL.options());
            }
            || ()
        },
        page,
    );

    html! {
        <main>
            { render(page) }
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_page(page: PageId) -> String {
        ServerRenderer::<PageView>::with_props(move || PageViewProps { page })
            .hydratable(false)
            .render()
            .await
    }

    #[test]
    fn every_page_body_has_its_own_key() {
        let keys: Vec<String> = PageId::ALL
            .into_iter()
            .map(|page| render(page).key().map(|key| key.to_string()).unwrap_or_default())
            .collect();
        let expected: Vec<String> = PageId::ALL.iter().map(|page| page.as_str().to_string()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn landing_pages_do_not_share_a_body() {
        let comic = render(PageId::Comic);
        let visual = render(PageId::Visual);
        let point = render(PageId::Point);
        assert_ne!(comic.key(), visual.key());
        assert_ne!(visual.key(), point.key());
        assert_ne!(comic.key(), point.key());
    }

    // `ScrollTarget::options` builds a JS object, so the DOM call itself only
    // runs in the browser; the target it is built from is checked here.
    #[test]
    fn page_change_scrolls_smoothly_to_top() {
        assert_eq!(PAGE_CHANGE_SCROLL.top, 0.0);
        assert!(PAGE_CHANGE_SCROLL.smooth);
    }

    #[tokio::test]
    async fn every_page_renders_exactly_one_body() {
        for page in PageId::ALL {
            let html = render_page(page).await;
            let marker = format!(r#"data-page="{}""#, page.as_str());
            assert_eq!(html.matches(&marker).count(), 1, "{}", page);
            assert_eq!(html.matches("data-page=").count(), 1, "{}", page);
        }
    }

    #[tokio::test]
    async fn comic_uses_landing_layout() {
        let html = render_page(PageId::Comic).await;
        assert!(html.contains("Story-to-Comic Studio"));
        assert!(html.contains(r#"class="landing""#));
    }

    #[tokio::test]
    async fn kuku_and_contact_are_bespoke() {
        assert!(render_page(PageId::Kuku).await.contains("KUKU Creative Partnerships"));
        assert!(render_page(PageId::Contact).await.contains("Send Message"));
    }
}

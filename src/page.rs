use std::fmt;
use std::str::FromStr;

use log::warn;
use thiserror::Error;
use yew::prelude::*;
use yew_router::prelude::*;

/// Every page the site can show. Navigation never produces anything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageId {
    #[default]
    Home,
    Comic,
    Visual,
    Point,
    Kuku,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page identifier `{0}`")]
pub struct UnknownPage(pub String);

impl PageId {
    pub const ALL: [PageId; 6] = [
        PageId::Home,
        PageId::Comic,
        PageId::Visual,
        PageId::Point,
        PageId::Kuku,
        PageId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Comic => "comic",
            PageId::Visual => "visual",
            PageId::Point => "point",
            PageId::Kuku => "kuku",
            PageId::Contact => "contact",
        }
    }

    /// Label shown in the navigation menus.
    pub fn nav_label(self) -> &'static str {
        match self {
            PageId::Home => "TOP",
            PageId::Comic => "Story-to-Comic",
            PageId::Visual => "Visual Branding",
            PageId::Point => "Point Program",
            PageId::Kuku => "KUKU Co-Creation",
            PageId::Contact => "Contact",
        }
    }

    /// Lenient entry point for loosely typed identifiers: anything outside
    /// the known set lands on the home page.
    pub fn resolve(id: &str) -> PageId {
        id.parse().unwrap_or_else(|err: UnknownPage| {
            warn!("{}, falling back to home", err);
            PageId::Home
        })
    }

    /// Page for a path the router did not recognize. Tolerates case and
    /// trailing slashes, anything else lands on the home page.
    pub fn for_path(path: &str) -> PageId {
        PageId::resolve(&path.trim_matches('/').to_ascii_lowercase())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/comic")]
    Comic,
    #[at("/visual")]
    Visual,
    #[at("/point")]
    Point,
    #[at("/kuku")]
    Kuku,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<PageId> for Route {
    fn from(page: PageId) -> Self {
        match page {
            PageId::Home => Route::Home,
            PageId::Comic => Route::Comic,
            PageId::Visual => Route::Visual,
            PageId::Point => Route::Point,
            PageId::Kuku => Route::Kuku,
            PageId::Contact => Route::Contact,
        }
    }
}

impl From<Route> for PageId {
    fn from(route: Route) -> Self {
        match route {
            Route::Home => PageId::Home,
            Route::Comic => PageId::Comic,
            Route::Visual => PageId::Visual,
            Route::Point => PageId::Point,
            Route::Kuku => PageId::Kuku,
            Route::Contact => PageId::Contact,
            Route::NotFound => {
                let path = web_sys::window()
                    .and_then(|window| window.location().pathname().ok())
                    .unwrap_or_default();
                PageId::for_path(&path)
            }
        }
    }
}

/// Page-change callback handed to every clickable element that leads
/// somewhere else on the site.
#[hook]
pub fn use_page_nav() -> Callback<PageId> {
    let navigator = use_navigator();
    Callback::from(move |page: PageId| match &navigator {
        Some(navigator) => navigator.push(&Route::from(page)),
        None => warn!("No router in scope, ignoring navigation to {}", page),
    })
}

/// Page the router currently shows, `Home` outside a router.
#[hook]
pub fn use_current_page() -> PageId {
    use_route::<Route>().map(PageId::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_identifier() {
        for page in PageId::ALL {
            assert_eq!(page.as_str().parse::<PageId>(), Ok(page));
        }
    }

    #[test]
    fn rejects_unknown_identifier() {
        assert_eq!(
            "pricing".parse::<PageId>(),
            Err(UnknownPage("pricing".to_string()))
        );
        assert!("Home".parse::<PageId>().is_err());
    }

    #[test]
    fn resolve_falls_back_to_home() {
        assert_eq!(PageId::resolve("kuku"), PageId::Kuku);
        assert_eq!(PageId::resolve(""), PageId::Home);
        assert_eq!(PageId::resolve("about"), PageId::Home);
    }

    #[test]
    fn default_page_is_home() {
        assert_eq!(PageId::default(), PageId::Home);
    }

    #[test]
    fn routes_map_one_to_one() {
        for page in PageId::ALL {
            assert_eq!(PageId::from(Route::from(page)), page);
        }
        assert_eq!(Route::from(PageId::Comic).to_path(), "/comic");
        assert_eq!(Route::from(PageId::Home).to_path(), "/");
    }

    #[test]
    fn unknown_path_resolves_home() {
        assert_eq!(PageId::for_path("/no-such-page"), PageId::Home);
        assert_eq!(PageId::for_path("/KUKU/"), PageId::Kuku);
        assert_eq!(PageId::for_path("/contact/"), PageId::Contact);
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/visual"), Some(Route::Visual));
    }
}

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod page;
mod router;
mod components {
    pub mod button;
    pub mod footer;
    pub mod icons;
    pub mod nav;
    pub mod reveal;
    pub mod translate;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod kuku;
    pub mod landing;
}

use components::{button, footer::Footer, nav::Nav, reveal};
use page::{PageId, Route};
use router::PageView;

fn switch(route: Route) -> Html {
    html! { <PageView page={PageId::from(route)} /> }
}

const BASE_STYLES: &str = r#"
html { scroll-behavior: smooth; }
body {
    margin: 0;
    font-family: "Noto Sans JP", sans-serif;
    color: #111111;
    background: #ffffff;
    -webkit-font-smoothing: antialiased;
}
::selection { background: #C5A059; color: #ffffff; }
@keyframes fadeInUp {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes kenBurns {
    from { transform: scale(1); }
    to { transform: scale(1.1); }
}
@keyframes pulse {
    50% { opacity: 0.5; }
}
"#;

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{ BASE_STYLES }{ reveal::STYLES }{ button::STYLES }</style>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        error!("error initializing log: {}", err);
    }

    info!("Starting FOMUS site");
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;

const SOCIAL: [&str; 3] = ["Twitter", "Instagram", "Note"];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="site-footer__content">
                <div>
                    <div class="site-footer__brand">{"FOMUS"}</div>
                    <p class="site-footer__tagline">{"Brand the Future with Story & Design."}</p>
                </div>
                <div class="site-footer__meta">
                    <div class="site-footer__social">
                        { for SOCIAL.iter().map(|name| html! {
                            <span class="site-footer__link">{ *name }</span>
                        }) }
                    </div>
                    <div class="site-footer__copyright">{"© FOMUS Creative Studio. All Rights Reserved."}</div>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #111111;
                    color: #ffffff;
                    padding: 5rem 0;
                    border-top: 1px solid #111827;
                }
                .site-footer__content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2rem;
                }
                .site-footer__brand {
                    font-family: "Cormorant Garamond", serif;
                    font-size: 2.25rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin-bottom: 1rem;
                }
                .site-footer__tagline { color: #6b7280; font-size: 0.875rem; }
                .site-footer__meta { text-align: right; }
                .site-footer__social {
                    display: flex;
                    justify-content: flex-end;
                    gap: 1.5rem;
                    margin-bottom: 1rem;
                    color: #9ca3af;
                }
                .site-footer__link { cursor: pointer; }
                .site-footer__link:hover { color: #ffffff; }
                .site-footer__copyright {
                    font-size: 0.75rem;
                    color: #4b5563;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                @media (min-width: 768px) {
                    .site-footer__content { flex-direction: row; }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn shows_brand_links_and_copyright() {
        let html = ServerRenderer::<Footer>::new().hydratable(false).render().await;
        assert!(html.contains(">FOMUS<"));
        assert!(html.contains("Brand the Future with Story"));
        assert_eq!(html.matches(r#"class="site-footer__link""#).count(), 3);
        assert!(html.contains("© FOMUS Creative Studio. All Rights Reserved."));
    }
}

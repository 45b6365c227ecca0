use log::error;
use yew::prelude::*;

use crate::components::button::{BackLink, CtaButton};
use crate::components::icons::ArrowRight;
use crate::components::reveal::ScrollReveal;
use crate::content::{LandingKind, LandingPageContent};
use crate::page::{use_page_nav, PageId};

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    pub kind: LandingKind,
}

/// Looks up the bundled record for `kind` and renders it, or a short
/// notice if the record did not load.
#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    match props.kind.content() {
        Ok(content) => html! { <LandingLayout page={props.kind.page()} content={content} /> },
        Err(err) => {
            error!("Content for {} page failed to load: {}", props.kind.page(), err);
            html! {
                <div class="landing-unavailable" data-page={props.kind.page().as_str()}>
                    <p>{"This page is being updated. Please check back soon."}</p>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingLayoutProps {
    pub page: PageId,
    pub content: &'static LandingPageContent,
}

#[function_component(LandingLayout)]
pub fn landing_layout(props: &LandingLayoutProps) -> Html {
    let on_navigate = use_page_nav();
    let content = props.content;
    let titles = &content.section_titles;
    let last_step = content.process.len().saturating_sub(1);

    html! {
        <div class="landing" data-page={props.page.as_str()}>
            <div class="landing-hero">
                <div
                    class="landing-hero__image"
                    style={format!("background-image: url('{}');", content.hero_image())}
                ></div>
                <div
                    class="landing-hero__accent"
                    style={format!("background: {};", content.accent_gradient())}
                ></div>

                <div class="landing-container landing-hero__content">
                    <BackLink light=true onclick={on_navigate.reform(|_: MouseEvent| PageId::Home)} />

                    {
                        if content.chips.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <div class="chips">
                                    { for content.chips.iter().map(|chip| html! {
                                        <span class="chip">{ chip }</span>
                                    }) }
                                </div>
                            }
                        }
                    }
                    <h1 class="landing-hero__title">{ &content.title }</h1>
                    <p class="landing-hero__subtitle">{ &content.subtitle }</p>
                </div>
            </div>

            <div class="landing-container landing-body">
                <ScrollReveal class={classes!("landing-block", "landing-intro")}>
                    <div class="landing-block__label">
                        <span class="block-label">{"Introduction"}</span>
                    </div>
                    <div class="landing-intro__text">{ &content.intro }</div>
                </ScrollReveal>

                <ScrollReveal class={classes!("landing-offerings")}>
                    <div class="landing-block">
                        <div class="landing-block__label">
                            <span class="block-label block-label--light">{ &titles.offerings }</span>
                        </div>
                        <div class="offerings-grid">
                            { for content.offerings.iter().map(|offering| html! {
                                <div class="offering">
                                    <h4 class="offering__title">{ &offering.title }</h4>
                                    <p class="offering__description">{ &offering.description }</p>
                                    {
                                        match &offering.image {
                                            Some(image) => html! {
                                                <div
                                                    class="offering__image"
                                                    style={format!("background-image: url('{}');", image)}
                                                ></div>
                                            },
                                            None => html! {},
                                        }
                                    }
                                </div>
                            }) }
                        </div>
                    </div>
                </ScrollReveal>

                {
                    if content.gallery.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <ScrollReveal class={classes!("landing-gallery")}>
                                <div class="rule-heading">
                                    <span class="rule-heading__label">{"Mood Board"}</span>
                                    <div class="rule-heading__line"></div>
                                </div>
                                <div class="gallery-grid">
                                    { for content.gallery.iter().map(|item| html! {
                                        <div
                                            class="gallery-tile"
                                            style={format!("background-image: url('{}');", item.image)}
                                        >
                                            <div class="gallery-tile__shade"></div>
                                            <p class="gallery-tile__caption">{ &item.caption }</p>
                                        </div>
                                    }) }
                                </div>
                            </ScrollReveal>
                        }
                    }
                }

                <div class="landing-block landing-rationale">
                    <div class="landing-block__label">
                        <span class="block-label">{ &titles.rationale }</span>
                    </div>
                    <div class="rationale-list">
                        { for content.rationale.iter().enumerate().map(|(idx, item)| html! {
                            <ScrollReveal class={classes!("rationale")}>
                                <span class="rationale__number">{ format!("{:02}", idx + 1) }</span>
                                <div>
                                    <h3 class="rationale__title">{ &item.title }</h3>
                                    <p class="rationale__description">{ &item.description }</p>
                                </div>
                            </ScrollReveal>
                        }) }
                    </div>
                </div>

                <ScrollReveal class={classes!("landing-block", "landing-process")}>
                    <div class="landing-block__label">
                        <span class="block-label">{ &titles.process }</span>
                    </div>
                    <div class="process-strip">
                        { for content.process.iter().enumerate().map(|(idx, step)| html! {
                            <>
                                <div class="process-step">{ step }</div>
                                {
                                    if idx < last_step {
                                        html! { <span class="process-arrow"><ArrowRight size={16} /></span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </>
                        }) }
                    </div>
                </ScrollReveal>

                <ScrollReveal class={classes!("landing-closing")}>
                    <p class="landing-closing__message">{ &content.closing_message }</p>
                    <CtaButton onclick={on_navigate.reform(|_: MouseEvent| PageId::Contact)}>
                        {"お問い合わせ"}
                    </CtaButton>
                </ScrollReveal>
            </div>

            <style>
                {r#"
                .landing {
                    background: #ffffff;
                    min-height: 100vh;
                }
                .landing-container {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .landing-hero {
                    position: relative;
                    padding: 10rem 0 6rem;
                    overflow: hidden;
                    color: #ffffff;
                }
                .landing-hero__image {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    filter: brightness(0.75);
                }
                .landing-hero__accent {
                    position: absolute;
                    inset: 0;
                }
                .landing-hero__content {
                    position: relative;
                    z-index: 10;
                }
                .landing-hero__title {
                    font-family: "Cormorant Garamond", serif;
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    line-height: 1.1;
                    margin: 1.5rem 0 1rem;
                }
                .landing-hero__subtitle {
                    font-size: clamp(1.25rem, 3vw, 1.875rem);
                    font-weight: 300;
                    white-space: pre-line;
                    color: rgba(255, 255, 255, 0.9);
                }
                .chips {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .chip {
                    padding: 0.25rem 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .landing-body { padding-top: 6rem; padding-bottom: 5rem; }
                .landing-block {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    margin-bottom: 8rem;
                }
                .block-label {
                    display: block;
                    width: fit-content;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    border-bottom: 2px solid #111111;
                    padding-bottom: 0.5rem;
                }
                .block-label--light {
                    color: rgba(255, 255, 255, 0.7);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.3);
                }
                .landing-intro__text {
                    font-size: 1.25rem;
                    line-height: 2;
                    font-weight: 300;
                    white-space: pre-line;
                    color: #1f2937;
                    border-left: 1px solid #e5e7eb;
                    padding-left: 2rem;
                }
                .landing-offerings {
                    margin-bottom: 8rem;
                    background: linear-gradient(to bottom right, #111111, #0f0d0b, #111111);
                    color: #ffffff;
                    padding: 3rem;
                    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.25);
                }
                .landing-offerings .landing-block { margin-bottom: 0; }
                .offerings-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }
                .offering__title {
                    font-family: "Cormorant Garamond", serif;
                    font-size: 1.5rem;
                    color: #C5A059;
                    margin: 0 0 0.75rem;
                }
                .offering__description {
                    font-size: 0.875rem;
                    color: #d1d5db;
                    line-height: 1.6;
                    white-space: pre-line;
                }
                .offering__image {
                    margin-top: 1rem;
                    height: 9rem;
                    background-size: cover;
                    background-position: center;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .landing-gallery { margin-bottom: 8rem; }
                .rule-heading {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .rule-heading__label {
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #C5A059;
                }
                .rule-heading__line {
                    flex: 1;
                    height: 1px;
                    background: #e5e7eb;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                .gallery-tile {
                    position: relative;
                    aspect-ratio: 4 / 5;
                    overflow: hidden;
                    background-color: #e5e7eb;
                    background-size: cover;
                    background-position: center;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .gallery-tile__shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.1), transparent);
                    opacity: 0;
                    transition: opacity 300ms;
                }
                .gallery-tile__caption {
                    position: absolute;
                    bottom: 0.5rem;
                    left: 0.5rem;
                    right: 0.5rem;
                    color: #ffffff;
                    font-size: 0.75rem;
                    opacity: 0;
                    transition: opacity 300ms;
                }
                .gallery-tile:hover .gallery-tile__shade,
                .gallery-tile:hover .gallery-tile__caption { opacity: 1; }
                .rationale-list {
                    display: flex;
                    flex-direction: column;
                    gap: 5rem;
                }
                .rationale { display: flex; gap: 2rem; }
                .rationale__number {
                    font-family: "Cormorant Garamond", serif;
                    font-size: 3.75rem;
                    color: #e5e7eb;
                    margin-top: -1rem;
                    transition: color 300ms;
                }
                .rationale:hover .rationale__number { color: #C5A059; }
                .rationale__title { font-size: 1.25rem; font-weight: 700; margin: 0 0 1rem; }
                .rationale__description { color: #4b5563; line-height: 1.6; white-space: pre-line; }
                .process-strip {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    align-items: center;
                    font-size: 0.875rem;
                }
                .process-step {
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    padding: 1rem 2rem;
                    min-width: 140px;
                    text-align: center;
                    font-weight: 500;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: all 300ms;
                }
                .process-step:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .process-arrow { color: #d1d5db; }
                .landing-closing {
                    text-align: center;
                    padding-top: 6rem;
                    border-top: 1px solid #f3f4f6;
                }
                .landing-closing__message {
                    font-family: "Cormorant Garamond", serif;
                    font-size: clamp(1.875rem, 4vw, 2.25rem);
                    line-height: 1.2;
                    white-space: pre-line;
                    margin-bottom: 3rem;
                }
                .landing-unavailable {
                    padding: 12rem 1.5rem 6rem;
                    text-align: center;
                    color: #4b5563;
                }
                @media (min-width: 768px) {
                    .landing-block { grid-template-columns: 1fr 3fr; }
                    .landing-offerings { padding: 5rem; }
                    .offerings-grid { grid-template-columns: repeat(2, 1fr); }
                    .gallery-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(kind: LandingKind) -> String {
        ServerRenderer::<LandingPage>::with_props(move || LandingPageProps { kind })
            .hydratable(false)
            .render()
            .await
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("`{}` missing from rendered page", needle))
    }

    #[tokio::test]
    async fn renders_title_and_back_control() {
        let html = render(LandingKind::Comic).await;
        assert!(html.contains("Story-to-Comic Studio"));
        assert!(html.contains("Back to TOP"));
        assert_eq!(html.matches(r#"data-page="comic""#).count(), 1);
    }

    #[tokio::test]
    async fn blocks_render_in_fixed_order() {
        let html = render(LandingKind::Comic).await;
        let order = [
            "Back to TOP",
            "Story-to-Comic Studio",
            "Introduction",
            "What We Create",
            "Mood Board",
            "Why FOMUS",
            ">Process<",
            "あなたの物語を、伝わる漫画に。",
        ];
        let positions: Vec<usize> = order.iter().map(|needle| position(&html, needle)).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", positions);
    }

    #[tokio::test]
    async fn gallery_tiles_match_record() {
        let comic = render(LandingKind::Comic).await;
        assert_eq!(comic.matches(r#"class="gallery-tile""#).count(), 4);

        let point = render(LandingKind::Point).await;
        assert_eq!(point.matches(r#"class="gallery-tile""#).count(), 0);
        assert!(!point.contains("Mood Board"));
    }

    #[tokio::test]
    async fn chips_only_when_present() {
        let comic = render(LandingKind::Comic).await;
        assert_eq!(comic.matches(r#"class="chip""#).count(), 3);

        let point = render(LandingKind::Point).await;
        assert!(!point.contains(r#"class="chips""#));
    }

    #[tokio::test]
    async fn process_steps_joined_by_arrows() {
        let comic = render(LandingKind::Comic).await;
        assert_eq!(comic.matches(r#"class="process-step""#).count(), 5);
        assert_eq!(comic.matches(r#"class="process-arrow""#).count(), 4);

        let point = render(LandingKind::Point).await;
        assert_eq!(point.matches(r#"class="process-step""#).count(), 3);
        assert_eq!(point.matches(r#"class="process-arrow""#).count(), 2);
    }

    #[tokio::test]
    async fn rationale_is_numbered() {
        let html = render(LandingKind::Visual).await;
        let first = position(&html, ">01<");
        let second = position(&html, ">02<");
        let third = position(&html, ">03<");
        assert!(first < second && second < third);
        assert!(!html.contains(">04<"));
    }

    #[tokio::test]
    async fn point_uses_its_own_headings() {
        let html = render(LandingKind::Point).await;
        assert!(html.contains("Membership Benefits"));
        assert!(html.contains("Program Concept"));
        assert!(html.contains("How it Works"));
        assert!(!html.contains("What We Create"));
    }
}

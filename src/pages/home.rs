use yew::prelude::*;

use crate::components::icons::{ArrowRight, PlayIcon};
use crate::components::reveal::{Align, ScrollReveal, SectionHeading};
use crate::page::{use_page_nav, PageId};

struct Division {
    target: PageId,
    title: &'static str,
    tagline: [&'static str; 2],
    summary: &'static str,
    image: &'static str,
    badge: Option<&'static str>,
}

const DIVISIONS: [Division; 3] = [
    Division {
        target: PageId::Comic,
        title: "Story-to-Comic Studio",
        tagline: ["どんな物語でも、", "漫画にする。"],
        summary: "人生、小説、企業の歩み…。ストーリーがあるものすべてを可視化。独自のAI×編集プロセス。",
        image: "https://images.unsplash.com/photo-1614726365345-03d3c631a31c?q=80&w=1000&auto=format&fit=crop",
        badge: None,
    },
    Division {
        target: PageId::Visual,
        title: "Visual Branding Studio",
        tagline: ["映像 × Web × デザイン。", "世界観まで統合。"],
        summary: "単品で終わらず「世界観」として統合する制作ライン。美意識×ストーリーを軸にデザイン。",
        image: "https://images.unsplash.com/photo-1497215728101-856f4ea42174?q=80&w=1000&auto=format&fit=crop",
        badge: None,
    },
    Division {
        target: PageId::Kuku,
        title: "KUKU Co-Creation",
        tagline: ["IPライセンス料 0円。", "物語をプロモーションに活用。"],
        summary: "KUKUは、FOMUSが展開する“拡張し続けるオープンIP”。ライセンス料0円で、企業・自治体のPRや観光映像に自由に活用できます。",
        image: "https://images.unsplash.com/photo-1634152962476-4b8a00e1915c?q=80&w=1000&auto=format&fit=crop",
        badge: Some("LICENCE FREE"),
    },
];

const STRENGTHS: [(&str, &str); 4] = [
    (
        "世界を歩いた“物語抽出力”",
        "工芸、文化、海外生活、旅、写真、アート。多様な背景を持つFOMUSだからこそ、“物語の本質”を深く理解し、表現に落とし込めます。",
    ),
    (
        "AI × クリエイティブディレクション",
        "AIは「効率化」ではなく「表現拡張」として活用。通常の制作会社が数週間〜数ヶ月かかる内容を、より短い期間で、美しく仕上げます。",
    ),
    (
        "単発制作ではなく“世界観”で統合",
        "映像、漫画、Web、資料をバラバラに作るのではなく、“ひとつの物語” を軸に統合して設計します。他社には出せない“統一された世界観”が宿ります。",
    ),
    (
        "KUKUという“完成した世界観”を無料活用",
        "IP開発コスト（数百万〜数千万）が丸ごと不要。既に存在するKUKUのキャラ・物語・音楽・デザインをそのまま活用できるのは、FOMUSだけの強みです。",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    let on_navigate = use_page_nav();

    html! {
        <div class="home" data-page={PageId::Home.as_str()}>
            <header class="home-hero">
                <div class="home-hero__image"></div>
                <div class="home-hero__shade"></div>

                <div class="home-hero__content">
                    <p class="home-hero__tagline">{"Brand the Future with Story & Design."}</p>
                    <h1 class="home-hero__title">{"物語から、"}<br/>{"ブランドを届ける。"}</h1>
                    <div class="home-hero__lead">
                        <p>
                            {"FOMUS Creative Studio は、ストーリー、デザイン、映像、そして世界観を統合し、"}
                            {"“深く届くブランド”を届けるクリエイティブスタジオです。"}
                        </p>
                        <p class="home-hero__lead-sub">
                            {"日本・アイルランド・ドバイなど世界を歩き、工芸・アート・物語制作を横断してきたFOMUSだからこそ、"}
                            {"静かで力強いクリエイティブを提供できます。"}
                        </p>
                    </div>
                    <button class="home-hero__cta" onclick={on_navigate.reform(|_: MouseEvent| PageId::Contact)}>
                        <span class="home-hero__cta-icon"><ArrowRight size={16} /></span>
                        <span>{"まずは、あなたの物語を聞かせてください"}</span>
                    </button>
                </div>

                <div class="home-hero__scroll">
                    <span>{"Scroll"}</span>
                    <div class="home-hero__scroll-line"></div>
                </div>
            </header>

            <section class="home-section">
                <div class="home-container">
                    <SectionHeading en="Our Divisions" jp="3つの事業領域" />
                    <div class="divisions">
                        { for DIVISIONS.iter().enumerate().map(|(idx, division)| {
                            let target = division.target;
                            html! {
                                <ScrollReveal delay={idx as u32 * 200} class={classes!(format!("divisions__slot-{}", idx + 1))}>
                                    <div class="division-card" onclick={on_navigate.reform(move |_: MouseEvent| target)}>
                                        <div class="division-card__media">
                                            <div
                                                class="division-card__image"
                                                style={format!("background-image: url('{}');", division.image)}
                                            ></div>
                                            {
                                                match division.badge {
                                                    Some(badge) => html! { <div class="division-card__badge">{ badge }</div> },
                                                    None => html! {},
                                                }
                                            }
                                            <div class="division-card__hover">
                                                <span class="division-card__arrow"><ArrowRight size={20} /></span>
                                                <p>{"View Details"}</p>
                                            </div>
                                            <div class="division-card__number">{ format!("{:02}", idx + 1) }</div>
                                        </div>
                                        <div class="division-card__body">
                                            <h3 class="division-card__title">{ division.title }</h3>
                                            <p class="division-card__tagline">
                                                { division.tagline[0] }<br/>{ division.tagline[1] }
                                            </p>
                                            <p class="division-card__summary">{ division.summary }</p>
                                        </div>
                                    </div>
                                </ScrollReveal>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section class="home-section home-section--light">
                <div class="home-container">
                    <SectionHeading en="Why FOMUS" jp="FOMUSが選ばれる理由" />
                    <div class="why-intro">
                        <p class="why-intro__quote">{"\"Structure of Strength\""}</p>
                        <p class="why-intro__text">
                            {"他のクリエイティブスタジオとは根本から違う"}<br/>{"“構造的な強み”があります。"}
                        </p>
                    </div>

                    <div class="why-list">
                        { for STRENGTHS.iter().enumerate().map(|(idx, (title, desc))| html! {
                            <ScrollReveal class={classes!("why-item", (idx % 2 == 1).then_some("why-item--reverse"))}>
                                <div class="why-item__number">{ format!("{:02}", idx + 1) }</div>
                                <div class="why-item__card">
                                    <h3>{ *title }</h3>
                                    <p>{ *desc }</p>
                                </div>
                            </ScrollReveal>
                        }) }

                        <ScrollReveal class={classes!("why-item", "why-item--center")}>
                            <div class="why-item__number why-item__number--faint">{"05"}</div>
                            <h3>{"海外発信に強い唯一のスタジオ"}</h3>
                            <p>
                                {"アイルランド、ドバイ、ジョージア、日本。世界複数拠点での事業経験があるため、“海外向けに刺さる”デザイン・映像・物語を理解しています。"}
                            </p>
                        </ScrollReveal>
                    </div>
                </div>
            </section>

            <section class="home-section">
                <div class="home-container">
                    <SectionHeading en="Works" jp="制作事例" />
                    <div class="works-grid">
                        <div class="work work--feature">
                            <div class="work__play"><PlayIcon size={24} /></div>
                            <div class="work__caption">
                                <p class="work__kind">{"Branding Movie"}</p>
                                <p class="work__name">{"Corporate Identity"}</p>
                            </div>
                        </div>
                        <div class="work work--tile"><p class="work__hover">{"Comic LP"}</p></div>
                        <div class="work work--tile"><p class="work__hover">{"Web Design"}</p></div>
                        <div class="work work--wide">
                            <div class="work__caption">
                                <p class="work__kind">{"KUKU Project"}</p>
                                <p class="work__name">{"Collaboration"}</p>
                            </div>
                        </div>
                    </div>
                    <p class="works-note">{"※ 実際の事例は順次追加します。"}</p>
                </div>
            </section>

            <section class="home-section home-section--bordered">
                <div class="home-container">
                    <SectionHeading en="About FOMUS" jp="スタジオについて" align={Align::Left} />
                    <div class="about">
                        <ScrollReveal class={classes!("about__portrait-slot")}>
                            <div class="about__portrait"></div>
                        </ScrollReveal>
                        <ScrollReveal delay={100} class={classes!("about__text")}>
                            <p class="about__role">{"FOMUS Founder / Creative Director"}</p>
                            <h3 class="about__name">{"Masu (Keisuke Masuo)"}</h3>
                            <p class="about__bio">
                                {"日本の伝統工芸“枡”の世界展開、物語IP「KUKU」の制作、映像・漫画・世界観制作を横断するクリエイター。"}
                                <br/>
                                {"世界を旅しながら、人・文化・風景から抽出した“物語”をクリエイティブとして形にすることを得意とする。"}
                            </p>
                        </ScrollReveal>
                    </div>
                </div>
            </section>

            <section class="home-section home-section--light home-section--bordered">
                <div class="home-container">
                    <SectionHeading en="FOMUS Point Program" jp="ポイントプログラム" align={Align::Left} />
                    <ScrollReveal
                        class={classes!("point-teaser")}
                        onclick={on_navigate.reform(|_: MouseEvent| PageId::Point)}
                    >
                        <div class="point-teaser__text">
                            <h3>{"Earn Points per Project"}</h3>
                            <p>
                                {"制作依頼ごとにFOMUSポイントを付与。"}<br/>
                                {"ポイントはFOMUSのプロダクト・イベント・プロジェクトで利用可能です。"}
                            </p>
                        </div>
                        <div class="point-teaser__badge">{"P"}</div>
                    </ScrollReveal>
                </div>
            </section>

            <style>
                {r#"
                .home-container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .home-hero {
                    position: relative;
                    height: 100vh;
                    min-height: 800px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #111111;
                    color: #ffffff;
                }
                .home-hero__image {
                    position: absolute;
                    inset: 0;
                    background-image: url('https://images.unsplash.com/photo-1550684848-fac1c5b4e853?q=80&w=2070&auto=format&fit=crop');
                    background-size: cover;
                    background-position: center;
                    opacity: 0.6;
                    animation: kenBurns 20s infinite alternate;
                }
                .home-hero__shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #111111, rgba(17, 17, 17, 0.4), transparent);
                }
                .home-hero__content {
                    position: relative;
                    z-index: 10;
                    max-width: 64rem;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    animation: fadeInUp 1s cubic-bezier(0.16, 1, 0.3, 1) forwards;
                }
                .home-hero__tagline {
                    font-family: "Cormorant Garamond", serif;
                    font-style: italic;
                    font-size: clamp(1.25rem, 3vw, 1.875rem);
                    letter-spacing: 0.1em;
                    color: #C5A059;
                    margin-bottom: 1.5rem;
                }
                .home-hero__title {
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 700;
                    line-height: 1;
                    margin: 0 0 3rem;
                }
                .home-hero__lead {
                    max-width: 42rem;
                    font-weight: 300;
                    line-height: 1.8;
                    margin-bottom: 4rem;
                }
                .home-hero__lead-sub {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .home-hero__cta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    background: transparent;
                    color: #ffffff;
                    cursor: pointer;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                }
                .home-hero__cta:hover {
                    border-color: #ffffff;
                    background: rgba(255, 255, 255, 0.1);
                }
                .home-hero__cta-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: #ffffff;
                    color: #000000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .home-hero__scroll {
                    position: absolute;
                    bottom: 3rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 10px;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    opacity: 0.5;
                }
                .home-hero__scroll-line {
                    width: 1px;
                    height: 3rem;
                    background: linear-gradient(to bottom, #ffffff, transparent);
                }
                .home-section {
                    padding: 8rem 0;
                    background: #ffffff;
                }
                .home-section--light { background: #F9F9F9; }
                .home-section--bordered { border-top: 1px solid #f3f4f6; }
                .divisions {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                .division-card { cursor: pointer; }
                .division-card__media {
                    position: relative;
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                    margin-bottom: 1.5rem;
                    background: #e5e7eb;
                }
                .division-card__image {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    transition: transform 700ms;
                }
                .division-card:hover .division-card__image { transform: scale(1.05); }
                .division-card__badge {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 20;
                    background: rgba(255, 255, 255, 0.9);
                    border: 1px solid #000000;
                    padding: 0.25rem 0.75rem;
                    font-size: 10px;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                }
                .division-card__hover {
                    position: absolute;
                    inset: 0;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: flex-end;
                    color: #ffffff;
                    background: linear-gradient(to bottom, transparent, rgba(0, 0, 0, 0.8));
                    opacity: 0;
                    transition: opacity 500ms;
                }
                .division-card:hover .division-card__hover { opacity: 1; }
                .division-card__number {
                    position: absolute;
                    top: -1rem;
                    left: -1rem;
                    font-family: "Cormorant Garamond", serif;
                    font-size: 6rem;
                    color: transparent;
                    -webkit-text-stroke: 1px #000000;
                    opacity: 0.2;
                    transition: all 500ms;
                }
                .division-card:hover .division-card__number { opacity: 1; color: #111111; }
                .division-card__body {
                    padding-left: 1rem;
                    border-left: 2px solid transparent;
                    transition: border-color 300ms;
                }
                .division-card:hover .division-card__body { border-color: #C5A059; }
                .division-card__title {
                    font-family: "Cormorant Garamond", serif;
                    font-size: 1.875rem;
                    margin: 0 0 0.5rem;
                }
                .division-card__tagline { font-weight: 700; font-size: 1.125rem; line-height: 1.25; }
                .division-card__summary { color: #6b7280; font-size: 0.875rem; line-height: 1.6; }
                .why-intro {
                    max-width: 56rem;
                    margin: 0 auto 5rem;
                    text-align: center;
                }
                .why-intro__quote {
                    font-family: "Cormorant Garamond", serif;
                    font-style: italic;
                    font-size: 1.5rem;
                    color: #9ca3af;
                }
                .why-intro__text { font-size: 1.125rem; font-weight: 500; color: #1f2937; }
                .why-list {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                }
                .why-item {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                }
                .why-item__number {
                    font-family: "Cormorant Garamond", serif;
                    font-size: 120px;
                    line-height: 1;
                    color: #e5e7eb;
                }
                .why-item__number--faint { font-size: 100px; color: #f3f4f6; }
                .why-item__card {
                    width: 100%;
                    background: rgba(255, 255, 255, 0.5);
                    padding: 1.5rem;
                    border-left: 4px solid #C5A059;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .why-item--center { text-align: center; gap: 1rem; }
                .works-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    grid-auto-rows: 1fr;
                    gap: 1rem;
                }
                .work {
                    position: relative;
                    overflow: hidden;
                    min-height: 10rem;
                    cursor: pointer;
                    background: #e5e7eb;
                }
                .work--feature { grid-column: span 2; grid-row: span 2; background: #1f2937; }
                .work--wide { grid-column: span 2; background: #111111; }
                .work__play {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                }
                .work__caption {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    color: #ffffff;
                }
                .work__kind { font-family: "Cormorant Garamond", serif; font-size: 0.875rem; color: #d1d5db; }
                .work__name { font-weight: 700; font-size: 1.125rem; }
                .work__hover {
                    position: absolute;
                    inset: 0;
                    margin: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-family: "Cormorant Garamond", serif;
                    font-style: italic;
                    color: #ffffff;
                    background: rgba(0, 0, 0, 0.5);
                    opacity: 0;
                    transition: opacity 300ms;
                }
                .work:hover .work__hover { opacity: 1; }
                .works-note {
                    margin-top: 1.5rem;
                    text-align: right;
                    font-size: 0.75rem;
                    color: #9ca3af;
                }
                .about {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                .about__portrait {
                    width: 10rem;
                    height: 10rem;
                    background: #e5e7eb;
                    filter: grayscale(1);
                    transition: all 500ms;
                }
                .about__portrait:hover { filter: none; transform: scale(1.05); }
                .about__role {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #C5A059;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .about__name { font-family: "Cormorant Garamond", serif; font-size: 1.875rem; }
                .about__bio { font-size: 0.875rem; color: #4b5563; line-height: 1.7; }
                .point-teaser {
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                    padding: 3rem;
                    background: #ffffff;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    cursor: pointer;
                }
                .point-teaser:hover { border-color: #C5A059; }
                .point-teaser__text { flex: 1; }
                .point-teaser__text h3 { font-family: "Cormorant Garamond", serif; font-size: 1.875rem; }
                .point-teaser__badge {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    border: 1px solid #111111;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-family: "Cormorant Garamond", serif;
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                @media (min-width: 768px) {
                    .divisions { grid-template-columns: repeat(3, 1fr); gap: 3rem; }
                    .divisions__slot-2 { margin-top: 4rem; }
                    .divisions__slot-3 { margin-top: 8rem; }
                    .why-item { flex-direction: row; gap: 4rem; }
                    .why-item--reverse { flex-direction: row-reverse; }
                    .why-item--center { flex-direction: column; }
                    .why-item__number { font-size: 200px; width: 50%; text-align: right; }
                    .why-item--reverse .why-item__number { text-align: left; }
                    .why-item__card { width: 50%; padding: 2rem; }
                    .works-grid { grid-template-columns: repeat(4, 1fr); height: 500px; }
                    .about { grid-template-columns: 1fr 2fr; }
                    .point-teaser { flex-direction: row; align-items: center; }
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

    async fn render() -> String {
        ServerRenderer::<Home>::new().hydratable(false).render().await
    }

    #[test]
    fn divisions_lead_to_landing_pages() {
        let targets: Vec<PageId> = DIVISIONS.iter().map(|d| d.target).collect();
        assert_eq!(targets, [PageId::Comic, PageId::Visual, PageId::Kuku]);
        assert_eq!(DIVISIONS[0].title, "Story-to-Comic Studio");
    }

    #[tokio::test]
    async fn renders_three_staggered_division_cards() {
        let html = render().await;
        assert_eq!(html.matches(r#"class="division-card""#).count(), 3);
        assert!(html.contains("transition-delay: 0ms;"));
        assert!(html.contains("transition-delay: 200ms;"));
        assert!(html.contains("transition-delay: 400ms;"));
        assert!(html.contains("LICENCE FREE"));
    }

    #[tokio::test]
    async fn sections_in_order() {
        let html = render().await;
        let order = [
            "Brand the Future with Story",
            "Our Divisions",
            "Why FOMUS",
            ">Works<",
            "About FOMUS",
            "FOMUS Point Program",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", positions);
    }

    #[tokio::test]
    async fn alternates_strength_layout() {
        let html = render().await;
        assert_eq!(html.matches("why-item--reverse\"").count(), 2);
        assert!(html.contains(">05<"));
    }
}

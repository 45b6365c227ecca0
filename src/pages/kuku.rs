use yew::prelude::*;

use crate::components::button::{BackLink, CtaButton, Variant};
use crate::components::icons::ArrowRight;
use crate::components::reveal::ScrollReveal;
use crate::page::{use_page_nav, PageId};

struct Feature {
    title: &'static str,
    desc: &'static str,
    examples: &'static [&'static str],
}

const FEATURES: [Feature; 2] = [
    Feature {
        title: "拡張し続けるストーリー体系",
        desc: "KUKUは「固定化された完結世界」ではなく、プロジェクトごとに新しい解釈や表現が自然に広がるよう“拡張性”を持たせて設計。",
        examples: &[
            "自治体の森＝KUKU世界の「樹木の里」と接続",
            "観光ルート＝キャラの冒険ルート化",
            "商品の誕生背景＝KUKUの精霊文化と融合",
            "子ども向け教育＝物語キャラの案内役化",
        ],
    },
    Feature {
        title: "完全オープンIP（ライセンス料 0円）",
        desc: "商用利用・動画利用・イベント利用、すべて無料。制限は最小限。ブランド使用・自治体PR・国際展示会にも活用可能。",
        examples: &[],
    },
];

const USE_CASES: [(&str, &str); 6] = [
    ("観光プロモーション", "動画 / 漫画 / プロモーションストーリー（例：KUKUのキャラが街を旅する観光動画）"),
    ("自治体・地域創生", "文化財や名所の「物語化」（例：“桝形商店街 × KUKU”のまち歩き動画）"),
    ("教育・学習教材", "SDGs、環境教育、歴史教材をKUKUで再構築"),
    ("企業ブランドPR", "製品・事業の誕生ストーリーをキャラと共に表現／展示会ブース映像／LP／短編アニメ"),
    ("商品・コラボ", "コーヒー、雑貨、文具、クラフト、アパレル（ロイヤリティ0）"),
    ("海外向け発信", "英語圏／中東／アジア向けPRに相性抜群（非日本的ファンタジー × 日本的情緒のハイブリッド世界観）"),
];

const VALUE_POINTS: [(&str, &str); 5] = [
    ("一気通貫：KUKUの世界で全部作れる", "漫画、MV、観光映像、LP、キャラクターボイス、音楽…すべてFOMUS Studio内で制作。世界観を統一。"),
    ("圧倒的スピード：AI × クリエイティブディレクション", "従来3〜6ヶ月かかる企画もKUKUなら数週間で実装可能。"),
    ("世界基準のビジュアル", "アニメ・ゲーム文脈とも違う“和 × 新世界観”が海外イベントで刺さる。"),
    ("ロイヤリティが発生しない", "キャラクター使用料ゼロ。予算制約のある自治体・中小企業でも導入しやすい。"),
    ("まっすーが全ディレクション", "IP・映像・工芸を展開するFOMUS代表まっすーが企画段階から直でディレクション。安心感と精度を担保。"),
];

const PACKAGES: [(&str, &str); 5] = [
    ("A. KUKU Sightseeing Movie", "街歩き・観光・イベントの物語動画（例：商店街×KUKU／国際PR向け）"),
    ("B. KUKU Brand Story", "企業・商品・サービスのストーリー動画／漫画"),
    ("C. KUKU Education Pack", "教育・教材用のストーリーコンテンツ"),
    ("D. KUKU Collaboration Goods", "コラボ商品・ギフトパッケージ向けデザイン"),
    ("E. KUKU Exhibition Pack", "国際展示会向け映像・LP・アニメーション"),
];

const FLOW: [&str; 6] = [
    "打合せ",
    "企画ストーリー化",
    "絵コンテ・設定統合",
    "AI生成＋クリエイティブ調整",
    "映像／漫画／LP制作",
    "納品・活用支援",
];

const FAQ: [(&str, &str); 3] = [
    ("自治体予算内で可能？", "可能です。ロイヤリティ0なので企画費に集中できます。"),
    ("映像と漫画とLPをまとめて依頼可能？", "はい。世界観統一で制作できます。"),
    ("展示会やSNS用に短尺動画も作れる？", "可能です。（9:16, 16:9 どちらも対応）"),
];

const HIGHLIGHTS: [&str; 5] = [
    "KUKU＝拡張可能オープンIP",
    "企業にとってリスクゼロ",
    "制作スピードが圧倒的",
    "世界観をFOMUSが担保",
    "観光／自治体／企業／教育すべて対応可能",
];

const VISUAL_HIGHLIGHTS: [(&str, &str); 4] = [
    ("https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=800&auto=format&fit=crop", "Cinematic frames"),
    ("https://images.unsplash.com/photo-1485846234645-a62644f84728?q=80&w=800&auto=format&fit=crop", "Worldbuilding art"),
    ("https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=800&auto=format&fit=crop", "Color & mood"),
    ("https://images.unsplash.com/photo-1478720568477-152d9b164e26?q=80&w=800&auto=format&fit=crop", "Character in world"),
];

const CONSULT_LABEL: &str = "KUKU × Creative Studio に相談する";

#[derive(Properties, PartialEq)]
struct SectionLabelProps {
    label: AttrValue,
}

#[function_component(SectionLabel)]
fn section_label(props: &SectionLabelProps) -> Html {
    html! {
        <div class="kuku-label">
            <span class="kuku-label__text">{ props.label.clone() }</span>
            <div class="kuku-label__rule"></div>
        </div>
    }
}

#[function_component(Kuku)]
pub fn kuku() -> Html {
    let on_navigate = use_page_nav();
    let to_contact = on_navigate.reform(|_: MouseEvent| PageId::Contact);
    let last_step = FLOW.len() - 1;

    html! {
        <div class="kuku" data-page={PageId::Kuku.as_str()}>
            <div class="kuku-hero">
                <div class="kuku-hero__image"></div>
                <div class="kuku-hero__glow"></div>

                <div class="kuku-container kuku-hero__content">
                    <BackLink light=true onclick={on_navigate.reform(|_: MouseEvent| PageId::Home)} />
                    <div class="kuku-hero__badge">
                        <span class="kuku-hero__pulse"></span>
                        {"KUKU Creative Partnerships"}
                    </div>
                    <h1 class="kuku-hero__title">
                        {"オープンIP「KUKU」を、"}<br/>{"あなたのプロジェクトの物語に"}
                    </h1>
                </div>
            </div>

            <div class="kuku-container kuku-body">
                <ScrollReveal class={classes!("kuku-intro")}>
                    <h3>{"KUKU = 拡張し続けるオープンIP"}</h3>
                    <p>
                        {"KUKUは、FOMUSが世界へ展開する “拡張し続けるオープンIP”。ストーリー・キャラクター・音楽・美術設定など、あらゆる表現が自由に拡張・再構築できる物語世界です。"}
                        <br/>
                        {"ライセンス料は0円。追加契約なしで、企業・自治体のPR、観光、イベント、商品コラボに誰でも活用できます。"}
                        <br/>
                        {"FOMUS Creative Studioは、このKUKU世界の表現・制作・ストーリーデザインを担い、企業・自治体のプロジェクトを“物語として立ち上げるチーム”です。"}
                    </p>
                </ScrollReveal>

                <div class="kuku-pitch">
                    <div class="kuku-pitch__text">
                        <span class="kuku-pitch__tag">{"HERO"}</span>
                        <h2>{"KUKU × Creative Studio"}</h2>
                        <p>
                            {"— 物語が動けば、人が動く。ブランドも、地域も、事業も。"}
                            <br/>
                            {"KUKUは“拡張し続ける物語世界”。あなたのプロジェクトを、KUKUのキャラクターたちと共に、世界へ響く物語へと再構築します。"}
                            <br/>
                            {"ライセンス料 0円。動画・漫画・キャンペーン・キャラクター活用まで一気通貫。"}
                        </p>
                        <CtaButton onclick={to_contact.clone()}>{ CONSULT_LABEL }</CtaButton>
                    </div>
                    <div class="kuku-pitch__panel">
                        <p class="kuku-pitch__motto">{"— オープンIP「KUKU」を、あなたのプロジェクトの物語に —"}</p>
                        <p class="kuku-pitch__detail">
                            {"世界観・キャラクター・音楽・美術設定まで揃った“拡張可能なIP”を、追加契約なしで活用できます。観光動画、自治体PR、展示会、ブランドストーリー、商品コラボまで一気通貫。"}
                        </p>
                        <div class="kuku-pitch__image"></div>
                    </div>
                </div>

                <ScrollReveal class={classes!("kuku-section")}>
                    <SectionLabel label="01｜KUKUとは？（再構築版）" />
                    <p class="kuku-lead">
                        {"KUKUは、FOMUSが長年描き続けてきた「自然・心・再生」をテーマにした物語世界。特徴は2つ："}
                    </p>
                    <div class="kuku-grid kuku-grid--two">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="kuku-feature">
                                <h3>{ feature.title }</h3>
                                <p>{ feature.desc }</p>
                                {
                                    if feature.examples.is_empty() {
                                        html! {}
                                    } else {
                                        html! {
                                            <ul>
                                                { for feature.examples.iter().map(|example| html! {
                                                    <li>{ format!("・{}", example) }</li>
                                                }) }
                                            </ul>
                                        }
                                    }
                                }
                            </div>
                        }) }
                    </div>
                </ScrollReveal>

                <ScrollReveal class={classes!("kuku-section")}>
                    <SectionLabel label="02｜活用できる領域（実例ベース）" />
                    <div class="kuku-grid kuku-grid--three">
                        { for USE_CASES.iter().enumerate().map(|(idx, (title, desc))| html! {
                            <div class="kuku-case">
                                <p class="kuku-case__number">{ format!("Case {:02}", idx + 1) }</p>
                                <h4>{ *title }</h4>
                                <p>{ *desc }</p>
                            </div>
                        }) }
                    </div>
                </ScrollReveal>

                <ScrollReveal class={classes!("kuku-section")}>
                    <SectionLabel label="03｜FOMUS Creative Studioがつくる価値" />
                    <div class="kuku-values">
                        { for VALUE_POINTS.iter().enumerate().map(|(idx, (title, desc))| html! {
                            <div class="kuku-value">
                                <div class="kuku-value__number">{ format!("{:02}", idx + 1) }</div>
                                <div>
                                    <h4>{ *title }</h4>
                                    <p>{ *desc }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </ScrollReveal>

                <ScrollReveal class={classes!("kuku-section")}>
                    <SectionLabel label="04｜制作パッケージ" />
                    <div class="kuku-grid kuku-grid--two">
                        { for PACKAGES.iter().map(|(title, desc)| html! {
                            <div class="kuku-package">
                                <h4>{ *title }</h4>
                                <p>{ *desc }</p>
                            </div>
                        }) }
                    </div>
                    <p class="kuku-note">{"※ 価格はすべて見積もり式。プロジェクト規模に合わせて柔軟にカスタムします。"}</p>
                </ScrollReveal>

                <ScrollReveal class={classes!("kuku-section")}>
                    <SectionLabel label="05｜制作フロー" />
                    <div class="kuku-flow">
                        { for FLOW.iter().enumerate().map(|(idx, step)| html! {
                            <>
                                <div class="kuku-flow__step">{ *step }</div>
                                {
                                    if idx < last_step {
                                        html! { <span class="kuku-flow__arrow"><ArrowRight size={16} /></span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </>
                        }) }
                    </div>
                </ScrollReveal>

                <ScrollReveal class={classes!("kuku-section")}>
                    <SectionLabel label="06｜FAQ" />
                    <div class="kuku-faq">
                        { for FAQ.iter().map(|(question, answer)| html! {
                            <div class="kuku-faq__item">
                                <p class="kuku-faq__q">{ format!("Q. {}", question) }</p>
                                <p class="kuku-faq__a">{ format!("A. {}", answer) }</p>
                            </div>
                        }) }
                    </div>
                </ScrollReveal>

                <ScrollReveal class={classes!("kuku-section")}>
                    <div class="kuku-highlights">
                        <h3>{"あなたの地域・ブランド・事業を “国境を越える物語”へ。"}</h3>
                        <p>{"KUKU＝拡張可能オープンIP。ロイヤリティ0で、制作スピードと世界観の統一をFOMUSが担保します。"}</p>
                        <div class="kuku-highlights__tags">
                            { for HIGHLIGHTS.iter().map(|tag| html! {
                                <span class="kuku-highlights__tag">{ *tag }</span>
                            }) }
                        </div>
                        <CtaButton variant={Variant::Outline} onclick={to_contact}>{ CONSULT_LABEL }</CtaButton>
                    </div>
                </ScrollReveal>

                <ScrollReveal class={classes!("kuku-section")}>
                    <SectionLabel label="Visual Highlights" />
                    <div class="kuku-visuals">
                        { for VISUAL_HIGHLIGHTS.iter().map(|(image, caption)| html! {
                            <div class="kuku-visual">
                                <div class="kuku-visual__image" style={format!("background-image: url('{}');", image)}></div>
                                <div class="kuku-visual__shade"></div>
                                <p class="kuku-visual__caption">{ *caption }</p>
                            </div>
                        }) }
                    </div>
                </ScrollReveal>
            </div>

            <style>
                {r#"
                .kuku { background: #ffffff; min-height: 100vh; }
                .kuku-container {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    position: relative;
                }
                .kuku-hero {
                    position: relative;
                    overflow: hidden;
                    padding: 10rem 0 8rem;
                    color: #ffffff;
                    background: linear-gradient(to bottom right, #111111, #1d1a16, #111111);
                }
                .kuku-hero__image {
                    position: absolute;
                    inset: 0;
                    background-image: url('https://images.unsplash.com/photo-1489515217757-5fd1be406fef?q=80&w=2000&auto=format&fit=crop');
                    background-size: cover;
                    background-position: center;
                    opacity: 0.6;
                }
                .kuku-hero__glow {
                    position: absolute;
                    inset: 0;
                    background:
                        radial-gradient(circle at 20% 20%, rgba(255, 255, 255, 0.08), transparent 30%),
                        radial-gradient(circle at 80% 0%, rgba(197, 160, 89, 0.15), transparent 25%);
                }
                .kuku-hero__content { z-index: 10; }
                .kuku-hero__badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.5rem 1rem;
                    margin-bottom: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .kuku-hero__pulse {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #C5A059;
                    animation: pulse 2s infinite;
                }
                .kuku-hero__title {
                    font-family: "Cormorant Garamond", serif;
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    line-height: 1.2;
                    margin: 0;
                }
                .kuku-body { padding-top: 4rem; padding-bottom: 5rem; }
                .kuku-intro {
                    margin-bottom: 4rem;
                    padding: 2.5rem;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .kuku-intro h3 { font-family: "Cormorant Garamond", serif; font-size: 1.5rem; }
                .kuku-intro p { color: #374151; line-height: 1.8; }
                .kuku-pitch {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                    margin-bottom: 5rem;
                }
                .kuku-pitch__tag {
                    display: block;
                    width: fit-content;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    border-bottom: 2px solid #111111;
                    padding-bottom: 0.5rem;
                }
                .kuku-pitch__text h2 {
                    font-family: "Cormorant Garamond", serif;
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    margin: 1.5rem 0;
                }
                .kuku-pitch__text p { color: #374151; line-height: 1.8; margin-bottom: 1.5rem; }
                .kuku-pitch__panel {
                    padding: 2rem;
                    color: #ffffff;
                    background: linear-gradient(to bottom right, #047857, #111111, #064e3b);
                    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.25);
                }
                .kuku-pitch__motto { font-family: "Cormorant Garamond", serif; font-size: 1.5rem; }
                .kuku-pitch__detail { font-size: 0.875rem; color: #e5e7eb; line-height: 1.7; }
                .kuku-pitch__image {
                    margin-top: 1.5rem;
                    height: 10rem;
                    background-image: url('https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1600&auto=format&fit=crop');
                    background-size: cover;
                    background-position: center;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .kuku-section { margin-bottom: 5rem; }
                .kuku-label {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .kuku-label__text {
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #C5A059;
                }
                .kuku-label__rule { flex: 1; height: 1px; background: #e5e7eb; }
                .kuku-lead { font-size: 1.125rem; font-weight: 500; color: #1f2937; margin-bottom: 1.5rem; }
                .kuku-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
                .kuku-feature, .kuku-case, .kuku-package {
                    border: 1px solid #e5e7eb;
                    padding: 1.5rem;
                    background: #ffffff;
                    transition: all 300ms;
                }
                .kuku-feature:hover { box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
                .kuku-feature p, .kuku-feature ul { color: #4b5563; line-height: 1.7; }
                .kuku-feature ul { list-style: none; padding: 0; font-size: 0.875rem; }
                .kuku-case:hover { transform: translateY(-4px); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
                .kuku-case__number { font-size: 0.875rem; color: #9ca3af; }
                .kuku-case p, .kuku-package p, .kuku-value p { font-size: 0.875rem; color: #4b5563; line-height: 1.7; }
                .kuku-values { display: flex; flex-direction: column; gap: 2rem; }
                .kuku-value { display: flex; gap: 1rem; }
                .kuku-value__number {
                    font-family: "Cormorant Garamond", serif;
                    font-size: 1.875rem;
                    color: #C5A059;
                }
                .kuku-note { font-size: 0.75rem; color: #9ca3af; margin-top: 1rem; }
                .kuku-flow {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.875rem;
                }
                .kuku-flow__step {
                    min-width: 140px;
                    padding: 1rem 2rem;
                    text-align: center;
                    font-weight: 500;
                    border: 1px solid #e5e7eb;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: all 300ms;
                }
                .kuku-flow__step:hover { transform: translateY(-4px); box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
                .kuku-flow__arrow { color: #d1d5db; }
                .kuku-faq { display: flex; flex-direction: column; gap: 1.5rem; }
                .kuku-faq__item { border-bottom: 1px solid #e5e7eb; padding-bottom: 1rem; }
                .kuku-faq__q { font-size: 0.875rem; font-weight: 700; color: #111111; }
                .kuku-faq__a { font-size: 0.875rem; color: #4b5563; line-height: 1.7; }
                .kuku-highlights {
                    background: #111111;
                    color: #ffffff;
                    padding: 2.5rem;
                }
                .kuku-highlights h3 { font-family: "Cormorant Garamond", serif; font-size: 1.875rem; }
                .kuku-highlights p { font-size: 0.875rem; color: #e5e7eb; line-height: 1.7; }
                .kuku-highlights__tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                    font-size: 0.75rem;
                    color: #d1d5db;
                }
                .kuku-highlights__tag {
                    padding: 0.25rem 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                }
                .kuku-visuals { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
                .kuku-visual {
                    position: relative;
                    aspect-ratio: 4 / 5;
                    overflow: hidden;
                    background: #e5e7eb;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .kuku-visual__image {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                }
                .kuku-visual__shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.1), transparent);
                    opacity: 0;
                    transition: opacity 300ms;
                }
                .kuku-visual__caption {
                    position: absolute;
                    bottom: 0.5rem;
                    left: 0.5rem;
                    right: 0.5rem;
                    margin: 0;
                    color: #ffffff;
                    font-size: 0.75rem;
                    opacity: 0;
                    transition: opacity 300ms;
                }
                .kuku-visual:hover .kuku-visual__shade,
                .kuku-visual:hover .kuku-visual__caption { opacity: 1; }
                @media (min-width: 768px) {
                    .kuku-pitch { grid-template-columns: 5fr 7fr; }
                    .kuku-pitch__panel { padding: 3rem; }
                    .kuku-grid--two { grid-template-columns: repeat(2, 1fr); }
                    .kuku-grid--three { grid-template-columns: repeat(3, 1fr); }
                    .kuku-visuals { grid-template-columns: repeat(4, 1fr); }
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
        ServerRenderer::<Kuku>::new().hydratable(false).render().await
    }

    #[tokio::test]
    async fn numbered_sections_in_order() {
        let html = render().await;
        let labels = ["01｜", "02｜", "03｜", "04｜", "05｜", "06｜", "Visual Highlights"];
        let positions: Vec<usize> = labels
            .iter()
            .map(|label| html.find(label).unwrap_or_else(|| panic!("missing {}", label)))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", positions);
    }

    #[tokio::test]
    async fn lists_render_every_entry() {
        let html = render().await;
        assert_eq!(html.matches(r#"class="kuku-case""#).count(), USE_CASES.len());
        assert_eq!(html.matches(r#"class="kuku-package""#).count(), PACKAGES.len());
        assert_eq!(html.matches(r#"class="kuku-faq__item""#).count(), FAQ.len());
        assert_eq!(html.matches(r#"class="kuku-visual""#).count(), 4);
        assert!(html.contains("Case 06"));
    }

    #[tokio::test]
    async fn flow_has_arrows_between_steps_only() {
        let html = render().await;
        assert_eq!(html.matches(r#"class="kuku-flow__step""#).count(), 6);
        assert_eq!(html.matches(r#"class="kuku-flow__arrow""#).count(), 5);
    }

    #[tokio::test]
    async fn only_first_feature_lists_examples() {
        let html = render().await;
        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("<li>").count(), FEATURES[0].examples.len());
    }

    #[tokio::test]
    async fn offers_consultation_twice() {
        let html = render().await;
        assert_eq!(html.matches(CONSULT_LABEL).count(), 2);
        assert!(html.contains("cta-button--outline"));
        assert!(html.contains(r#"data-page="kuku""#));
        assert!(html.contains("Back to TOP"));
    }
}

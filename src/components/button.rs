use yew::prelude::*;

use crate::components::icons::ArrowRight;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    /// Transparent with a light border, for dark panels.
    Outline,
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub class: Classes,
    /// Renders a submit button for forms instead of a plain one.
    #[prop_or_default]
    pub submit: bool,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let variant = match props.variant {
        Variant::Primary => "cta-button--primary",
        Variant::Outline => "cta-button--outline",
    };

    html! {
        <button
            type={if props.submit { "submit" } else { "button" }}
            class={classes!("cta-button", variant, props.class.clone())}
            onclick={props.onclick.clone()}
        >
            <span class="cta-button__label">
                { for props.children.iter() }
                <ArrowRight size={16} class={classes!("cta-button__arrow")} />
            </span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackLinkProps {
    pub onclick: Callback<MouseEvent>,
    /// Light text for dark heroes.
    #[prop_or_default]
    pub light: bool,
}

#[function_component(BackLink)]
pub fn back_link(props: &BackLinkProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("back-link", props.light.then_some("back-link--light"))}
            onclick={props.onclick.clone()}
        >
            <span class="back-link__arrow">{"←"}</span>{" Back to TOP"}
        </button>
    }
}

pub const STYLES: &str = r#"
.cta-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 1rem 2.5rem;
    font-size: 0.875rem;
    letter-spacing: 0.05em;
    cursor: pointer;
    transition: all 300ms;
}
.cta-button--primary {
    background: #111111;
    color: #ffffff;
    border: 1px solid #111111;
}
.cta-button--primary:hover { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
.cta-button--outline {
    background: transparent;
    color: #ffffff;
    border: 1px solid #ffffff;
}
.cta-button--outline:hover {
    background: #ffffff;
    color: #111111;
}
.cta-button__label {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.cta-button__arrow { transition: transform 300ms; }
.cta-button:hover .cta-button__arrow { transform: translateX(4px); }
.back-link {
    display: flex;
    align-items: center;
    margin-bottom: 3rem;
    background: none;
    border: none;
    cursor: pointer;
    font-size: 0.875rem;
    color: #9ca3af;
}
.back-link:hover { color: #111111; }
.back-link--light { color: rgba(255, 255, 255, 0.6); }
.back-link--light:hover { color: #ffffff; }
.back-link__arrow {
    margin-right: 0.5rem;
    transition: transform 200ms;
}
.back-link:hover .back-link__arrow { transform: translateX(-4px); }
"#;

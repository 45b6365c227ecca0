use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MenuIcon)]
pub fn menu_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width={props.size.to_string()} height={props.size.to_string()}
            viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"
            stroke-linecap="round" stroke-linejoin="round">
            <line x1="4" y1="12" x2="20" y2="12"></line>
            <line x1="4" y1="6" x2="20" y2="6"></line>
            <line x1="4" y1="18" x2="20" y2="18"></line>
        </svg>
    }
}

#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width={props.size.to_string()} height={props.size.to_string()}
            viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"
            stroke-linecap="round" stroke-linejoin="round">
            <line x1="18" y1="6" x2="6" y2="18"></line>
            <line x1="6" y1="6" x2="18" y2="18"></line>
        </svg>
    }
}

#[function_component(ArrowRight)]
pub fn arrow_right(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width={props.size.to_string()} height={props.size.to_string()}
            viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"
            stroke-linecap="round" stroke-linejoin="round">
            <line x1="5" y1="12" x2="19" y2="12"></line>
            <polyline points="12 5 19 12 12 19"></polyline>
        </svg>
    }
}

#[function_component(PlayIcon)]
pub fn play_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width={props.size.to_string()} height={props.size.to_string()}
            viewBox="0 0 24 24" fill="currentColor" stroke="none">
            <polygon points="5 3 19 12 5 21 5 3"></polygon>
        </svg>
    }
}

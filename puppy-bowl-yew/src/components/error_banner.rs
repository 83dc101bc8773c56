use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="errorBanner" role="alert">{message.to_string()}</div>
        },
        None => html! {},
    }
}

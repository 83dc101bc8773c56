use puppy_bowl_core::{PlayerCard, PlayerId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerCardProps {
    pub card: PlayerCard,
    pub on_remove: Callback<PlayerId>,
    pub on_details: Callback<PlayerId>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Summary card with remove/details buttons
#[function_component(PlayerCardComp)]
pub fn player_card(props: &PlayerCardProps) -> Html {
    let id = props.card.id;

    let on_remove = {
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(id))
    };

    let on_details = {
        let on_details = props.on_details.clone();
        Callback::from(move |_: MouseEvent| on_details.emit(id))
    };

    html! {
        <div class="playerSummarized">
            <p>{"Name: "}{&props.card.name}</p>
            <p>{"ID: "}{id}</p>
            <img src={props.card.image_url.clone()} alt={props.card.image_alt.clone()} />
            <div class="playerSummarized__actions">
                <button class="playerBtn" onclick={on_remove} disabled={props.disabled}>
                    {"Remove Player"}
                </button>
                <button class="playerBtn" onclick={on_details} disabled={props.disabled}>
                    {"See Details"}
                </button>
            </div>
        </div>
    }
}

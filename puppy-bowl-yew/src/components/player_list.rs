use crate::components::PlayerCardComp;
use puppy_bowl_core::{ListView, PlayerId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerListProps {
    pub view: ListView,
    pub on_remove: Callback<PlayerId>,
    pub on_details: Callback<PlayerId>,
    #[prop_or_default]
    pub disabled: bool,
}

/// All players as cards, or the empty-roster message
#[function_component(PlayerList)]
pub fn player_list(props: &PlayerListProps) -> Html {
    match &props.view {
        ListView::Empty { message } => html! {
            <h1 class="playerList__empty">{*message}</h1>
        },
        ListView::Cards(cards) => html! {
            <div class="playerList">
                {for cards.iter().map(|card| html! {
                    <PlayerCardComp
                        key={card.id}
                        card={card.clone()}
                        on_remove={props.on_remove.clone()}
                        on_details={props.on_details.clone()}
                        disabled={props.disabled}
                    />
                })}
            </div>
        },
    }
}

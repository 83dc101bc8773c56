use puppy_bowl_core::PlayerDetail;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerDetailProps {
    pub detail: PlayerDetail,
    pub on_back: Callback<()>,
}

#[function_component(PlayerDetailComp)]
pub fn player_detail(props: &PlayerDetailProps) -> Html {
    let detail = &props.detail;

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <section class="singlePlayerDetails">
            <p>{"Name: "}{&detail.name}</p>
            <p>{"ID: "}{detail.id}</p>
            <p>{"Breed: "}{&detail.breed}</p>
            <p>{"Status: "}{detail.status.as_str()}</p>
            <p>{"Team Name: "}{detail.team_label()}</p>
            <img src={detail.image_url.clone()} alt={detail.name.clone()} />
            <p>{"Teammates: "}{detail.teammates_text()}</p>
            <button class="backToAllPlayersBtn" onclick={on_back}>
                {"Back to All Players"}
            </button>
        </section>
    }
}

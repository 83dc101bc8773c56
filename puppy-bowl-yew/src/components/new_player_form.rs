use crate::components::ErrorBanner;
use puppy_bowl_core::view::team_options;
use puppy_bowl_core::{NewPlayer, NewPlayerDraft, PlayerStatus, Team};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NewPlayerFormProps {
    pub teams: Vec<Team>,
    pub on_submit: Callback<NewPlayer>,
    #[prop_or_default]
    pub disabled: bool,
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Breed,
    ImageUrl,
}

/// Add-player form; clears itself once a valid player is submitted
#[function_component(NewPlayerForm)]
pub fn new_player_form(props: &NewPlayerFormProps) -> Html {
    let draft = use_state(NewPlayerDraft::default);
    let error = use_state(|| None::<AttrValue>);

    let on_text_input = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            match field {
                Field::Name => next.name = input.value(),
                Field::Breed => next.breed = input.value(),
                Field::ImageUrl => next.image_url = input.value(),
            }
            draft.set(next);
        })
    };

    let on_status_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.status = PlayerStatus::from_form_value(&select.value());
            draft.set(next);
        })
    };

    let on_team_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.team = select.value();
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.to_new_player() {
                Ok(player) => {
                    tracing::debug!("Submitting new player '{}'", player.name);
                    on_submit.emit(player);
                    error.set(None);
                    draft.set(NewPlayerDraft::default());
                }
                Err(err) => {
                    tracing::warn!("Invalid new player form: {}", err);
                    error.set(Some(err.to_string().into()));
                }
            }
        })
    };

    html! {
        <form id="new-player-form" onsubmit={on_submit}>
            <ErrorBanner message={(*error).clone()} />

            <label for="playerName">{"Name"}</label>
            <input
                type="text"
                id="playerName"
                name="playerName"
                required={true}
                value={draft.name.clone()}
                oninput={on_text_input(Field::Name)}
            />

            <label for="playerBreed">{"Breed"}</label>
            <input
                type="text"
                id="playerBreed"
                name="playerBreed"
                required={true}
                value={draft.breed.clone()}
                oninput={on_text_input(Field::Breed)}
            />

            <label for="playerImgUrl">{"Image URL"}</label>
            <input
                type="text"
                id="playerImgUrl"
                name="playerImgUrl"
                required={true}
                value={draft.image_url.clone()}
                oninput={on_text_input(Field::ImageUrl)}
            />

            <label for="playerStatus">{"Status"}</label>
            <select id="playerStatus" name="playerStatus" onchange={on_status_change}>
                {for PlayerStatus::SELECTABLE.iter().map(|status| html! {
                    <option value={status.as_str()} selected={*status == draft.status}>
                        {status.as_str()}
                    </option>
                })}
            </select>

            <label for="playerTeam">{"Team"}</label>
            <select id="playerTeam" name="playerTeam" onchange={on_team_change}>
                {for team_options(&props.teams).into_iter().map(|option| {
                    let selected = option.value == draft.team;
                    html! {
                        <option value={option.value} {selected}>{option.label}</option>
                    }
                })}
            </select>

            <button id="addPlayerBtn" type="submit" disabled={props.disabled}>
                {"Add Player"}
            </button>
        </form>
    }
}

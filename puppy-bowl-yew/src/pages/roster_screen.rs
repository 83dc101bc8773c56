use crate::components::{ErrorBanner, NewPlayerForm, PlayerDetailComp, PlayerList};
use crate::hooks::use_roster;
use puppy_bowl_core::{RosterCommand, ViewState};
use yew::prelude::*;

/// Main area (list or detail) plus the add-player form
#[function_component(RosterScreen)]
pub fn roster_screen() -> Html {
    let roster = use_roster();
    let model = roster.model.clone();

    // ===== CALLBACKS =====

    let on_remove = roster.send_command.reform(RosterCommand::RemovePlayer);
    let on_details = roster.send_command.reform(RosterCommand::ShowPlayer);
    let on_back = roster.send_command.reform(|_: ()| RosterCommand::ShowList);
    let on_add = roster.send_command.reform(RosterCommand::AddPlayer);

    // ===== RENDER =====

    let main = match model.view() {
        ViewState::List => html! {
            <PlayerList
                view={model.list_view()}
                {on_remove}
                {on_details}
                disabled={model.is_pending()}
            />
        },
        ViewState::Detail(detail) => html! {
            <PlayerDetailComp detail={detail.clone()} {on_back} />
        },
    };

    html! {
        <div class="roster-screen">
            <ErrorBanner message={model.last_error().map(|e| AttrValue::from(e.to_string()))} />

            <main class="roster-screen__main">
                {main}
            </main>

            <section class="roster-screen__form">
                <h2>{"Add a Player"}</h2>
                <NewPlayerForm
                    teams={model.roster().teams().to_vec()}
                    on_submit={on_add}
                    disabled={model.is_pending()}
                />
            </section>
        </div>
    }
}

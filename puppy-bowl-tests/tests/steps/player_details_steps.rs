use cucumber::{given, then, when};
use puppy_bowl_core::{RosterCommand, ViewState};
use puppy_bowl_tests::RosterWorld;

#[given("the API embeds teams in player details")]
async fn api_embeds_team(world: &mut RosterWorld) {
    world.api().set_embed_team(true);
}

#[when(expr = "the user opens the details of {string}")]
async fn open_details(world: &mut RosterWorld, name: String) {
    let id = world.player_id(&name);
    world.execute(RosterCommand::ShowPlayer(id)).await;
}

#[when("the user goes back to all players")]
async fn back_to_list(world: &mut RosterWorld) {
    world.execute(RosterCommand::ShowList).await;
}

#[then(expr = "the detail view shows {string}")]
async fn detail_shows(world: &mut RosterWorld, name: String) {
    let ViewState::Detail(detail) = world.model.view() else {
        panic!("Expected the detail view, got {:?}", world.model.view());
    };
    assert_eq!(detail.name, name);
}

#[then(expr = "the detail team is {string}")]
async fn detail_team(world: &mut RosterWorld, team: String) {
    let ViewState::Detail(detail) = world.model.view() else {
        panic!("Expected the detail view");
    };
    assert_eq!(detail.team_label(), team);
}

#[then(expr = "the detail teammates read {string}")]
async fn detail_teammates(world: &mut RosterWorld, teammates: String) {
    let ViewState::Detail(detail) = world.model.view() else {
        panic!("Expected the detail view");
    };
    assert_eq!(detail.teammates_text(), teammates);
}

#[then("the list view is shown")]
async fn list_view_shown(world: &mut RosterWorld) {
    assert_eq!(world.model.view(), &ViewState::List);
}

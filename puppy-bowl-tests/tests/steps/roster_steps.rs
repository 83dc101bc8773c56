use cucumber::{given, then, when};
use puppy_bowl_core::{ListView, RosterCommand, RosterEvent};
use puppy_bowl_tests::RosterWorld;

// ===== Given Steps =====

#[given("the roster API has no players")]
async fn api_has_no_players(_world: &mut RosterWorld) {
    // No-op: the mock starts empty
}

#[given(expr = "a team {string} exists")]
async fn team_exists(world: &mut RosterWorld, name: String) {
    world.api().add_team(&name);
}

#[given(expr = "a player {string} of breed {string} exists")]
async fn player_exists(world: &mut RosterWorld, name: String, breed: String) {
    world.api().add_player(&name, &breed, None);
}

#[given(expr = "a player {string} of breed {string} plays for {string}")]
async fn player_on_team(world: &mut RosterWorld, name: String, breed: String, team: String) {
    let team_id = world
        .api()
        .team_id(&team)
        .unwrap_or_else(|| panic!("Team '{}' not found", team));
    world.api().add_player(&name, &breed, Some(team_id));
}

#[given("the roster has been loaded")]
async fn roster_loaded(world: &mut RosterWorld) {
    let event = world.execute(RosterCommand::Refresh).await;
    assert!(
        matches!(event, RosterEvent::RosterLoaded(_)),
        "Expected RosterLoaded, got {:?}",
        event
    );
}

#[given(expr = "the API will reject the next request with {string}")]
async fn api_rejects_next(world: &mut RosterWorld, message: String) {
    world.api().reject_next(&message);
}

#[given("the API is unreachable for the next request")]
async fn api_offline(world: &mut RosterWorld) {
    world.api().go_offline();
}

// ===== When Steps =====

#[when("the page loads")]
async fn page_loads(world: &mut RosterWorld) {
    world.execute(RosterCommand::Refresh).await;
}

#[when(expr = "the user removes {string}")]
async fn user_removes(world: &mut RosterWorld, name: String) {
    let id = world.player_id(&name);
    world.removed.insert(name, id);
    world.execute(RosterCommand::RemovePlayer(id)).await;
}

// ===== Then Steps =====

#[then(expr = "the list shows the message {string}")]
async fn list_shows_message(world: &mut RosterWorld, expected: String) {
    match world.model.list_view() {
        ListView::Empty { message } => assert_eq!(message, expected),
        other => panic!("Expected empty list, got {:?}", other),
    }
}

#[then(expr = "the list shows {int} player card(s)")]
async fn list_shows_cards(world: &mut RosterWorld, count: usize) {
    match world.model.list_view() {
        ListView::Cards(cards) => assert_eq!(cards.len(), count),
        ListView::Empty { .. } => assert_eq!(count, 0, "Expected cards, got the empty message"),
    }
}

#[then(expr = "the list shows a card for {string}")]
async fn list_shows_card_for(world: &mut RosterWorld, name: String) {
    let ListView::Cards(cards) = world.model.list_view() else {
        panic!("Expected player cards");
    };
    let card = cards
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("No card for '{}'", name));
    assert_eq!(card.image_alt, name);
}

#[then(expr = "the list does not show {string}")]
async fn list_does_not_show(world: &mut RosterWorld, name: String) {
    if let ListView::Cards(cards) = world.model.list_view() {
        assert!(cards.iter().all(|c| c.name != name), "'{}' is still listed", name);
    }
}

#[then(expr = "{int} team(s) is/are available")]
async fn teams_available(world: &mut RosterWorld, count: usize) {
    assert_eq!(world.model.roster().teams().len(), count);
}

#[then(expr = "the API received a delete for {string}")]
async fn api_received_delete(world: &mut RosterWorld, name: String) {
    let id = *world
        .removed
        .get(&name)
        .unwrap_or_else(|| panic!("'{}' was never removed", name));
    assert_eq!(world.api().deleted(), vec![id]);
    assert!(
        !world.model.roster().contains(id),
        "Player #{} should no longer be on the roster",
        id
    );
}

#[then("the command fails")]
async fn command_fails(world: &mut RosterWorld) {
    assert!(
        world.last_command_failed(),
        "Expected failure, got {:?}",
        world.last_event()
    );
}

#[then(expr = "the error message contains {string}")]
async fn error_message_contains(world: &mut RosterWorld, fragment: String) {
    let message = world.model.last_error().expect("No error recorded");
    assert!(
        message.contains(&fragment),
        "'{}' does not contain '{}'",
        message,
        fragment
    );
}

#[then("no error is shown")]
async fn no_error(world: &mut RosterWorld) {
    assert_eq!(world.model.last_error(), None);
}

#[then("no request is pending")]
async fn nothing_pending(world: &mut RosterWorld) {
    assert!(!world.model.is_pending());
}

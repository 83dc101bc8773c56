use cucumber::{given, then, when};
use puppy_bowl_core::PlayerStatus;
use puppy_bowl_tests::RosterWorld;

#[given(expr = "the user fills in name {string}, breed {string} and image {string}")]
async fn fill_in(world: &mut RosterWorld, name: String, breed: String, image: String) {
    world.draft.name = name;
    world.draft.breed = breed;
    world.draft.image_url = image;
}

#[given(expr = "the user picks status {string}")]
async fn pick_status(world: &mut RosterWorld, status: String) {
    world.draft.status = PlayerStatus::from_form_value(&status);
}

#[given(expr = "the user picks team {string}")]
async fn pick_team(world: &mut RosterWorld, team: String) {
    world.draft.team = match world.api().team_id(&team) {
        Some(id) => id.to_string(),
        None => team,
    };
}

#[when("the user submits the form")]
async fn submit(world: &mut RosterWorld) {
    world.submit_form().await;
}

#[then(expr = "the API received a new player named {string}")]
async fn api_received_player(world: &mut RosterWorld, name: String) {
    let created = world.api().created();
    assert!(
        created.iter().any(|p| p.name == name),
        "No create for '{}' in {:?}",
        name,
        created
    );
}

#[then("the new player payload has no team")]
async fn payload_without_team(world: &mut RosterWorld) {
    let created = world.api().created();
    let payload = created.last().expect("Nothing was created");
    assert_eq!(payload.team_id, None);

    let json = serde_json::to_value(payload).expect("serialize payload");
    assert!(json.get("teamId").is_none(), "teamId should be omitted: {}", json);
}

#[then(expr = "the new player payload has team {string}")]
async fn payload_with_team(world: &mut RosterWorld, team: String) {
    let expected = world.api().team_id(&team);
    let created = world.api().created();
    let payload = created.last().expect("Nothing was created");
    assert_eq!(payload.team_id, expected);
}

#[then(expr = "the new player payload has status {string}")]
async fn payload_status(world: &mut RosterWorld, status: String) {
    let created = world.api().created();
    let payload = created.last().expect("Nothing was created");
    assert_eq!(payload.status.as_str(), status);
}

#[then(expr = "the form reports {string}")]
async fn form_reports(world: &mut RosterWorld, message: String) {
    let error = world.form_error.as_ref().expect("No form error");
    assert_eq!(error.to_string(), message);
}

#[then("no player was created")]
async fn nothing_created(world: &mut RosterWorld) {
    assert!(world.api().created().is_empty());
}

#[then("the form is cleared")]
async fn form_cleared(world: &mut RosterWorld) {
    assert!(world.draft.name.is_empty());
    assert_eq!(world.draft.team, "none");
}

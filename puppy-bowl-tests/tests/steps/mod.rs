mod player_details_steps;
mod player_form_steps;
mod roster_steps;

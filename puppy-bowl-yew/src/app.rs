use crate::pages::RosterScreen;
use crate::providers::RosterProvider;
use puppy_bowl_core::ApiConfig;
use yew::prelude::*;

/// Extract an optional `cohort` override from the URL query parameters
fn get_cohort_from_url() -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let parsed = web_sys::Url::new(&href).ok()?;
    let cohort = parsed.search_params().get("cohort")?;
    tracing::info!("Found cohort in URL: {}", cohort);
    Some(cohort)
}

fn config_for(cohort: Option<String>) -> ApiConfig {
    match cohort {
        Some(cohort) if !cohort.trim().is_empty() => ApiConfig::default().with_cohort(cohort),
        _ => ApiConfig::default(),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| config_for(get_cohort_from_url()));

    html! {
        <div class="app">
            <RosterProvider config={(*config).clone()}>
                <RosterScreen />
            </RosterProvider>
        </div>
    }
}

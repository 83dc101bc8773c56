use crate::api::HttpRosterApi;
use crate::hooks::RosterContext;
use puppy_bowl_core::{ApiConfig, RosterCommand, RosterEvent, RosterModel, RosterService};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RosterProviderProps {
    #[prop_or_default]
    pub config: ApiConfig,
    pub children: Children,
}

/// Reducer state; async completions always fold into the latest model
#[derive(Debug, Default, PartialEq)]
struct RosterStore {
    model: Rc<RosterModel>,
}

#[derive(Debug)]
enum StoreAction {
    Begin(RosterCommand),
    Finish(RosterEvent),
}

impl Reducible for RosterStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut model = (*self.model).clone();
        match action {
            StoreAction::Begin(command) => model.begin(&command),
            StoreAction::Finish(event) => model.apply(event),
        }
        Rc::new(Self {
            model: Rc::new(model),
        })
    }
}

#[function_component(RosterProvider)]
pub fn roster_provider(props: &RosterProviderProps) -> Html {
    let store = use_reducer(RosterStore::default);
    let service = use_memo(props.config.clone(), |config| {
        tracing::info!("Using roster API at {}", config.players_url());
        RosterService::new(HttpRosterApi::new(config.clone()))
    });

    let send_command = {
        let dispatcher = store.dispatcher();
        let model = store.model.clone();

        Callback::from(move |command: RosterCommand| {
            if command.is_remote() && model.is_pending() {
                tracing::warn!("Ignoring {} while another request is in flight", command.name());
                return;
            }

            dispatcher.dispatch(StoreAction::Begin(command.clone()));

            let service = service.clone();
            let dispatcher = dispatcher.clone();
            let roster = model.roster().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let event = service.handle_command(command, &roster).await;
                dispatcher.dispatch(StoreAction::Finish(event));
            });
        })
    };

    {
        let send_command = send_command.clone();
        use_effect_with((), move |_| {
            send_command.emit(RosterCommand::Refresh);
            || ()
        });
    }

    let context = RosterContext {
        model: store.model.clone(),
        send_command,
    };

    html! {
        <ContextProvider<RosterContext> {context}>
            {props.children.clone()}
        </ContextProvider<RosterContext>>
    }
}

use gloo_timers::callback::Timeout;
use leptos::*;

use joinup_boundary::Activities;
use joinup_frontend_api::{self as api, ActivityQuery, PublicApi};

mod components;
use components::*;

mod message;
use message::{MessageLog, StatusMessage};

/// Base URL of the backend API (same origin).
const DEFAULT_API_URL: &str = "";

/// How long a status message stays visible.
const STATUS_HIDE_DELAY_MS: u32 = 5_000;

pub(crate) const FAILED_TO_LOAD: &str = "Failed to load activities. Please try again later.";
pub(crate) const FAILED_TO_SIGN_UP: &str = "Failed to sign up. Please try again.";
pub(crate) const FAILED_TO_UNREGISTER: &str = "Failed to unregister. Please try again.";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let public_api = PublicApi::new(DEFAULT_API_URL);

    // -- signals -- //

    let activities = RwSignal::new(None::<Result<Activities, api::Error>>);
    let categories = RwSignal::new(Vec::<String>::new());
    let messages = RwSignal::new(MessageLog::default());
    let latest_list_request = StoredValue::new(0_u64);

    // -- actions -- //

    let load_activities = Action::new(move |query: &ActivityQuery| {
        let query = query.clone();
        async move {
            let request_id = latest_list_request.with_value(|id| id + 1);
            latest_list_request.set_value(request_id);
            let result = public_api.activities(&query).await;
            // A later load may have been issued while this one was in
            // flight; only the most recently issued request may render.
            if latest_list_request.get_value() != request_id {
                log::debug!("Discarding response of superseded list request {request_id}");
                return;
            }
            if let Err(err) = &result {
                log::error!("Unable to load activities: {err}");
            }
            activities.set(Some(result));
        }
    });

    let populate_categories = Action::new(move |(): &()| async move {
        match public_api.activities(&ActivityQuery::default()).await {
            Ok(all) => categories.set(all.categories()),
            Err(err) => {
                // Best effort: the list stays usable without a category filter.
                log::warn!("Unable to populate the category filter: {err}");
            }
        }
    });

    // -- callbacks -- //

    let show_status = move |message: StatusMessage| {
        let Some(token) = messages.try_update(|log| log.show(message)) else {
            return;
        };
        Timeout::new(STATUS_HIDE_DELAY_MS, move || {
            messages.update(|log| log.expire(token));
        })
        .forget();
    };

    let on_filter = move |query: ActivityQuery| {
        load_activities.dispatch(query);
    };

    let on_refresh = move || {
        // A successful signup or unregister drops any active filter.
        load_activities.dispatch(ActivityQuery::default());
    };

    let activity_names = Signal::derive(move || {
        activities.with(|state| match state {
            Some(Ok(activities)) => activities.iter().map(|a| a.name.clone()).collect(),
            _ => Vec::new(),
        })
    });

    // -- init -- //

    populate_categories.dispatch(());
    load_activities.dispatch(ActivityQuery::default());

    view! {
      <main class="container">
        <h1>"Activities"</h1>
        <Toolbar categories = categories.into() on_filter />
        <ActivityList activities = activities.into() public_api />
        <SignupForm public_api activity_names on_status = show_status on_refresh />
        <StatusView messages = messages.into() />
      </main>
    }
}

use leptos::*;

use joinup_boundary::{Activities, Activity};
use joinup_frontend_api::{self as api, PublicApi};

use crate::{message::error_message, FAILED_TO_LOAD, FAILED_TO_SIGN_UP};

/// The rendered activity list: one card per activity, fully replaced on
/// every successful load.
#[component]
pub fn ActivityList(
    activities: Signal<Option<Result<Activities, api::Error>>>,
    public_api: PublicApi,
) -> impl IntoView {
    move || match activities.get() {
        None => view! { <p>"The activities are loaded ..."</p> }.into_view(),
        Some(Err(_)) => view! { <p class="error">{ FAILED_TO_LOAD }</p> }.into_view(),
        Some(Ok(activities)) if activities.is_empty() => {
            view! { <p>"No activities could be found."</p> }.into_view()
        }
        Some(Ok(activities)) => view! {
          <ul class="activity-list">
            <For
              each = move || activities.clone()
              key = |activity| activity.name.clone()
              children = move |activity| view! { <li><ActivityCard activity public_api /></li> }
            />
          </ul>
        }
        .into_view(),
    }
}

#[component]
fn ActivityCard(activity: Activity, public_api: PublicApi) -> impl IntoView {
    let occupancy = activity.occupancy();
    let Activity {
        name,
        category,
        description,
        schedule,
        date,
        ..
    } = activity;
    let heading = name.clone();

    // Bound to this card at render time; nothing is attached to the
    // global scope.
    let quick_signup = Action::new(move |(): &()| {
        let name = name.clone();
        async move { quick_signup(public_api, &name).await }
    });

    view! {
      <div class="activity-card">
        <h2>{ heading }</h2>
        <p><strong>"Category: "</strong>{ category }</p>
        <p>{ description }</p>
        <p><strong>"Schedule: "</strong>{ schedule }</p>
        <p><strong>"Date: "</strong>{ date }</p>
        <p><strong>"Participants: "</strong>{ occupancy }</p>
        <button type = "button" on:click = move |_| quick_signup.dispatch(()) >
          "Sign Up"
        </button>
      </div>
    }
}

/// The prompt/alert signup path used directly from a card: no status
/// message, no form reset, no list refresh.
async fn quick_signup(public_api: PublicApi, activity: &str) {
    let Some(email) = prompt("Enter your email to sign up:") else {
        return;
    };
    let email = email.trim().to_string();
    if email.is_empty() {
        return;
    }
    let text = match public_api.sign_up(activity, &email).await {
        Ok(response) => response.message,
        Err(err) => {
            log::error!("Unable to sign up {email} for {activity}: {err}");
            error_message(&err, FAILED_TO_SIGN_UP)
        }
    };
    alert(&text);
}

fn prompt(message: &str) -> Option<String> {
    window().prompt_with_message(message).ok().flatten()
}

fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        log::warn!("Unable to display an alert");
    }
}

use leptos::{ev, *};

use joinup_frontend_api::PublicApi;

use crate::{
    message::{error_message, StatusMessage},
    FAILED_TO_SIGN_UP, FAILED_TO_UNREGISTER,
};

/// Which membership operation a form submission performs. Both share the
/// same result protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    SignUp,
    Unregister,
}

impl Op {
    const fn fallback_message(self) -> &'static str {
        match self {
            Self::SignUp => FAILED_TO_SIGN_UP,
            Self::Unregister => FAILED_TO_UNREGISTER,
        }
    }
}

#[component]
pub fn SignupForm<S, R>(
    public_api: PublicApi,
    activity_names: Signal<Vec<String>>,
    on_status: S,
    on_refresh: R,
) -> impl IntoView
where
    S: Fn(StatusMessage) + Copy + 'static,
    R: Fn() + Copy + 'static,
{
    let (activity, set_activity) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (wait_for_response, set_wait_for_response) = create_signal(false);

    let submit = Action::new(move |(op, activity, email): &(Op, String, String)| {
        let op = *op;
        let activity = activity.clone();
        let email = email.clone();
        async move {
            set_wait_for_response.update(|w| *w = true);
            let result = match op {
                Op::SignUp => public_api.sign_up(&activity, &email).await,
                Op::Unregister => public_api.unregister(&activity, &email).await,
            };
            set_wait_for_response.update(|w| *w = false);
            match result {
                Ok(response) => {
                    on_status(StatusMessage::success(response.message));
                    set_activity.update(String::clear);
                    set_email.update(String::clear);
                    on_refresh();
                }
                Err(err) => {
                    log::warn!("Unable to update the participants of {activity}: {err}");
                    on_status(StatusMessage::error(error_message(
                        &err,
                        op.fallback_message(),
                    )));
                }
            }
        }
    });

    let disabled = Signal::derive(move || wait_for_response.get());
    let submit_disabled = Signal::derive(move || {
        disabled.get() || activity.get().is_empty() || email.with(|e| e.trim().is_empty())
    });

    let submit_op = move |op: Op| {
        submit.dispatch((op, activity.get(), email.with(|e| e.trim().to_string())));
    };

    view! {
      <form class="signup-form" on:submit = |ev| ev.prevent_default() >
        <h2>"Sign up for an activity"</h2>
        <select
          prop:value = move || activity.get()
          prop:disabled = move || disabled.get()
          on:change = move |ev| set_activity.set(event_target_value(&ev))
        >
          <option value="">"Select an activity"</option>
          <For
            each = move || activity_names.get()
            key = |name| name.clone()
            children = move |name: String| {
              view! { <option value=name.clone()>{ name }</option> }
            }
          />
        </select>
        <input
          type = "email"
          required
          placeholder = "Email address"
          prop:value = move || email.get()
          prop:disabled = move || disabled.get()
          on:keyup = move |ev: ev::KeyboardEvent| {
            let val = event_target_value(&ev);
            set_email.update(|v| *v = val);
          }
          // The `change` event fires when the browser fills the form automatically,
          on:change = move |ev| {
            let val = event_target_value(&ev);
            set_email.update(|v| *v = val);
          }
        />
        <button
          type = "button"
          prop:disabled = move || submit_disabled.get()
          on:click = move |_| submit_op(Op::SignUp)
        >
          "Sign Up"
        </button>
        <button
          type = "button"
          prop:disabled = move || submit_disabled.get()
          on:click = move |_| submit_op(Op::Unregister)
        >
          "Unregister"
        </button>
      </form>
    }
}

use leptos::*;

use crate::message::MessageLog;

/// The transient message area below the signup form. Hidden whenever no
/// message is displayed.
#[component]
pub fn StatusView(messages: Signal<MessageLog>) -> impl IntoView {
    move || {
        messages.with(|log| {
            log.current().map(|message| {
                let text = message.text.clone();
                let class = message.kind.css_class();
                view! { <p class=class>{ text }</p> }
            })
        })
    }
}

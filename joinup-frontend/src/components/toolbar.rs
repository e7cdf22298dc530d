use leptos::{ev, *};

use joinup_frontend_api::ActivityQuery;

/// Filter controls above the activity list: category, sort order and a
/// free-text search. The criteria are read from the controls on every
/// filter action, never stored.
#[component]
pub fn Toolbar<F>(categories: Signal<Vec<String>>, on_filter: F) -> impl IntoView
where
    F: Fn(ActivityQuery) + Copy + 'static,
{
    let (category, set_category) = create_signal(String::new());
    let (sort, set_sort) = create_signal(String::new());
    let (search, set_search) = create_signal(String::new());

    let apply_filter = move || {
        on_filter(ActivityQuery::from_form(
            &category.get(),
            &sort.get(),
            &search.get(),
        ));
    };

    view! {
      <div class="toolbar">
        <select on:change = move |ev| set_category.set(event_target_value(&ev)) >
          <option value="">"All categories"</option>
          <For
            each = move || categories.get()
            key = |category| category.clone()
            children = move |category: String| {
              view! { <option value=category.clone()>{ category }</option> }
            }
          />
        </select>
        <select on:change = move |ev| set_sort.set(event_target_value(&ev)) >
          <option value="">"Unsorted"</option>
          <option value="name">"Sort by name"</option>
          <option value="date">"Sort by date"</option>
        </select>
        <input
          type = "search"
          placeholder = "Search activities"
          on:keyup = move |ev: ev::KeyboardEvent| {
            let value = event_target_value(&ev);
            set_search.set(value);
            match &*ev.key() {
              "Enter" => apply_filter(),
              _ => { /* nothing to do */ }
            }
          }
          on:change = move |ev| {
            let value = event_target_value(&ev);
            set_search.set(value);
          }
        />
        <button type = "button" on:click = move |_| apply_filter() >
          "Filter"
        </button>
      </div>
    }
}

//! Category selector and name search.
//!
//! Both controls write to the URL rather than to the session directly; the
//! router pushes the URL filter into the [`Catalog`]. Typing is debounced and
//! replaces the history entry, changing category adds one.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_debounce_fn_with_arg;

use crate::app::Catalog;
use crate::components::icons as ic;
use crate::config::{ALL_CATEGORIES, SEARCH_DEBOUNCE_MS};
use crate::models::{AppRoute, CategoryFilter};
use crate::utils::format::capitalize;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

#[component]
pub fn SearchForm(catalog: Catalog, route: Memo<AppRoute>) -> impl IntoView {
    let filter = Memo::new(move |_| match route.get() {
        AppRoute::Catalog { category, search } => (category, search),
        _ => (CategoryFilter::All, String::new()),
    });
    let selected = Memo::new(move |_| filter.with(|(category, _)| category.clone()));
    let (search_text, set_search_text) = signal(filter.with_untracked(|(_, s)| s.clone()));

    // Follow the URL on back/forward
    Effect::new(move |_| {
        set_search_text.set(filter.with(|(_, s)| s.clone()));
    });

    let apply_search = use_debounce_fn_with_arg(
        move |term: String| {
            AppRoute::catalog(selected.get_untracked(), term).replace();
        },
        SEARCH_DEBOUNCE_MS,
    );

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        set_search_text.set(value.clone());
        apply_search(value);
    };

    let on_category = move |ev: leptos::ev::Event| {
        let category = CategoryFilter::parse(&event_target_value(&ev));
        AppRoute::catalog(category, search_text.get_untracked()).push();
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        AppRoute::catalog(selected.get_untracked(), search_text.get_untracked()).push();
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <div class=css::field>
                <label for="type" class=css::label>"Pokémon Type"</label>
                <select id="type" class=css::control on:change=on_category>
                    <option
                        value=ALL_CATEGORIES
                        selected=move || selected.with(CategoryFilter::is_all)
                    >
                        "All Types"
                    </option>
                    <For
                        each=move || catalog.categories.get()
                        key=|category| category.identifier.clone()
                        children=move |category| {
                            let id = category.identifier.clone();
                            view! {
                                <option
                                    value=category.identifier.clone()
                                    selected=move || selected.with(|c| c.as_str() == id)
                                >
                                    {capitalize(&category.name)}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            <div class=css::field>
                <label for="search" class=css::label>"Search"</label>
                <input
                    id="search"
                    type="text"
                    class=css::control
                    placeholder="Search Pokémon..."
                    prop:value=search_text
                    on:input=on_input
                />
            </div>

            <div class=css::field>
                <button type="submit" class=css::button>
                    <Icon icon=ic::SEARCH />
                    <span>"Search"</span>
                </button>
            </div>
        </form>
    }
}

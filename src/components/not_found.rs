use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/not_found.module.css");

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class=css::page>
            <h1 class=css::code>"404 - Not Found"</h1>
            <p class=css::message>
                "Oops! The Pokémon you're looking for has escaped into the tall grass."
            </p>
            <a href=AppRoute::default().to_hash() class=css::home_link>
                <Icon icon=ic::HOME />
                <span>"Return to Pokédex"</span>
            </a>
        </div>
    }
}

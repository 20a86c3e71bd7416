//! Page chrome: header with home link and footer crediting the data source.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{APP_NAME, DATA_SOURCE_URL};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/layout.module.css");

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let home = AppRoute::default().to_hash();

    view! {
        <div class=css::page>
            <header class=css::header>
                <div class=css::container>
                    <a href=home.clone() class=css::brand>{APP_NAME}</a>
                    <nav>
                        <a href=home class=css::nav_link>
                            <Icon icon=ic::HOME />
                            <span>"Home"</span>
                        </a>
                    </nav>
                </div>
            </header>

            <main class=css::main>{children()}</main>

            <footer class=css::footer>
                <p>
                    "Pokémon data provided by "
                    <a href=DATA_SOURCE_URL target="_blank" rel="noopener noreferrer">
                        "PokéAPI "
                        <Icon icon=ic::EXTERNAL_LINK />
                    </a>
                </p>
            </footer>
        </div>
    }
}

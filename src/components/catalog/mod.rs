//! Catalog page: filter form above the infinite card grid.

mod item_grid;
mod search_form;

use leptos::prelude::*;

use crate::app::Catalog;
use crate::models::AppRoute;
use item_grid::ItemGrid;
use search_form::SearchForm;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

#[component]
pub fn CatalogPage(catalog: Catalog, route: Memo<AppRoute>) -> impl IntoView {
    view! {
        <div class=css::page>
            <h1 class=css::title>"Pokémon Search"</h1>
            <SearchForm catalog=catalog route=route />
            <ItemGrid catalog=catalog />
        </div>
    }
}

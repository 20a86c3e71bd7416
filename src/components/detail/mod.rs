//! Detail page for a single item.
//!
//! Fetched on mount by name. Any failure, including an unknown name,
//! renders the not-found page.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::Catalog;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::icons as ic;
use crate::components::not_found::NotFound;
use crate::config::detail::MOVE_LIMIT;
use crate::models::{AppRoute, ItemDetail};
use crate::utils::format::{capitalize, format_dex_number, humanize, stat_bar_percent};

stylance::import_crate_style!(css, "src/components/detail/detail.module.css");

#[component]
pub fn DetailPage(catalog: Catalog, name: String) -> impl IntoView {
    let api = catalog.api();
    let detail = LocalResource::new({
        let name = name.clone();
        move || {
            let api = Rc::clone(&api);
            let name = name.clone();
            async move { api.get_item_detail(&name).await }
        }
    });

    let crumbs = AppRoute::detail(name).breadcrumbs();

    view! {
        <Suspense fallback=|| view! {
            <div class=css::loading>
                <div class=css::spinner></div>
            </div>
        }>
            {move || detail.get().map(|result| match result {
                Ok(item) => view! {
                    <div class=css::page>
                        <Breadcrumb crumbs=crumbs.clone() />
                        <DetailCard item=item />
                        <a href=move || catalog.current_route().to_hash() class=css::back_link>
                            <Icon icon=ic::ARROW_LEFT />
                            <span>"Back to Pokémon list"</span>
                        </a>
                    </div>
                }
                .into_any(),
                Err(e) => {
                    leptos::logging::warn!("detail page unavailable: {}", e);
                    view! { <NotFound /> }.into_any()
                }
            })}
        </Suspense>
    }
}

#[component]
fn DetailCard(item: ItemDetail) -> impl IntoView {
    let title = capitalize(&item.name);

    view! {
        <article class=css::card>
            <div class=css::image_panel>
                <img src=item.image_variants.preferred().to_string() alt=title.clone() class=css::image />
            </div>

            <div class=css::info>
                <header class=css::heading>
                    <h1 class=css::name>{title}</h1>
                    <span class=css::number>{format_dex_number(item.id)}</span>
                </header>

                <section class=css::section>
                    <h2 class=css::section_title>"Types"</h2>
                    <div class=css::badges>
                        {item
                            .categories
                            .iter()
                            .map(|category| view! { <span class=css::badge>{category.clone()}</span> })
                            .collect_view()}
                    </div>
                </section>

                <section class=css::section>
                    <h2 class=css::section_title>"Abilities"</h2>
                    <ul class=css::list>
                        {item
                            .abilities
                            .iter()
                            .map(|ability| view! { <li>{humanize(ability)}</li> })
                            .collect_view()}
                    </ul>
                </section>

                <section class=css::section>
                    <h2 class=css::section_title>"Base Stats"</h2>
                    <div class=css::stats>
                        {item
                            .stats
                            .iter()
                            .map(|(kind, value)| {
                                let width = format!("width: {:.1}%", stat_bar_percent(value));
                                view! {
                                    <div class=css::stat_row>
                                        <span class=css::stat_name>{humanize(kind.key())}</span>
                                        <span class=css::stat_value>{value}</span>
                                        <div class=css::stat_track>
                                            <div class=css::stat_bar style=width></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class=css::section>
                    <h2 class=css::section_title>"Moves"</h2>
                    <ul class=css::moves>
                        {item
                            .moves
                            .iter()
                            .take(MOVE_LIMIT)
                            .map(|name| view! { <li class=css::move_item>{humanize(name)}</li> })
                            .collect_view()}
                    </ul>
                </section>
            </div>
        </article>
    }
}

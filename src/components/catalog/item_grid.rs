//! Card grid with infinite scroll.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_intersection_observer;

use crate::app::Catalog;
use crate::components::icons as ic;
use crate::models::{AppRoute, ItemDetail};
use crate::utils::format::capitalize;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

/// Render-relevant slice of the session.
#[derive(Clone, Debug, PartialEq)]
struct GridState {
    visible: Vec<ItemDetail>,
    search: String,
    loading: bool,
    error: Option<&'static str>,
}

#[component]
pub fn ItemGrid(catalog: Catalog) -> impl IntoView {
    let state = Memo::new(move |_| {
        catalog.read(|s| GridState {
            visible: s.visible_items().cloned().collect(),
            search: s.search_term().to_string(),
            loading: s.is_loading(),
            error: s.error_message(),
        })
    });

    // Auto-load while the sentinel is on screen. Re-checked after every
    // state change, so a page that does not fill the viewport pulls the next.
    let sentinel = NodeRef::<html::Div>::new();
    let sentinel_visible = RwSignal::new(false);
    use_intersection_observer(sentinel, move |entries, _| {
        if let Some(entry) = entries.last() {
            sentinel_visible.set(entry.is_intersecting());
        }
    });
    Effect::new(move |_| {
        if sentinel_visible.get() && catalog.read(|s| s.auto_load_enabled()) {
            catalog.load_more();
        }
    });

    let is_empty = move || state.with(|s| s.visible.is_empty());

    view! {
        <section class=css::results>
            <Show when=move || state.with(|s| !s.search.is_empty()) && !is_empty()>
                <p class=css::banner>
                    {move || state.with(|s| {
                        format!("Found {} Pokémon matching \"{}\"", s.visible.len(), s.search)
                    })}
                </p>
            </Show>

            {move || state.with(|s| s.error).map(|message| view! {
                <div class=css::error>
                    <Icon icon=ic::WARNING />
                    <span>{message}</span>
                    <button class=css::retry on:click=move |_| catalog.load_more()>
                        <Icon icon=ic::RETRY />
                        <span>"Retry"</span>
                    </button>
                </div>
            })}

            {move || {
                if !is_empty() {
                    return None;
                }
                let (loading, failed) = state.with(|s| (s.loading, s.error.is_some()));
                if loading {
                    Some(view! { <Loader full=true /> }.into_any())
                } else if !failed {
                    Some(view! {
                        <p class=css::empty>"No Pokemon found matching your search criteria."</p>
                    }.into_any())
                } else {
                    None
                }
            }}

            <div class=css::grid>
                <For
                    each=move || state.with(|s| s.visible.clone().into_iter().enumerate().collect::<Vec<_>>())
                    key=|(index, item)| (*index, item.id)
                    children=move |(_, item)| view! { <ItemCard item=item /> }
                />
            </div>

            <Show when=move || state.with(|s| s.loading) && !is_empty()>
                <Loader full=false />
            </Show>

            <div node_ref=sentinel class=css::sentinel aria-hidden="true"></div>
        </section>
    }
}

#[component]
fn ItemCard(item: ItemDetail) -> impl IntoView {
    let href = AppRoute::detail(&item.name).to_hash();
    let images = item.image_variants.clone();
    let fallback = RwSignal::new(false);
    let loaded = RwSignal::new(false);

    let src = move || {
        if fallback.get() {
            images.default.clone()
        } else {
            images.preferred().to_string()
        }
    };

    view! {
        <article class=css::card>
            <div class=css::image_frame>
                <img
                    src=src
                    alt=item.name.clone()
                    loading="lazy"
                    class=move || if loaded.get() { css::image_loaded } else { css::image }
                    on:load=move |_| loaded.set(true)
                    on:error=move |_| {
                        if !fallback.get_untracked() {
                            fallback.set(true);
                        } else {
                            loaded.set(true);
                        }
                    }
                />
            </div>
            <div class=css::card_body>
                <h2 class=css::card_title>{capitalize(&item.name)}</h2>
                <div class=css::badges>
                    {item
                        .categories
                        .iter()
                        .map(|category| view! { <span class=css::badge>{category.clone()}</span> })
                        .collect_view()}
                </div>
                <a href=href class=css::details_link>
                    <span>"Details"</span>
                    <Icon icon=ic::ARROW_RIGHT />
                </a>
            </div>
        </article>
    }
}

#[component]
fn Loader(full: bool) -> impl IntoView {
    view! {
        <div class=if full { css::loader_full } else { css::loader }>
            <div class=css::spinner></div>
        </div>
    }
}

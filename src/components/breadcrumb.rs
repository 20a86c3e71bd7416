//! Breadcrumb trail.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::Crumb;

stylance::import_crate_style!(css, "src/components/breadcrumb.module.css");

#[component]
pub fn Breadcrumb(crumbs: Vec<Crumb>) -> impl IntoView {
    let last = crumbs.len().saturating_sub(1);

    view! {
        <nav class=css::trail aria-label="Breadcrumb">
            {crumbs
                .into_iter()
                .enumerate()
                .map(|(i, crumb)| {
                    let entry = if crumb.current {
                        view! { <span class=css::current aria-current="page">{crumb.label}</span> }
                            .into_any()
                    } else {
                        view! { <a href=crumb.href class=css::link>{crumb.label}</a> }.into_any()
                    };
                    view! {
                        {entry}
                        {(i < last).then(|| view! {
                            <span class=css::separator><Icon icon=ic::CHEVRON_RIGHT /></span>
                        })}
                    }
                })
                .collect_view()}
        </nav>
    }
}

//! Loading / error / populated wrapper shared by every list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages pass their table or card grid as children; this frame decides
//! whether they render at all. Children only render once the collection has
//! loaded, so the error panel never sits next to data rows.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::collection::LoadStatus;

/// Header, count label and status handling around a collection view.
#[component]
pub fn CollectionFrame(
    status: Signal<LoadStatus>,
    /// Heading shown above the data, e.g. `"👥 OctoFit Users"`.
    title: &'static str,
    /// Noun used in the loading message.
    noun: &'static str,
    /// Text before the count, e.g. `"Total Users: "`.
    count_prefix: &'static str,
    /// Text after the count.
    #[prop(optional)]
    count_suffix: &'static str,
    /// Bootstrap color for the spinner.
    #[prop(default = "primary")]
    accent: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    move || match status.get() {
        LoadStatus::Loading => view! {
            <div class="container mt-5 text-center">
                <div class=format!("spinner-border text-{accent}") role="status">
                    <span class="visually-hidden">"Loading..."</span>
                </div>
                <h3 class="mt-3">{format!("Loading {noun}...")}</h3>
            </div>
        }
        .into_any(),
        LoadStatus::Failed(message) => view! {
            <div class="container mt-5">
                <div class="alert alert-danger" role="alert">
                    <h4 class="alert-heading">"Error!"</h4>
                    <p>{message}</p>
                </div>
            </div>
        }
        .into_any(),
        LoadStatus::Loaded(count) => {
            let children = children.clone();
            view! {
                <div class="container mt-4">
                    <div class="mb-4">
                        <h2>{title}</h2>
                        <p class="text-muted collection-count">
                            {count_prefix}
                            <strong>{count}</strong>
                            {count_suffix}
                        </p>
                    </div>
                    {children()}
                </div>
            }
            .into_any()
        }
    }
}

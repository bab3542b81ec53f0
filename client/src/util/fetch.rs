//! Collection loading hooks shared by the list pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page calls [`use_collection`] once while mounting. The fetch itself only
//! runs in the browser; SSR renders the initial `Loading` state and hydration
//! picks up from there. A page never has more than one request in flight:
//! dependent loads go through [`load_in_order`].

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::net::api::{self, Collection};
use crate::state::collection::CollectionState;

/// Base URL provided by the app root, or resolved on the spot.
pub fn api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_browser)
}

/// Create the view state for `collection` and start its one fetch.
pub fn use_collection<T>(collection: Collection) -> RwSignal<CollectionState<T>>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let state = RwSignal::new(CollectionState::default());
    let config = api_config();
    spawn_task(async move {
        reload(state, config, collection).await;
    });
    state
}

/// Run `task` on the browser event loop. Outside the browser there is no
/// backend to reach, so the task is dropped unpolled.
pub fn spawn_task(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(task);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(task);
    }
}

/// Enter `Loading`, fetch, and settle into `Loaded` or `Failed`. Returns
/// whether the collection ended up loaded.
///
/// Writes go through `try_update`, so a page unmounted mid-fetch simply drops
/// the result.
pub async fn reload<T>(state: RwSignal<CollectionState<T>>, config: ApiConfig, collection: Collection) -> bool
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    state.try_update(CollectionState::begin_load);
    let result = api::fetch_collection::<T>(&config, collection).await;
    #[cfg(feature = "hydrate")]
    {
        match &result {
            Ok(items) => log::debug!("loaded {} {}", items.len(), collection.noun()),
            Err(e) => log::error!("error fetching {}: {e}", collection.noun()),
        }
    }
    state
        .try_update(|s| {
            s.finish(result);
            s.is_loaded()
        })
        .unwrap_or(false)
}

/// Load `first`, then `second` once `first` has loaded. `second` is left
/// untouched when `first` fails.
pub async fn load_in_order<T, U>(
    config: ApiConfig,
    first: (RwSignal<CollectionState<T>>, Collection),
    second: (RwSignal<CollectionState<U>>, Collection),
) where
    T: DeserializeOwned + Send + Sync + 'static,
    U: DeserializeOwned + Send + Sync + 'static,
{
    if reload(first.0, config.clone(), first.1).await {
        reload(second.0, config, second.1).await;
    }
}

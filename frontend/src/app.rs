//! # App Module
//!
//! Application shell for the zoo admin UI. Holds one [`ResourceView`] per
//! screen and the current [`Route`]; switching routes mounts the screen being
//! shown, which reloads its list from the server.

use log::info;
use shared::{AnimalFields, CareFields};

use crate::components::{Notifier, ResourceView, ViewError};
use crate::config::ClientConfig;
use crate::routes::Route;
use crate::services::{HttpResourceClient, ResourceApi};

pub type AnimalsView<A> = ResourceView<AnimalFields, A>;
pub type CaresView<A> = ResourceView<CareFields, A>;

/// The whole admin UI: both screens and the active one
pub struct AdminApp<AA, CA> {
    pub animals: AnimalsView<AA>,
    pub cares: CaresView<CA>,
    route: Route,
}

impl AdminApp<HttpResourceClient<AnimalFields>, HttpResourceClient<CareFields>> {
    /// Wire both screens to the configured server, sharing one connection pool
    pub fn from_config(config: &ClientConfig) -> Self {
        info!("Using zoo admin API at {}", config.api_base_url);
        let client = reqwest::Client::new();
        Self::new(
            HttpResourceClient::with_client(client.clone(), config.api_base_url.clone()),
            HttpResourceClient::with_client(client, config.api_base_url.clone()),
        )
    }
}

impl<AA: ResourceApi<AnimalFields>, CA: ResourceApi<CareFields>> AdminApp<AA, CA> {
    pub fn new(animals_api: AA, cares_api: CA) -> Self {
        Self {
            animals: ResourceView::new(animals_api),
            cares: ResourceView::new(cares_api),
            route: Route::default(),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Show the screen for `path` and load its list
    pub async fn navigate(&mut self, path: &str, notifier: &mut impl Notifier) -> Result<Route, ViewError> {
        let route = Route::from_path(path);
        if route != self.route {
            self.close_forms();
        }
        self.route = route;
        info!("Navigating to {}", route.path());

        match route {
            Route::Animals => self.animals.mount(notifier).await?,
            Route::Cares => self.cares.mount(notifier).await?,
        }
        Ok(route)
    }

    fn close_forms(&mut self) {
        self.animals.close_form();
        self.cares.close_form();
    }
}

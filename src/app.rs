//! App Shell
//!
//! Static routing from paths to pages, plus the navigation, landing and
//! not-found views that surround them.

use crate::endpoint::Resource;

/// Application name shown in the navigation bar
pub const APP_NAME: &str = "OctoFit Tracker";

/// A client-side route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page at `/`
    Home,
    /// One of the five resource pages
    Page(Resource),
    NotFound,
}

impl Route {
    /// Map a path to its route. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }
        Resource::from_route(trimmed)
            .map(Route::Page)
            .unwrap_or(Route::NotFound)
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Page(resource) => resource.route(),
            Route::NotFound => "/404",
        }
    }
}

/// Landing page cards: (title, blurb, target)
pub const HOME_CARDS: [(&str, &str, Resource); 4] = [
    (
        "Track Activities",
        "Log your workouts and monitor progress",
        Resource::Activities,
    ),
    (
        "Compete",
        "See how you rank against others",
        Resource::Leaderboard,
    ),
    ("Team Up", "Join teams and work together", Resource::Teams),
    (
        "Get Workouts",
        "Discover personalized routines",
        Resource::Workouts,
    ),
];

/// Navigation bar with the active section bracketed
pub fn render_nav(active: Route) -> String {
    let links: Vec<String> = Resource::ALL
        .iter()
        .map(|resource| {
            if active == Route::Page(*resource) {
                format!("[{}]", resource.title())
            } else {
                resource.title().to_string()
            }
        })
        .collect();
    format!("{} | {}\n\n", APP_NAME, links.join("  "))
}

/// Landing page
pub fn render_home() -> String {
    let mut out = format!("Welcome to {}\n", APP_NAME);
    out.push_str("Track your fitness journey, compete with your team, and achieve your goals!\n\n");
    for (title, blurb, target) in HOME_CARDS {
        out.push_str(&format!("* {:<16} {} ({})\n", title, blurb, target.route()));
    }
    out
}

pub fn render_not_found(path: &str) -> String {
    format!(
        "Page Not Found\nNo page lives at '{}'. Try one of: {}\n",
        path,
        Resource::ALL
            .iter()
            .map(|r| r.route())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

pub fn render_footer() -> String {
    format!("\n{} - Track. Compete. Achieve.\n", APP_NAME)
}

#[cfg(feature = "native")]
pub use shell::{Rendered, Shell};

#[cfg(feature = "native")]
mod shell {
    use serde::Serialize;
    use std::sync::Arc;

    use super::*;
    use crate::client::{ApiClient, RecordSource};
    use crate::endpoint::EndpointResolver;
    use crate::pages::{
        self, ActivitiesPage, LeaderboardPage, Page, TeamsPage, UsersPage, WorkoutsPage,
    };
    use crate::view::{ViewState, ViewStateHolder};

    /// Output of opening one route
    #[derive(Debug, Clone)]
    pub struct Rendered {
        pub route: Route,
        /// Page body without navigation or footer
        pub body: String,
        /// Error message when the page ended in `Failed`
        pub error: Option<String>,
    }

    impl Rendered {
        /// Body wrapped in navigation and footer
        pub fn full(&self) -> String {
            format!("{}{}{}", render_nav(self.route), self.body, render_footer())
        }
    }

    /// Native shell: activates one page at a time against a record source
    #[derive(Clone)]
    pub struct Shell {
        source: Arc<dyn RecordSource>,
        resolver: EndpointResolver,
    }

    impl Shell {
        pub fn new(client: ApiClient) -> Self {
            let resolver = client.resolver().clone();
            Self {
                source: Arc::new(client),
                resolver,
            }
        }

        /// Shell over any record source
        pub fn with_source(source: Arc<dyn RecordSource>, resolver: EndpointResolver) -> Self {
            Self { source, resolver }
        }

        pub fn resolver(&self) -> &EndpointResolver {
            &self.resolver
        }

        /// Route a path and render whatever lives there
        pub async fn open(&self, path: &str) -> Rendered {
            let route = Route::parse(path);
            tracing::debug!(path = %path, route = ?route, "Opening route");

            match route {
                Route::Home => Rendered {
                    route,
                    body: render_home(),
                    error: None,
                },
                Route::NotFound => Rendered {
                    route,
                    body: render_not_found(path),
                    error: None,
                },
                Route::Page(resource) => self.open_resource(resource).await,
            }
        }

        /// Render one resource page
        pub async fn open_resource(&self, resource: Resource) -> Rendered {
            match resource {
                Resource::Activities => self.render::<ActivitiesPage>().await,
                Resource::Leaderboard => self.render::<LeaderboardPage>().await,
                Resource::Teams => self.render::<TeamsPage>().await,
                Resource::Users => self.render::<UsersPage>().await,
                Resource::Workouts => self.render::<WorkoutsPage>().await,
            }
        }

        /// Typed records of one resource as JSON
        pub async fn records_json(&self, resource: Resource) -> Result<serde_json::Value, String> {
            match resource {
                Resource::Activities => self.json::<ActivitiesPage>().await,
                Resource::Leaderboard => self.json::<LeaderboardPage>().await,
                Resource::Teams => self.json::<TeamsPage>().await,
                Resource::Users => self.json::<UsersPage>().await,
                Resource::Workouts => self.json::<WorkoutsPage>().await,
            }
        }

        /// Activate a fresh page, wait for its fetch, and hand back the state.
        ///
        /// The holder is dropped on return, which deactivates the page.
        pub async fn load<P: Page>(&self) -> ViewState<P::Record> {
            let holder: ViewStateHolder<P::Record> = ViewStateHolder::new();
            holder.activate(Arc::clone(&self.source), self.resolver.resolve(P::RESOURCE));
            holder.settled().await
        }

        async fn render<P: Page>(&self) -> Rendered {
            let state = self.load::<P>().await;
            Rendered {
                route: Route::Page(P::RESOURCE),
                body: pages::render_page::<P>(&state),
                error: state.error().map(String::from),
            }
        }

        async fn json<P: Page>(&self) -> Result<serde_json::Value, String>
        where
            P::Record: Serialize,
        {
            match self.load::<P>().await {
                ViewState::Failed { message, .. } => Err(message),
                state => serde_json::to_value(state.records()).map_err(|e| e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/teams"), Route::Page(Resource::Teams));
        assert_eq!(Route::parse("/teams/"), Route::Page(Resource::Teams));
        assert_eq!(Route::parse("/leaderboard"), Route::Page(Resource::Leaderboard));
        assert_eq!(Route::parse("/teams/1"), Route::NotFound);
        assert_eq!(Route::parse("/settings"), Route::NotFound);
    }

    #[test]
    fn test_route_paths_round_trip() {
        for resource in Resource::ALL {
            let route = Route::Page(resource);
            assert_eq!(Route::parse(route.path()), route);
        }
        assert_eq!(Route::parse(Route::Home.path()), Route::Home);
    }

    #[test]
    fn test_nav_marks_active() {
        let nav = render_nav(Route::Page(Resource::Users));
        assert!(nav.starts_with(APP_NAME));
        assert!(nav.contains("[Users]"));
        assert!(!nav.contains("[Teams]"));
    }

    #[test]
    fn test_home_links_every_card() {
        let home = render_home();
        for (title, _, target) in HOME_CARDS {
            assert!(home.contains(title));
            assert!(home.contains(target.route()));
        }
    }
}

//! End-to-end: the development backend on an ephemeral port, driven through
//! the HTTP client, the view state holder and the pages.

use octofit::app::{Route, Shell};
use octofit::client::{ApiClient, ErrorKind, RecordSource};
use octofit::config::ServerConfig;
use octofit::endpoint::{EndpointResolver, Resource};
use octofit::models::Team;
use octofit::server::{serve_with_shutdown, AppState};
use octofit::view::{ViewState, ViewStateHolder};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    client: ApiClient,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn start(paginate: bool) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let config = ServerConfig {
        paginate,
        ..ServerConfig::default()
    };
    tokio::spawn(serve_with_shutdown(listener, AppState::new(config), async {
        let _ = rx.await;
    }));

    let resolver = EndpointResolver::new(None, Some(format!("http://{}", addr)));
    TestServer {
        client: ApiClient::new(resolver, Duration::from_secs(5)).unwrap(),
        shutdown: Some(tx),
    }
}

#[tokio::test]
async fn test_paginated_and_bare_agree() {
    let paged = start(true).await;
    let bare = start(false).await;

    for resource in Resource::ALL {
        let a = paged.client.fetch(resource).await.unwrap();
        let b = bare.client.fetch(resource).await.unwrap();
        assert!(!a.is_empty(), "{} is seeded", resource);
        assert_eq!(a, b, "{} differs between shapes", resource);
    }
}

#[tokio::test]
async fn test_leaderboard_page() {
    let server = start(true).await;
    let shell = Shell::new(server.client.clone());

    let rendered = shell.open("/leaderboard").await;
    assert_eq!(rendered.route, Route::Page(Resource::Leaderboard));
    assert_eq!(rendered.error, None);
    assert!(rendered.body.contains("Competitors: 2"));
    assert!(rendered.body.contains("Leader: Marvel"));

    // server order, not points order
    let row = |medal: &str| {
        rendered
            .body
            .lines()
            .find(|line| line.contains(medal))
            .unwrap()
            .to_string()
    };
    assert!(row("Gold").contains("Marvel"));
    assert!(row("Silver").contains("DC"));
    assert!(row("Silver").contains("800"));
}

#[tokio::test]
async fn test_activities_totals() {
    let server = start(false).await;
    let rendered = Shell::new(server.client.clone()).open("/activities/").await;

    assert!(rendered.body.contains("Total activities: 4"));
    assert!(rendered.body.contains("Total minutes: 175"));
    assert!(rendered.body.contains("Calories burned: 1550"));
    assert!(rendered.body.contains("Wonder Woman"));
}

#[tokio::test]
async fn test_holder_against_server() {
    let server = start(true).await;
    let source: Arc<dyn RecordSource> = Arc::new(server.client.clone());
    let url = server.client.url_for(Resource::Teams);

    let holder: ViewStateHolder<Team> = ViewStateHolder::new();
    assert!(holder.activate(Arc::clone(&source), url.clone()).is_some());

    match holder.settled().await {
        ViewState::Ready { records } => {
            let names: Vec<&str> = records.iter().map(|t| t.display_name()).collect();
            assert_eq!(names, ["Marvel", "DC"]);
        }
        other => panic!("expected ready, got {:?}", other),
    }

    assert!(holder.activate(source, url).is_none());
}

#[tokio::test]
async fn test_unknown_resource_is_status_error() {
    let server = start(true).await;
    let url = format!("{}/api/badges/", server.client.resolver().base_url());

    let err = server.client.fetch_records(&url).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Request);
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[tokio::test]
async fn test_server_gone_fails_page() {
    let server = start(true).await;
    let client = server.client.clone();
    drop(server);
    tokio::time::sleep(Duration::from_millis(100)).await;

    let rendered = Shell::new(client).open("/users").await;
    assert!(rendered.error.is_some());
    assert!(rendered.body.contains("[!] Error loading data"));
}

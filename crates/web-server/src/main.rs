mod actions;
mod clients;
mod error;
mod forms;
mod params;
mod persons;
mod views;

use std::sync::Arc;

use anyhow::Result;
use application::DirectoryApp;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use config::Config;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<DirectoryApp>,
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .nest("/person", persons::router())
        .nest("/client", clients::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> Html<String> {
    views::home()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("web_server=debug,tower_http=debug")
        .init();

    info!("Starting directory web server");

    let config = Config::from_env();
    info!("Using database: {}", config.database_path);

    let app = DirectoryApp::new(&config.database_path)?;
    let state = AppState { app: Arc::new(app) };

    let bind_address = format!("{}:{}", config.http_host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, router(state)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use infrastructure::Database;
    use tower::util::ServiceExt;

    fn test_router() -> Router {
        let db = Database::new_in_memory().expect("in-memory database");
        let app = DirectoryApp::from_pool(db.get_pool().clone());
        router(AppState { app: Arc::new(app) })
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const JANE: &str = "first_name=Jane&last_name=Doe&email_address=jane%40x.test\
                        &street_address=1+Main+St&city=Springfield&state=IL&zip_code=62701";
    const ACME: &str = "company_name=Acme&website=acme.test&phone=5551234567\
                        &street_address=1+Main+St&city=Springfield&state=IL&zip_code=62701";

    #[tokio::test]
    async fn home_and_listings_render() {
        let app = test_router();

        for uri in ["/", "/person/list", "/client/list"] {
            let response = app.clone().oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        }
    }

    #[tokio::test]
    async fn creating_a_person_redirects_to_the_listing() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(form_request("/person/create", JANE))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/person/list");

        let view = app
            .oneshot(get_request("/person/person-view/1"))
            .await
            .unwrap();
        assert_eq!(view.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_create_redisplays_the_form() {
        let app = test_router();

        let body = JANE.replace("first_name=Jane", "first_name=");
        let response = app
            .clone()
            .oneshot(form_request("/person/create", &body))
            .await
            .unwrap();

        // Form redisplay, not a redirect
        assert_eq!(response.status(), StatusCode::OK);

        let missing = app.oneshot(get_request("/person/person-view/1")).await.unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_entities_map_to_404() {
        let app = test_router();

        for uri in [
            "/person/person-view/99",
            "/client/client-view/99",
            "/person/edit/99",
            "/client/delete/99",
        ] {
            let response = app.clone().oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
        }
    }

    #[tokio::test]
    async fn malformed_ids_map_to_400() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(get_request("/client/edit/abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(form_request("/client/edit/10x20", "command=Add+Contact"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn adding_an_association_redirects_and_duplicates_conflict() {
        let app = test_router();

        app.clone()
            .oneshot(form_request("/person/create", JANE))
            .await
            .unwrap();
        app.clone()
            .oneshot(form_request("/client/create", ACME))
            .await
            .unwrap();

        let body = "entity_id=1&referrer=view";
        let response = app
            .clone()
            .oneshot(form_request("/client/available-contacts/1", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/client/client-view/1");

        let duplicate = app
            .oneshot(form_request("/client/available-contacts/1", body))
            .await
            .unwrap();
        assert_eq!(duplicate.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn cancelled_delete_keeps_the_record() {
        let app = test_router();

        app.clone()
            .oneshot(form_request("/person/create", JANE))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(form_request("/person/delete", "entity_id=1&command=Cancel"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let view = app
            .clone()
            .oneshot(get_request("/person/person-view/1"))
            .await
            .unwrap();
        assert_eq!(view.status(), StatusCode::OK);

        let confirmed = app
            .clone()
            .oneshot(form_request("/person/delete", "entity_id=1&command=Delete"))
            .await
            .unwrap();
        assert_eq!(confirmed.status(), StatusCode::SEE_OTHER);

        let gone = app
            .oneshot(get_request("/person/person-view/1"))
            .await
            .unwrap();
        assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    }
}

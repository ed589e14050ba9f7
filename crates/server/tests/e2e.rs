use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use server::{startup, AppState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = startup::build_app(&AppConfig::default(), AppState::in_memory())?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_blog_flow_over_tcp() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.post(format!("{}/posts", app.base_url))
        .json(&json!({"title": "Hello", "content": "World"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_str().expect("id").to_string();

    let posts = c.get(format!("{}/posts", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    assert_eq!(posts, json!([{"id": id, "title": "Hello", "content": "World"}]));

    let res = c.get(format!("{}/me", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let user = json!({"email": "e2e@example.com", "password": "S3curePass!", "firstName": "E", "lastName": "Two"});
    let res = c.post(format!("{}/register", app.base_url)).json(&user).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.post(format!("{}/register", app.base_url)).json(&user).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let me = c.get(format!("{}/me", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    assert_eq!(me["email"], "e2e@example.com");
    Ok(())
}

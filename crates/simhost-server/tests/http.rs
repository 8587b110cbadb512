use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use simhost_server::{router, ServerState};
use simhost_theme::{SimHost, ThemeInput};
use tokio::net::TcpListener;

const CHROME_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
const FIREFOX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

async fn spawn(host: SimHost, theme: ThemeInput, cache_dir: &Path) -> SocketAddr {
    let state = ServerState::prepare(host, theme, cache_dir.to_path_buf())
        .await
        .unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(Arc::new(state))).await.unwrap();
    });
    addr
}

async fn get(addr: SocketAddr, path: &str, user_agent: Option<&str>) -> reqwest::Response {
    let mut request = reqwest::Client::new().get(format!("http://{addr}{path}"));
    if let Some(ua) = user_agent {
        request = request.header(reqwest::header::USER_AGENT, ua);
    }
    request.send().await.unwrap()
}

#[tokio::test]
async fn builtin_stylesheet_is_rewritten_for_chrome() {
    let cache = tempfile::tempdir().unwrap();
    let addr = spawn(SimHost::Builtin, ThemeInput::None, cache.path()).await;

    let response = get(addr, "/simulator/sim-host.css", Some(CHROME_UA)).await;
    assert_eq!(response.status(), 200);
    let content_type = response.headers()[reqwest::header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/css"));

    let css = response.text().await.unwrap();
    assert!(!css.contains("BEGIN !CHROME"));
    assert!(css.contains("BEGIN CHROME"));
    assert!(css.contains("/deep/"));
    assert!(!css.contains("var(--"));
}

#[tokio::test]
async fn builtin_stylesheet_is_rewritten_for_other_browsers() {
    let cache = tempfile::tempdir().unwrap();
    let addr = spawn(SimHost::Builtin, ThemeInput::None, cache.path()).await;

    for ua in [Some(FIREFOX_UA), None] {
        let css = get(addr, "/simulator/sim-host.css", ua)
            .await
            .text()
            .await
            .unwrap();
        assert!(!css.contains("BEGIN CHROME"));
        assert!(css.contains("BEGIN !CHROME"));
        for token in ["/deep/", "::shadow", "::content", ">>>", "/shadow/"] {
            assert!(!css.contains(token), "{token} left in output");
        }
        assert!(!css.contains("var(--"));
    }
}

#[tokio::test]
async fn directory_host_streams_its_own_stylesheet() {
    let cache = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    std::fs::write(
        root.path().join("sim-host.css"),
        "x /deep/ y { color: var(--button-hover-color); }\n",
    )
    .unwrap();

    let addr = spawn(
        SimHost::Directory(root.path().into()),
        ThemeInput::None,
        cache.path(),
    )
    .await;

    let css = get(addr, "/simulator/sim-host.css", Some(FIREFOX_UA))
        .await
        .text()
        .await
        .unwrap();
    assert_eq!(css, "x   y { color: black; }\n");

    let theme = get(addr, "/simulator/theme.css", None).await;
    assert_eq!(theme.status(), 404);
}

#[tokio::test]
async fn missing_host_stylesheet_is_not_found() {
    let cache = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    let addr = spawn(
        SimHost::Directory(root.path().into()),
        ThemeInput::None,
        cache.path(),
    )
    .await;

    let response = get(addr, "/simulator/sim-host.css", Some(CHROME_UA)).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn non_ascii_user_agent_still_counts_as_chrome() {
    let cache = tempfile::tempdir().unwrap();
    let addr = spawn(SimHost::Builtin, ThemeInput::None, cache.path()).await;

    let ua = reqwest::header::HeaderValue::from_bytes(b"Mozilla/5.0 Chrome/120.0 \xe9t\xe9").unwrap();
    let css = reqwest::Client::new()
        .get(format!("http://{addr}/simulator/sim-host.css"))
        .header(reqwest::header::USER_AGENT, ua)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(css.contains("BEGIN CHROME"));
    assert!(!css.contains("BEGIN !CHROME"));
}

#[tokio::test]
async fn theme_stylesheet_reflects_override() {
    let cache = tempfile::tempdir().unwrap();
    let theme = ThemeInput::RawJson(r#"{"default": {"": {"font-size": "26px"}}}"#.into());
    let addr = spawn(SimHost::Builtin, theme, cache.path()).await;

    let response = get(addr, "/simulator/theme.css", None).await;
    assert_eq!(response.status(), 200);
    let css = response.text().await.unwrap();
    assert!(css.contains("font-size: 26px;"));
    assert!(css.contains("height: 56px;"));

    let cached: Vec<_> = std::fs::read_dir(cache.path()).unwrap().collect();
    assert_eq!(cached.len(), 1);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let cache = tempfile::tempdir().unwrap();
    let addr = spawn(SimHost::Builtin, ThemeInput::None, cache.path()).await;
    let response = get(addr, "/simulator/other.css", None).await;
    assert_eq!(response.status(), 404);
}

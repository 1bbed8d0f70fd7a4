use chrono::DateTime;
use serde_json::Value;
use signboard_model::{Clipboard, FixedClock, SignupDraft, Slot, SlotDate};
use signboard_server::{build_router, ApiConfig, AppState};
use signboard_store::{LocalFsStore, SlotStore};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

fn fixed_clock() -> FixedClock {
    FixedClock::new(
        DateTime::parse_from_rfc3339("2026-08-07T09:00:00-04:00").expect("test clock"),
    )
}

async fn spawn_board(data_root: &Path) -> SocketAddr {
    let store = Arc::new(LocalFsStore::new(data_root.to_path_buf()));
    let state = AppState::with_config(store, Arc::new(fixed_clock()), ApiConfig::default());
    state.ready.store(true, Ordering::Relaxed);
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_request(addr: SocketAddr, raw: String) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect");
    stream.write_all(raw.as_bytes()).await.expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

async fn send_get(addr: SocketAddr, path: &str, headers: &[(&str, &str)]) -> (u16, String, String) {
    let mut req = format!("GET {path} HTTP/1.1\r\nhost: {addr}\r\nconnection: close\r\n");
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    req.push_str("\r\n");
    send_request(addr, req).await
}

async fn send_post(addr: SocketAddr, path: &str, body: &str) -> (u16, String, String) {
    let req = format!(
        "POST {path} HTTP/1.1\r\nhost: {addr}\r\nconnection: close\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{body}",
        body.len()
    );
    send_request(addr, req).await
}

fn header_value<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines()
        .find_map(|line| line.strip_prefix(&format!("{name}: ")))
}

fn error_code(body: &str) -> String {
    let json: Value = serde_json::from_str(body).expect("error json");
    json["error"]["code"]
        .as_str()
        .expect("error code string")
        .to_string()
}

#[tokio::test]
async fn health_version_and_clipboard_contract() {
    let tmp = tempdir().expect("tempdir");
    let addr = spawn_board(tmp.path()).await;

    let (status, head, body) = send_get(addr, "/healthz", &[]).await;
    assert_eq!(status, 200);
    assert!(header_value(&head, "x-request-id").is_some());
    let json: Value = serde_json::from_str(&body).expect("health json");
    assert_eq!(json["status"], "ok");

    let (status, _, body) = send_get(addr, "/readyz", &[]).await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("ready json");
    assert_eq!(json["status"], "ready");

    let (status, _, body) = send_get(addr, "/v1/version", &[]).await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("version json");
    assert_eq!(json["name"], "signboard-server");
    assert!(json["version"].as_str().is_some_and(|v| !v.is_empty()));

    let (status, _, body) = send_get(addr, "/v1/clipboards", &[]).await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("clipboards json");
    let tokens: Vec<&str> = json["clipboards"]
        .as_array()
        .expect("clipboard array")
        .iter()
        .map(|c| c["token"].as_str().expect("token"))
        .collect();
    assert_eq!(tokens, ["rdo", "am_spare", "pm_spare", "extra_work"]);
    assert_eq!(json["clipboards"][1]["label"], "AM Spare");
}

#[tokio::test]
async fn window_offers_seven_days_from_today() {
    let tmp = tempdir().expect("tempdir");
    let addr = spawn_board(tmp.path()).await;

    let (status, _, body) = send_get(addr, "/v1/window", &[]).await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("window json");
    assert_eq!(json["today"], "2026-08-07");
    let dates: Vec<&str> = json["dates"]
        .as_array()
        .expect("dates array")
        .iter()
        .map(|d| d["date"].as_str().expect("iso date"))
        .collect();
    assert_eq!(dates.len(), 7);
    assert_eq!(dates.first().copied(), Some("2026-08-07"));
    assert_eq!(dates.last().copied(), Some("2026-08-13"));
    let mut sorted = dates.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, dates, "window must be ascending");
}

#[tokio::test]
async fn signup_flow_appends_in_order_and_revalidates() {
    let tmp = tempdir().expect("tempdir");
    let addr = spawn_board(tmp.path()).await;
    let slot_path = "/v1/slots/am_spare/2026-08-09";

    let (status, head, body) = send_get(addr, slot_path, &[]).await;
    assert_eq!(status, 200);
    assert_eq!(header_value(&head, "cache-control"), Some("no-cache"));
    let empty_etag = header_value(&head, "etag").expect("etag present").to_string();
    let json: Value = serde_json::from_str(&body).expect("slot json");
    assert_eq!(json["count"], 0);

    let (status, _, body) = send_post(
        addr,
        &format!("{slot_path}/signups"),
        r#"{"name":"Jane Operator","operator_id":"4821"}"#,
    )
    .await;
    assert_eq!(status, 201);
    let json: Value = serde_json::from_str(&body).expect("created json");
    assert_eq!(json["count"], 1);
    assert_eq!(json["signups"][0]["name"], "Jane Operator");

    let (status, _, body) = send_post(
        addr,
        &format!("{slot_path}/signups"),
        r#"{"name":"Bob Driver","notes":"prefers route 22"}"#,
    )
    .await;
    assert_eq!(status, 201);
    let json: Value = serde_json::from_str(&body).expect("created json");
    assert_eq!(json["count"], 2);
    assert_eq!(json["signups"][0]["name"], "Jane Operator");
    assert_eq!(json["signups"][1]["name"], "Bob Driver");
    assert_eq!(json["signups"][1]["notes"], "prefers route 22");

    let (status, head, _) = send_get(addr, slot_path, &[]).await;
    assert_eq!(status, 200);
    let etag = header_value(&head, "etag").expect("etag present").to_string();
    assert_ne!(etag, empty_etag, "etag must change when the slot changes");

    let (status, head, _) = send_get(addr, slot_path, &[("if-none-match", &etag)]).await;
    assert_eq!(status, 304);
    assert_eq!(header_value(&head, "etag"), Some(etag.as_str()));
}

#[tokio::test]
async fn invalid_paths_bodies_and_dates_are_rejected() {
    let tmp = tempdir().expect("tempdir");
    let addr = spawn_board(tmp.path()).await;

    let (status, _, body) = send_get(addr, "/v1/slots/lunch/2026-08-09", &[]).await;
    assert_eq!(status, 400);
    assert_eq!(error_code(&body), "InvalidPathParameter");

    let (status, _, body) = send_get(addr, "/v1/slots/rdo/08-09-2026", &[]).await;
    assert_eq!(status, 400);
    assert_eq!(error_code(&body), "InvalidPathParameter");

    let (status, _, body) = send_post(
        addr,
        "/v1/slots/rdo/2026-08-09/signups",
        r#"{"name":"   "}"#,
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(error_code(&body), "ValidationFailed");

    // deny_unknown_fields surfaces through the Json extractor.
    let (status, _, body) = send_post(
        addr,
        "/v1/slots/rdo/2026-08-09/signups",
        r#"{"name":"Jane","badge_color":"red"}"#,
    )
    .await;
    assert_eq!(status, 422);
    assert_eq!(error_code(&body), "ValidationFailed");

    // One past the window's last day.
    let (status, _, body) = send_post(
        addr,
        "/v1/slots/rdo/2026-08-14/signups",
        r#"{"name":"Jane"}"#,
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(error_code(&body), "DateOutOfWindow");

    // The rejected signup must not have been written.
    let (status, _, body) = send_get(addr, "/v1/slots/rdo/2026-08-14", &[]).await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("slot json");
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn past_slots_stay_readable_but_reject_new_signups() {
    let tmp = tempdir().expect("tempdir");

    // A record accumulated before the window rolled past its date.
    let store = LocalFsStore::new(tmp.path().to_path_buf());
    let past = Slot::new(
        Clipboard::Rdo,
        SlotDate::parse("2026-08-01").expect("date"),
    );
    let record = SignupDraft {
        name: "Old Timer".to_string(),
        ..SignupDraft::default()
    }
    .into_record(DateTime::parse_from_rfc3339("2026-08-01T07:00:00-04:00").expect("stamp"))
    .expect("record");
    store.append(&past, record).expect("seed past slot");

    let addr = spawn_board(tmp.path()).await;

    let (status, _, body) = send_get(addr, "/v1/slots/rdo/2026-08-01", &[]).await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("slot json");
    assert_eq!(json["count"], 1);
    assert_eq!(json["signups"][0]["name"], "Old Timer");

    let (status, _, body) = send_post(
        addr,
        "/v1/slots/rdo/2026-08-01/signups",
        r#"{"name":"Jane"}"#,
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(error_code(&body), "DateOutOfWindow");
}

#[tokio::test]
async fn board_page_is_served_inline() {
    let tmp = tempdir().expect("tempdir");
    let addr = spawn_board(tmp.path()).await;

    let (status, head, body) = send_get(addr, "/", &[]).await;
    assert_eq!(status, 200);
    assert!(header_value(&head, "content-type")
        .is_some_and(|ct| ct.starts_with("text/html")));
    assert!(body.contains("Operator Signup Board"));
    assert!(body.contains("/v1/clipboards"));
}

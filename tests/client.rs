use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Duration;

use hn_search::models::SearchResponse;
use hn_search::{FetchError, HackerNewsClient, StoryQuery, StorySource};

/// Answers a single request with `status_line` and `body`.
///
/// Returns the endpoint to point the client at and the request line it received.
fn serve_once(status_line: &str, body: &str) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let (tx, rx) = channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let request = String::from_utf8_lossy(&request);
        let _ = tx.send(request.lines().next().unwrap_or_default().to_string());
        stream.write_all(response.as_bytes()).unwrap();
    });

    (format!("http://{}/api/v1/", addr), rx)
}

fn client_for(endpoint: &str) -> HackerNewsClient {
    HackerNewsClient::new(endpoint, Duration::from_secs(5)).unwrap()
}

#[test]
fn query_paths() {
    assert_eq!(StoryQuery::Latest.path(), "search_by_date?tags=story");
    assert_eq!(StoryQuery::Search("rust".into()).path(), "search?query=rust");
    assert_eq!(
        StoryQuery::Search("c++ & rust".into()).path(),
        "search?query=c%2B%2B%20%26%20rust"
    );
}

#[test]
fn endpoint_gets_trailing_slash() {
    let client = HackerNewsClient::new("http://localhost:9/api/v1", Duration::from_secs(1)).unwrap();
    assert_eq!(client.endpoint(), "http://localhost:9/api/v1/");
    assert_eq!(
        client.url_for(&StoryQuery::Latest),
        "http://localhost:9/api/v1/search_by_date?tags=story"
    );
}

#[test]
fn decodes_hits_and_tolerates_nulls() {
    let body = r#"{
        "hits": [
            {
                "title": "Show HN: A thing",
                "author": "someone",
                "url": "https://example.com/thing",
                "points": 120,
                "created_at": "2023-03-01T10:00:00.000Z",
                "objectID": "35000001",
                "num_comments": 17
            },
            {
                "title": null,
                "author": "ghost",
                "url": null,
                "points": null,
                "created_at": "2023-03-02T11:00:00.000Z",
                "objectID": "35000002"
            }
        ],
        "nbHits": 2,
        "page": 0
    }"#;

    let response: SearchResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.hits.len(), 2);

    let first = &response.hits[0];
    assert_eq!(first.object_id, "35000001");
    assert_eq!(first.points, 120);
    assert_eq!(first.link_url(), "https://example.com/thing");

    let second = &response.hits[1];
    assert_eq!(second.title, "");
    assert_eq!(second.points, 0);
    assert_eq!(second.url, None);
    assert_eq!(
        second.link_url(),
        "https://news.ycombinator.com/item?id=35000002"
    );
    assert_eq!(second.created_date(), "2023-03-02");
}

#[test]
fn missing_hits_is_an_empty_list() {
    let response: SearchResponse = serde_json::from_str("{}").unwrap();
    assert!(response.hits.is_empty());
}

#[test]
fn fetch_returns_hits_in_server_order() {
    let body = r#"{"hits": [
        {"title": "Zig 1.0", "author": "andrewrk", "url": "https://ziglang.org", "points": 3,
         "created_at": "2024-01-01T00:00:00.000Z", "objectID": "901"},
        {"title": "Ask HN: Rust?", "author": "pg", "url": null, "points": 250,
         "created_at": "2023-01-01T00:00:00.000Z", "objectID": "902"}
    ]}"#;
    let (endpoint, request_line) = serve_once("HTTP/1.1 200 OK", body);

    let hits = client_for(&endpoint)
        .fetch_stories(&StoryQuery::Search("rust lang".into()))
        .unwrap();

    assert_eq!(
        request_line.recv_timeout(Duration::from_secs(5)).unwrap(),
        "GET /api/v1/search?query=rust%20lang HTTP/1.1"
    );
    let ids: Vec<&str> = hits.iter().map(|h| h.object_id.as_str()).collect();
    assert_eq!(ids, vec!["901", "902"]);
    assert_eq!(hits[0].title, "Zig 1.0");
    assert_eq!(hits[0].url.as_deref(), Some("https://ziglang.org"));
    assert_eq!(hits[1].points, 250);
    assert_eq!(hits[1].url, None);
}

#[test]
fn non_success_status_is_a_status_error() {
    let (endpoint, _) = serve_once("HTTP/1.1 503 Service Unavailable", "{}");

    let result = client_for(&endpoint).fetch_stories(&StoryQuery::Latest);

    assert!(matches!(result, Err(FetchError::Status(503))));
}

#[test]
fn malformed_body_is_an_http_error() {
    let (endpoint, _) = serve_once("HTTP/1.1 200 OK", "{\"hits\": [oops");

    let result = client_for(&endpoint).fetch_stories(&StoryQuery::Latest);

    assert!(matches!(result, Err(FetchError::Http(_))));
}

#[test]
fn refused_connection_is_an_http_error() {
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

    let result = client_for(&format!("http://{}/", addr)).fetch_stories(&StoryQuery::Latest);

    assert!(matches!(result, Err(FetchError::Http(_))));
}

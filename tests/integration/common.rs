//! Shared helpers for building synthetic sites

use sumi_gather::config::DEFAULT_USER_AGENT;
use sumi_gather::crawler::{build_http_client, Fetcher};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Renders an HTML page whose body is one anchor per href
pub fn page_with_links(title: &str, hrefs: &[&str]) -> String {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!(r#"<a href="{}">{}</a>"#, href, href))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<html><head><title>{}</title></head><body><h1>{}</h1>\n{}\n</body></html>",
        title, title, anchors
    )
}

/// Mounts a GET page that must be requested exactly `expected_calls` times
pub async fn mount_page(server: &MockServer, page: &str, body: String, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Mounts a GET page that always fails with a server error
pub async fn mount_failing_page(server: &MockServer, page: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(ResponseTemplate::new(500))
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub fn seed_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/", server.uri())).expect("Failed to parse seed URL")
}

pub fn site_url(server: &MockServer, page: &str) -> String {
    format!("{}{}", server.uri(), page)
}

pub fn test_fetcher(retries: u32) -> Fetcher {
    Fetcher::new(
        build_http_client(DEFAULT_USER_AGENT).expect("Failed to build client"),
        retries,
    )
}

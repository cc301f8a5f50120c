//! Full discovery -> relevance -> acquisition runs

use crate::common::{mount_failing_page, mount_page, page_with_links, site_url};
use async_trait::async_trait;
use sumi_gather::config::Config;
use sumi_gather::crawler::{run_scrape_with_env, Coordinator};
use sumi_gather::output::ScrapeStatistics;
use sumi_gather::relevance::{OpenAiOracle, OracleError, RelevanceOracle};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Oracle double that always gives the same reply
struct FixedOracle(String);

#[async_trait]
impl RelevanceOracle for FixedOracle {
    async fn complete(&self, _prompt: &str) -> Result<String, OracleError> {
        Ok(self.0.clone())
    }
}

fn test_config(server: &MockServer, max_depth: u32, retries: u32) -> Config {
    let mut config = Config::with_base_url(format!("{}/", server.uri()));
    config.crawler.max_depth = max_depth;
    config.crawler.retries = retries;
    config
}

/// Mounts a chat-completions endpoint replying with `content`
async fn mount_oracle(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn oracle_for(server: &MockServer) -> Box<OpenAiOracle> {
    Box::new(
        OpenAiOracle::new(
            "sk-test",
            "gpt-4o-mini",
            format!("{}/v1/chat/completions", server.uri()),
        )
        .expect("Failed to build oracle"),
    )
}

#[tokio::test]
async fn test_full_scrape_with_partial_failure() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        page_with_links("Home", &["/about", "/pricing", "/missing"]),
        1,
    )
    .await;
    // Once during discovery, once during acquisition
    mount_page(&server, "/pricing", page_with_links("Pricing", &[]), 2).await;
    mount_page(&server, "/about", page_with_links("About", &[]), 1).await;
    // One discovery attempt plus two acquisition attempts
    mount_failing_page(&server, "/missing", 3).await;
    mount_oracle(
        &server,
        &format!(
            "['{}', '{}']",
            site_url(&server, "/pricing"),
            site_url(&server, "/missing")
        ),
    )
    .await;

    let coordinator =
        Coordinator::new(test_config(&server, 1, 2), oracle_for(&server)).expect("coordinator");
    let report = coordinator.run("Find the pricing").await;

    assert_eq!(report.discovered.len(), 3);
    assert_eq!(report.relevant.len(), 2);
    assert_eq!(report.results.len(), 2);

    let pricing = report
        .results
        .iter()
        .find(|r| r.url == site_url(&server, "/pricing"))
        .expect("pricing result");
    assert!(pricing.content.as_deref().unwrap().contains("Pricing"));

    let missing = report
        .results
        .iter()
        .find(|r| r.url == site_url(&server, "/missing"))
        .expect("missing result");
    assert!(missing.content.is_none());

    let stats = ScrapeStatistics::from_report(&report);
    assert_eq!(stats.pages_failed, 1);
    assert_eq!(stats.with_content, 1);
    assert_eq!(stats.without_content, 1);
}

#[tokio::test]
async fn test_unparseable_oracle_reply_yields_no_results() {
    let server = MockServer::start().await;
    mount_page(&server, "/", page_with_links("Home", &["/about"]), 1).await;
    // Only the discovery fetch; nothing is acquired
    mount_page(&server, "/about", page_with_links("About", &[]), 1).await;
    mount_oracle(&server, "Sorry, none of these look relevant.").await;

    let coordinator =
        Coordinator::new(test_config(&server, 1, 3), oracle_for(&server)).expect("coordinator");
    let report = coordinator.run("Find the pricing").await;

    assert_eq!(report.discovered, vec![site_url(&server, "/about")]);
    assert!(report.relevant.is_empty());
    assert!(report.results.is_empty());
}

#[tokio::test]
async fn test_oracle_failure_yields_no_results() {
    let server = MockServer::start().await;
    mount_page(&server, "/", page_with_links("Home", &["/about"]), 1).await;
    mount_page(&server, "/about", page_with_links("About", &[]), 1).await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let coordinator =
        Coordinator::new(test_config(&server, 1, 3), oracle_for(&server)).expect("coordinator");
    let report = coordinator.run("Find the pricing").await;

    assert!(report.results.is_empty());
}

#[tokio::test]
async fn test_sequential_mode_keeps_oracle_order() {
    let server = MockServer::start().await;
    mount_page(&server, "/", page_with_links("Home", &["/one", "/two", "/three"]), 1).await;
    mount_page(&server, "/one", page_with_links("One", &[]), 2).await;
    mount_page(&server, "/two", page_with_links("Two", &[]), 2).await;
    mount_page(&server, "/three", page_with_links("Three", &[]), 2).await;

    let selected = vec![
        site_url(&server, "/three"),
        site_url(&server, "/one"),
        site_url(&server, "/two"),
    ];
    let reply = format!("{:?}", selected);

    let mut config = test_config(&server, 1, 1);
    config.acquire.concurrent = false;

    let coordinator =
        Coordinator::new(config, Box::new(FixedOracle(reply))).expect("coordinator");
    let report = coordinator.run("Anything").await;

    let urls: Vec<String> = report.results.iter().map(|r| r.url.clone()).collect();
    assert_eq!(urls, selected);
    assert!(report.results.iter().all(|r| r.content.is_some()));
}

#[tokio::test]
async fn test_end_to_end_self_link_scenario() {
    let server = MockServer::start().await;
    let self_link = format!("{}/", server.uri());
    mount_page(
        &server,
        "/",
        page_with_links("Home", &["/about", self_link.as_str()]),
        1,
    )
    .await;
    mount_page(&server, "/about", page_with_links("About us", &[]), 2).await;

    let reply = format!("['{}']", site_url(&server, "/about"));
    let coordinator = Coordinator::new(test_config(&server, 1, 3), Box::new(FixedOracle(reply)))
        .expect("coordinator");
    let report = coordinator.run("Who runs this site?").await;

    assert_eq!(report.discovered, vec![site_url(&server, "/about")]);
    assert_eq!(report.pages_visited, 2);
    assert_eq!(report.results.len(), 1);
    assert!(report.results[0]
        .content
        .as_deref()
        .unwrap()
        .contains("About us"));
}

#[tokio::test]
async fn test_run_scrape_uses_environment_key() {
    let server = MockServer::start().await;
    mount_page(&server, "/", page_with_links("Home", &["/team"]), 1).await;
    mount_page(&server, "/team", page_with_links("Our team", &[]), 2).await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-from-env"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {
                "role": "assistant",
                "content": format!("['{}']", site_url(&server, "/team"))
            }}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = test_config(&server, 1, 1);
    config.oracle.endpoint = format!("{}/v1/chat/completions", server.uri());

    let report = run_scrape_with_env(config, "Who works here?", Some("sk-from-env".to_string()))
        .await
        .expect("scrape succeeds");

    assert_eq!(report.results.len(), 1);
    assert!(report.results[0].has_content());
}

//! Link discovery against synthetic sites

use crate::common::{
    mount_failing_page, mount_page, page_with_links, seed_url, site_url, test_fetcher,
};
use sumi_gather::crawler::crawl;
use wiremock::MockServer;

/// Mounts a chain site: / -> /a -> /b -> /c
async fn mount_chain(server: &MockServer, fetched: [u64; 4]) {
    mount_page(server, "/", page_with_links("Root", &["/a"]), fetched[0]).await;
    mount_page(server, "/a", page_with_links("A", &["/b"]), fetched[1]).await;
    mount_page(server, "/b", page_with_links("B", &["/c"]), fetched[2]).await;
    mount_page(server, "/c", page_with_links("C", &[]), fetched[3]).await;
}

#[tokio::test]
async fn test_depth_zero_fetches_only_the_seed() {
    let server = MockServer::start().await;
    mount_chain(&server, [1, 0, 0, 0]).await;

    let outcome = crawl(&test_fetcher(3), &seed_url(&server), 0).await;

    assert_eq!(outcome.visit_order, vec![seed_url(&server)]);
    assert_eq!(outcome.discovered.to_strings(), vec![site_url(&server, "/a")]);
}

#[tokio::test]
async fn test_depth_one() {
    let server = MockServer::start().await;
    mount_chain(&server, [1, 1, 0, 0]).await;

    let outcome = crawl(&test_fetcher(3), &seed_url(&server), 1).await;

    assert_eq!(outcome.visit_order.len(), 2);
    assert_eq!(
        outcome.discovered.to_strings(),
        vec![site_url(&server, "/a"), site_url(&server, "/b")]
    );
}

#[tokio::test]
async fn test_depth_two() {
    let server = MockServer::start().await;
    mount_chain(&server, [1, 1, 1, 0]).await;

    let outcome = crawl(&test_fetcher(3), &seed_url(&server), 2).await;

    assert_eq!(outcome.visit_order.len(), 3);
    assert_eq!(
        outcome.discovered.to_strings(),
        vec![
            site_url(&server, "/a"),
            site_url(&server, "/b"),
            site_url(&server, "/c")
        ]
    );
}

#[tokio::test]
async fn test_cycle_visits_each_page_once() {
    let server = MockServer::start().await;
    mount_page(&server, "/", page_with_links("A", &["/b"]), 1).await;
    mount_page(&server, "/b", page_with_links("B", &["/", "/b", "/"]), 1).await;

    let outcome = crawl(&test_fetcher(3), &seed_url(&server), 5).await;

    assert_eq!(
        outcome.visit_order,
        vec![
            seed_url(&server),
            url::Url::parse(&site_url(&server, "/b")).unwrap()
        ]
    );
    assert_eq!(outcome.discovered.to_strings(), vec![site_url(&server, "/b")]);
}

#[tokio::test]
async fn test_self_link_on_seed_is_skipped() {
    let server = MockServer::start().await;
    let self_link = format!("{}/", server.uri());
    mount_page(
        &server,
        "/",
        page_with_links("Home", &["/about", self_link.as_str()]),
        1,
    )
    .await;
    mount_page(&server, "/about", page_with_links("About", &[]), 1).await;

    let outcome = crawl(&test_fetcher(3), &seed_url(&server), 1).await;

    assert_eq!(
        outcome.discovered.to_strings(),
        vec![site_url(&server, "/about")]
    );
    assert!(!outcome.discovered.contains(&seed_url(&server)));
}

#[tokio::test]
async fn test_depth_first_order_and_shared_links() {
    let server = MockServer::start().await;
    mount_page(&server, "/", page_with_links("Root", &["/x", "/y"]), 1).await;
    mount_page(&server, "/x", page_with_links("X", &["/x1", "/y"]), 1).await;
    mount_page(&server, "/x1", page_with_links("X1", &[]), 1).await;
    mount_page(&server, "/y", page_with_links("Y", &["/x"]), 1).await;

    let outcome = crawl(&test_fetcher(3), &seed_url(&server), 2).await;

    let visited: Vec<String> = outcome.visit_order.iter().map(|u| u.to_string()).collect();
    assert_eq!(
        visited,
        vec![
            format!("{}/", server.uri()),
            site_url(&server, "/x"),
            site_url(&server, "/x1"),
            site_url(&server, "/y"),
        ]
    );
    assert_eq!(
        outcome.discovered.to_strings(),
        vec![
            site_url(&server, "/x"),
            site_url(&server, "/y"),
            site_url(&server, "/x1"),
        ]
    );
}

#[tokio::test]
async fn test_failed_page_does_not_abort_crawl() {
    let server = MockServer::start().await;
    mount_page(&server, "/", page_with_links("Root", &["/broken", "/ok"]), 1).await;
    // Discovery makes a single attempt regardless of the retry budget
    mount_failing_page(&server, "/broken", 1).await;
    mount_page(&server, "/ok", page_with_links("Ok", &["/deep"]), 1).await;
    mount_page(&server, "/deep", page_with_links("Deep", &[]), 1).await;

    let outcome = crawl(&test_fetcher(3), &seed_url(&server), 2).await;

    assert_eq!(outcome.failed_pages, 1);
    assert_eq!(
        outcome.discovered.to_strings(),
        vec![
            site_url(&server, "/broken"),
            site_url(&server, "/ok"),
            site_url(&server, "/deep"),
        ]
    );
}

#[tokio::test]
async fn test_unreachable_seed_discovers_nothing() {
    let server = MockServer::start().await;
    mount_failing_page(&server, "/", 1).await;

    let outcome = crawl(&test_fetcher(3), &seed_url(&server), 2).await;

    assert!(outcome.discovered.is_empty());
    assert_eq!(outcome.failed_pages, 1);
}

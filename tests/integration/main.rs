//! Integration tests for Sumi-Gather
//!
//! These tests use wiremock to stand up synthetic sites (and a mock relevance
//! oracle) and exercise discovery, filtering and acquisition end-to-end.

mod common;
mod crawl_tests;
mod scrape_tests;

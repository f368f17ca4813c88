use crate::fixtures::{
    create_test_config, index_page, listing_page, post_page, push, row, warning_box,
};
use ptt_trawl::crawler::{run_harvest, HttpFetcher, PageFetcher};
use ptt_trawl::output::{MemorySink, NullSink};
use ptt_trawl::{Harvester, PostDetail, ScrapeError};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, page_path: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// Board whose index follows page 41; walks pages 42 and 41
///
/// Page 42 has two posts and one deleted row, page 41 is broken. The first
/// post has comments, the second post page is gone.
async fn mount_board(server: &MockServer) {
    mount_page(server, "/bbs/Stock/index.html", 200, index_page(41)).await;

    mount_page(
        server,
        "/bbs/Stock/index42.html",
        200,
        listing_page(&[
            row(
                "[新聞] 央行升息半碼",
                Some("/bbs/Stock/M.1713400001.A.001.html"),
                "newsman",
                " 4/18",
            ),
            row("(本文已被刪除) [troll]", None, "-", " 4/18"),
            row(
                "[閒聊] 2024/04/18 盤後閒聊",
                Some("/bbs/Stock/M.1713400002.A.002.html"),
                "chatbot",
                " 4/18",
            ),
        ]),
    )
    .await;

    mount_page(server, "/bbs/Stock/index41.html", 500, "server error".to_string()).await;

    mount_page(
        server,
        "/bbs/Stock/M.1713400001.A.001.html",
        200,
        post_page(
            "Thu Apr 18 13:30:00 2024",
            &[
                push("alice", ": 房貸又要漲了", "04/18 13:31"),
                warning_box(),
                push("bob", ": 早就反應了", "04/18 13:35"),
            ],
        ),
    )
    .await;

    mount_page(
        server,
        "/bbs/Stock/M.1713400002.A.002.html",
        404,
        "not found".to_string(),
    )
    .await;
}

fn titles(details: &[PostDetail]) -> Vec<&str> {
    details.iter().map(|d| d.title.as_str()).collect()
}

#[tokio::test]
async fn test_full_harvest_over_http() {
    let server = MockServer::start().await;
    mount_board(&server).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), 2, 1, dir.path());

    let outcome = run_harvest(&config).await.expect("harvest should succeed");

    assert_eq!(
        titles(&outcome.details),
        vec!["[新聞] 央行升息半碼", "[閒聊] 2024/04/18 盤後閒聊"]
    );

    let first = &outcome.details[0];
    assert_eq!(first.author, "newsman");
    assert_eq!(
        first.detail_link,
        format!("{}/bbs/Stock/M.1713400001.A.001.html", server.uri())
    );
    assert_eq!(first.publish_datetime, "Thu Apr 18 13:30:00 2024");
    assert_eq!(first.comments.len(), 2);
    assert_eq!(first.comments[0].user_name, "alice");
    assert_eq!(first.comments[0].content, ": 房貸又要漲了");
    assert_eq!(first.comments[0].time, "04/18 13:31");
    assert_eq!(first.comments[1].user_name, "bob");

    let second = &outcome.details[1];
    assert_eq!(second.author, "chatbot");
    assert_eq!(second.publish_datetime, "");
    assert!(second.comments.is_empty());

    let stats = &outcome.stats;
    assert_eq!(stats.start_page, Some(42));
    assert_eq!(stats.listing_pages_requested, 2);
    assert_eq!(stats.listing_pages_skipped, 1);
    assert_eq!(stats.posts_listed, 3);
    assert_eq!(stats.posts_without_link, 1);
    assert_eq!(stats.details_fetched, 1);
    assert_eq!(stats.details_degraded, 1);
    assert_eq!(stats.comments_collected, 2);

    // Results file mirrors the returned records
    let json = std::fs::read_to_string(dir.path().join("posts.json")).unwrap();
    let written: Vec<PostDetail> = serde_json::from_str(&json).unwrap();
    assert_eq!(written, outcome.details);

    // Backlog records progress, including the skipped page
    let backlog = std::fs::read_to_string(dir.path().join("backlog.txt")).unwrap();
    assert!(backlog.contains("finished listing page 42, got 3 posts"));
    assert!(backlog.contains("listing page 41 failed: HTTP 500"));
    assert!(backlog.contains("detail [閒聊] 2024/04/18 盤後閒聊 failed: HTTP 404"));
    assert!(backlog.trim_end().ends_with("harvest finished"));
}

#[tokio::test]
async fn test_backlog_is_truncated_between_runs() {
    let server = MockServer::start().await;
    mount_board(&server).await;

    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("backlog.txt"), "stale line from last run\n").unwrap();
    let config = create_test_config(&server.uri(), 2, 1, dir.path());

    run_harvest(&config).await.unwrap();

    let backlog = std::fs::read_to_string(dir.path().join("backlog.txt")).unwrap();
    assert!(!backlog.contains("stale line"));
    assert!(backlog.starts_with("harvest of board Stock started"));
}

#[tokio::test]
async fn test_concurrent_harvest_keeps_order() {
    let server = MockServer::start().await;
    mount_page(&server, "/bbs/Stock/index.html", 200, index_page(9)).await;

    // Newest page answers slowest
    Mock::given(method("GET"))
        .and(path("/bbs/Stock/index10.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_page(&[row(
                    "p10",
                    Some("/bbs/Stock/M.10.html"),
                    "a",
                    " 4/18",
                )]))
                .set_delay(Duration::from_millis(150)),
        )
        .mount(&server)
        .await;
    mount_page(
        &server,
        "/bbs/Stock/index9.html",
        200,
        listing_page(&[row("p9", Some("/bbs/Stock/M.9.html"), "b", " 4/17")]),
    )
    .await;
    mount_page(
        &server,
        "/bbs/Stock/index8.html",
        200,
        listing_page(&[row("p8", Some("/bbs/Stock/M.8.html"), "c", " 4/16")]),
    )
    .await;
    for n in [10, 9, 8] {
        mount_page(
            &server,
            &format!("/bbs/Stock/M.{}.html", n),
            200,
            post_page("Thu Apr 18 13:30:00 2024", &[push("u", ": hi", "04/18")]),
        )
        .await;
    }

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), 3, 3, dir.path());
    let harvester = Harvester::from_config(&config, Arc::new(NullSink)).unwrap();

    let outcome = harvester.run().await.unwrap();

    assert_eq!(titles(&outcome.details), vec!["p10", "p9", "p8"]);
    assert!(outcome.details.iter().all(|d| d.comments.len() == 1));
}

#[tokio::test]
async fn test_index_failure_aborts_before_listing() {
    let server = MockServer::start().await;
    mount_page(&server, "/bbs/Stock/index.html", 503, "maintenance".to_string()).await;

    Mock::given(method("GET"))
        .and(path("/bbs/Stock/index42.html"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), 2, 1, dir.path());
    let sink = Arc::new(MemorySink::new());
    let harvester = Harvester::from_config(&config, sink.clone()).unwrap();

    let result = harvester.run().await;

    assert!(matches!(result, Err(ScrapeError::Transport { .. })));
    assert_eq!(sink.lines(), vec!["harvest of board Stock started".to_string()]);
}

#[tokio::test]
async fn test_deleted_posts_are_not_requested() {
    let server = MockServer::start().await;
    mount_page(&server, "/bbs/Stock/index.html", 200, index_page(1)).await;
    mount_page(
        &server,
        "/bbs/Stock/index2.html",
        200,
        listing_page(&[row("(本文已被刪除)", None, "-", " 4/18")]),
    )
    .await;

    // An empty link would resolve to the bare host
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), 1, 1, dir.path());
    let harvester = Harvester::from_config(&config, Arc::new(NullSink)).unwrap();

    let outcome = harvester.run().await.unwrap();

    assert!(outcome.details.is_empty());
    assert_eq!(outcome.stats.posts_without_link, 1);
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bbs/Stock/index.html"))
        .and(header("user-agent", "ptt-trawl-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(index_page(5)))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), 1, 1, dir.path());
    let fetcher = HttpFetcher::new(&config.http).unwrap();

    let page = fetcher
        .fetch(&format!("{}/bbs/Stock/index.html", server.uri()))
        .await
        .unwrap();

    assert_eq!(page.status, 200);
    assert!(page.body.contains("btn-group-paging"));
}

#[tokio::test]
async fn test_error_status_is_not_a_fetch_error() {
    let server = MockServer::start().await;
    mount_page(&server, "/missing", 404, "nope".to_string()).await;

    let fetcher = HttpFetcher::new(&Default::default()).unwrap();
    let page = fetcher
        .fetch(&format!("{}/missing", server.uri()))
        .await
        .unwrap();

    assert_eq!(page.status, 404);
    assert!(!page.is_success());
    assert_eq!(page.body, "nope");
}

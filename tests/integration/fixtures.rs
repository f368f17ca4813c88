//! HTML and config builders shared by the integration tests

use ptt_trawl::config::{Config, CrawlerConfig, ForumConfig, HttpConfig, OutputConfig};
use std::path::Path;

pub const BOARD: &str = "Stock";

pub fn create_test_config(base_host: &str, page_count: u32, concurrency: u32, dir: &Path) -> Config {
    Config {
        forum: ForumConfig {
            base_host: base_host.to_string(),
            board: BOARD.to_string(),
            page_count,
        },
        http: HttpConfig {
            user_agent: "ptt-trawl-test/1.0".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
            proxy: None,
        },
        crawler: CrawlerConfig {
            max_concurrent_fetches: concurrency,
        },
        output: OutputConfig {
            backlog_path: dir.join("backlog.txt").display().to_string(),
            truncate_backlog: true,
            results_path: Some(dir.join("posts.json").display().to_string()),
        },
    }
}

pub fn index_page(previous_page: u32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>看板 Stock 文章列表 - 批踢踢實業坊</title></head>
<body>
<div id="action-bar-container">
  <div class="action-bar">
    <div class="btn-group btn-group-dir">
      <a class="btn selected" href="/bbs/Stock/index.html">看板</a>
    </div>
    <div class="btn-group btn-group-paging">
      <a class="btn wide" href="/bbs/Stock/index1.html">最舊</a>
      <a class="btn wide" href="/bbs/Stock/index{}.html">&lsaquo; 上頁</a>
      <a class="btn wide disabled">下頁 &rsaquo;</a>
      <a class="btn wide" href="/bbs/Stock/index.html">最新</a>
    </div>
  </div>
</div>
</body></html>"#,
        previous_page
    )
}

/// A post row; `link` None renders a deleted post
pub fn row(title: &str, link: Option<&str>, author: &str, date: &str) -> String {
    let title_html = match link {
        Some(href) => format!(r#"<a href="{}">{}</a>"#, href, title),
        None => title.to_string(),
    };
    format!(
        r#"
<div class="r-ent">
  <div class="nrec"><span class="hl f2">5</span></div>
  <div class="title">
    {}
  </div>
  <div class="meta">
    <div class="author">{}</div>
    <div class="article-menu"></div>
    <div class="date">{}</div>
  </div>
</div>"#,
        title_html, author, date
    )
}

pub fn listing_page(rows: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><body>
<div id="main-container">
  <div class="r-list-container action-bar-margin bbs-screen">
    {}
    <div class="r-list-sep"></div>
  </div>
</div>
</body></html>"#,
        rows.concat()
    )
}

/// A push comment block
pub fn push(user: &str, content: &str, time: &str) -> String {
    format!(
        r#"<div class="push"><span class="hl push-tag">推 </span><span class="f3 hl push-userid">{}</span><span class="f3 push-content">{}</span><span class="push-ipdatetime"> {}
</span></div>"#,
        user, content, time
    )
}

pub fn post_page(datetime: &str, pushes: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><body>
<div id="main-container">
<div id="main-content" class="bbs-screen bbs-content"><div class="article-metaline"><span class="article-meta-tag">作者</span><span class="article-meta-value">stocker</span></div><div class="article-metaline-right"><span class="article-meta-tag">看板</span><span class="article-meta-value">Stock</span></div><div class="article-metaline"><span class="article-meta-tag">標題</span><span class="article-meta-value">title</span></div><div class="article-metaline"><span class="article-meta-tag">時間</span><span class="article-meta-value">{}</span></div>
post body
--
<span class="f2">※ 發信站: 批踢踢實業坊(ptt.cc)</span>
{}</div>
</div>
</body></html>"#,
        datetime,
        pushes.concat()
    )
}

pub fn warning_box() -> String {
    r#"<div class="push center warning-box">檔案過大！部分文章無法顯示</div>"#.to_string()
}

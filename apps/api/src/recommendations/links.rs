//! Search-link templates and link reachability probing.
//!
//! Every link the service hands out is either a model-supplied search query that
//! probed reachable, or one rebuilt here from a fixed template.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, redirect, Client};
use tracing::debug;

use crate::recommendations::models::Category;

const SEARCH_PREFIX: &str = "https://www.google.com/search?q=";
/// Substring a model-supplied link must contain to be kept as-is.
const SEARCH_MARKER: &str = "google.com/search?q=";

const ACADEMIC_SUFFIX: &str =
    "+online+course+site:coursera.org+OR+site:edx.org+OR+site:khanacademy.org";
const EXTRACURRICULAR_SUFFIX: &str = "+workshop+OR+event+OR+volunteer";

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);
const MAX_REDIRECTS: usize = 5;
const PROBE_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Builds the search URL for `query` using the template of `category`.
pub fn search_link(query: &str, category: Category) -> String {
    let suffix = match category {
        Category::Academic => ACADEMIC_SUFFIX,
        Category::Extracurricular => EXTRACURRICULAR_SUFFIX,
    };
    format!("{SEARCH_PREFIX}{}{suffix}", urlencoding::encode(query.trim()))
}

/// Rebuilds a link from a recommendation's title and free-text type.
pub fn search_link_for(title: &str, kind: &str) -> String {
    search_link(title, Category::from_type(kind))
}

pub fn is_search_link(link: &str) -> bool {
    link.contains(SEARCH_MARKER)
}

/// True when `link` was produced by one of the two fixed templates.
pub fn matches_search_template(link: &str) -> bool {
    link.starts_with(SEARCH_PREFIX)
        && (link.ends_with(ACADEMIC_SUFFIX) || link.ends_with(EXTRACURRICULAR_SUFFIX))
}

/// Answers whether a URL currently resolves to a successful HTTP response.
#[async_trait]
pub trait LinkProber: Send + Sync {
    async fn is_reachable(&self, url: &str) -> bool;
}

/// HEAD-request prober with a bounded wait and redirect count.
/// Reachable means a final status in 200..=399; any error counts as unreachable.
#[derive(Clone)]
pub struct HttpLinkProber {
    client: Client,
}

impl HttpLinkProber {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LinkProber for HttpLinkProber {
    async fn is_reachable(&self, url: &str) -> bool {
        let response = self
            .client
            .head(url)
            .header(header::USER_AGENT, PROBE_USER_AGENT)
            .send()
            .await;

        match response {
            Ok(r) => {
                let status = r.status().as_u16();
                debug!(url, status, "Link probe completed");
                (200..400).contains(&status)
            }
            Err(e) => {
                debug!(url, error = %e, "Link probe failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::Redirect, routing::get, Router};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn probe_app() -> Router {
        Router::new()
            .route("/ok", get(|| async { "fine" }))
            .route("/moved", get(|| async { Redirect::temporary("/ok") }))
            .route("/loop", get(|| async { Redirect::temporary("/loop") }))
            .route("/gone", get(|| async { StatusCode::GONE }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
    }

    #[test]
    fn test_academic_link_uses_domain_restricted_template() {
        let link = search_link("Cybersecurity Fundamentals", Category::Academic);
        assert_eq!(
            link,
            "https://www.google.com/search?q=Cybersecurity%20Fundamentals+online+course+site:coursera.org+OR+site:edx.org+OR+site:khanacademy.org"
        );
        assert!(matches_search_template(&link));
    }

    #[test]
    fn test_extracurricular_link_uses_workshop_template() {
        let link = search_link("Coding Bootcamps", Category::Extracurricular);
        assert_eq!(
            link,
            "https://www.google.com/search?q=Coding%20Bootcamps+workshop+OR+event+OR+volunteer"
        );
        assert!(matches_search_template(&link));
    }

    #[test]
    fn test_query_is_percent_encoded() {
        let link = search_link("C++ & Rust?", Category::Academic);
        assert!(link.contains("C%2B%2B%20%26%20Rust%3F"));
        assert!(matches_search_template(&link));
    }

    #[test]
    fn test_search_link_for_picks_template_from_type() {
        assert!(search_link_for("x", "academic resource").ends_with(ACADEMIC_SUFFIX));
        assert!(search_link_for("x", "Activity").ends_with(EXTRACURRICULAR_SUFFIX));
    }

    #[test]
    fn test_is_search_link() {
        assert!(is_search_link("https://www.google.com/search?q=robotics+club"));
        assert!(is_search_link("http://google.com/search?q=x"));
        assert!(!is_search_link("https://www.coursera.org/learn/robotics"));
        assert!(!is_search_link("https://www.google.com/maps"));
    }

    #[test]
    fn test_matches_search_template_rejects_foreign_suffix() {
        assert!(!matches_search_template(
            "https://www.google.com/search?q=robotics+career+resources"
        ));
    }

    #[tokio::test]
    async fn test_probe_success_status_is_reachable() {
        let base = serve(probe_app()).await;
        let prober = HttpLinkProber::new(DEFAULT_PROBE_TIMEOUT).unwrap();
        assert!(prober.is_reachable(&format!("{base}/ok")).await);
    }

    #[tokio::test]
    async fn test_probe_follows_redirects() {
        let base = serve(probe_app()).await;
        let prober = HttpLinkProber::new(DEFAULT_PROBE_TIMEOUT).unwrap();
        assert!(prober.is_reachable(&format!("{base}/moved")).await);
    }

    #[tokio::test]
    async fn test_probe_redirect_loop_is_unreachable() {
        let base = serve(probe_app()).await;
        let prober = HttpLinkProber::new(DEFAULT_PROBE_TIMEOUT).unwrap();
        assert!(!prober.is_reachable(&format!("{base}/loop")).await);
    }

    #[tokio::test]
    async fn test_probe_error_status_is_unreachable() {
        let base = serve(probe_app()).await;
        let prober = HttpLinkProber::new(DEFAULT_PROBE_TIMEOUT).unwrap();
        assert!(!prober.is_reachable(&format!("{base}/gone")).await);
        assert!(!prober.is_reachable(&format!("{base}/no-such-route")).await);
    }

    #[tokio::test]
    async fn test_probe_times_out() {
        let base = serve(probe_app()).await;
        let prober = HttpLinkProber::new(Duration::from_millis(200)).unwrap();
        assert!(!prober.is_reachable(&format!("{base}/slow")).await);
    }

    #[tokio::test]
    async fn test_probe_connection_refused_is_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let prober = HttpLinkProber::new(DEFAULT_PROBE_TIMEOUT).unwrap();
        assert!(!prober.is_reachable(&format!("http://{addr}/ok")).await);
    }

    #[tokio::test]
    async fn test_probe_malformed_url_is_unreachable() {
        let prober = HttpLinkProber::new(DEFAULT_PROBE_TIMEOUT).unwrap();
        assert!(!prober.is_reachable("not a url").await);
    }
}

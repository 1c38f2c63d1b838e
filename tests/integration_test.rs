use std::sync::Arc;

use artist_wordcloud::config::Config;
use artist_wordcloud::infrastructure::{HttpFetcher, ReqwestFetcher};
use artist_wordcloud::models::ArtistQuery;
use artist_wordcloud::services::{CursorEnumerator, LinkEnumerator, NameResolver};
use tokio_test::{assert_err, assert_ok};

fn live_fetcher(config: &Config) -> Arc<dyn HttpFetcher> {
    Arc::new(ReqwestFetcher::new(config).expect("创建 HTTP 客户端失败"))
}

#[tokio::test]
#[ignore] // 默认忽略，需要网络：cargo test -- --ignored
async fn resolves_a_known_artist() {
    let config = Config::from_env();
    let resolver = NameResolver::new(live_fetcher(&config), config.base_url());

    let id = assert_ok!(resolver.resolve(&ArtistQuery::new("Seether")).await);
    assert!(!id.as_str().is_empty());
}

#[tokio::test]
#[ignore]
async fn unsupported_and_empty_names_are_not_found() {
    let config = Config::from_env();
    let resolver = NameResolver::new(live_fetcher(&config), config.base_url());

    for name in ["かめりあ", "", "asddasnopdas"] {
        let err = assert_err!(resolver.resolve(&ArtistQuery::new(name)).await);
        assert!(err.is_not_found(), "{name}: {err}");
    }
}

#[tokio::test]
#[ignore]
async fn cursor_enumeration_returns_validated_links() {
    let config = Config::from_env();
    let fetcher = live_fetcher(&config);
    let resolver = NameResolver::new(fetcher.clone(), config.base_url());

    let artist = assert_ok!(resolver.resolve_artist(&ArtistQuery::new("Seether")).await);

    let enumerator = CursorEnumerator::new(fetcher, config.base_url(), config.per_page);
    let enumeration = assert_ok!(enumerator.enumerate(&artist).await);

    assert!(!enumeration.is_empty());
    let prefix = format!("{}/seether-", config.base_url()).to_lowercase();
    assert!(enumeration
        .links
        .iter()
        .all(|link| link.as_str().to_lowercase().starts_with(&prefix)));
}

#[tokio::test]
#[ignore]
async fn punctuated_artist_keeps_its_songs() {
    let config = Config::from_env();
    let fetcher = live_fetcher(&config);
    let resolver = NameResolver::new(fetcher.clone(), config.base_url());

    for name in ["AC/DC", "D'Angelo"] {
        let artist = assert_ok!(resolver.resolve_artist(&ArtistQuery::new(name)).await);
        let enumerator = CursorEnumerator::new(fetcher.clone(), config.base_url(), config.per_page);
        let enumeration = assert_ok!(enumerator.enumerate(&artist).await);
        assert!(!enumeration.is_empty(), "{name}");
    }
}

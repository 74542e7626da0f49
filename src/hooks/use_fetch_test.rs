use super::*;

use futures::executor::block_on;

use crate::error::FetchError;
use crate::net::transport::Method;

#[test]
fn fetch_options_default_to_auto_fetch_with_user_token() {
    let opts = FetchOptions::default();
    assert!(opts.auto_fetch);
    assert_eq!(opts.token.get_untracked(), TokenSource::User);
    assert_eq!(opts.request.get_untracked(), RequestOptions::default());
}

#[test]
fn manual_options_disable_auto_fetch() {
    let opts = FetchOptions::manual().with_system_token();
    assert!(!opts.auto_fetch);
    assert_eq!(opts.token.get_untracked(), TokenSource::System);
}

#[test]
fn manual_hook_starts_idle() {
    let owner = Owner::new();
    owner.with(|| {
        let fetch = use_fetch("/api/items".to_owned(), FetchOptions::manual());
        assert!(!fetch.loading().get_untracked());
        assert_eq!(fetch.data().get_untracked(), None);
        assert_eq!(fetch.error().get_untracked(), None);
    });
}

#[test]
fn auto_fetch_hook_starts_loading() {
    let owner = Owner::new();
    owner.with(|| {
        let fetch = use_fetch("/api/items".to_owned(), FetchOptions::default());
        assert!(fetch.loading().get_untracked());
        assert_eq!(fetch.state().get_untracked(), RequestState::initial(true));
    });
}

#[test]
fn target_follows_url_options_and_token_signals() {
    let owner = Owner::new();
    owner.with(|| {
        let url = RwSignal::new("/api/items".to_owned());
        let request = RwSignal::new(RequestOptions::default());
        let token = RwSignal::new(TokenSource::User);
        let options = FetchOptions::manual()
            .with_request(request)
            .with_token(token);
        let fetch = use_fetch(url, options);

        let initial = fetch.target.get_untracked();
        assert_eq!(initial.url, "/api/items");
        assert_eq!(initial.token, TokenSource::User);
        assert_eq!(initial.request, RequestOptions::default());

        url.set("/api/items?page=2".to_owned());
        assert_eq!(fetch.target.get_untracked().url, "/api/items?page=2");

        request.set(RequestOptions::default().with_method(Method::Post));
        assert_eq!(fetch.target.get_untracked().request.method, Some(Method::Post));

        token.set(TokenSource::System);
        assert_eq!(fetch.target.get_untracked().token, TokenSource::System);
    });
}

#[test]
fn cleanup_detaches_fetcher_and_ignores_later_fetches() {
    let owner = Owner::new();
    let (fetch, fetcher) = owner.with(|| {
        let fetch = use_fetch("/api/items".to_owned(), FetchOptions::manual());
        (fetch, fetch.fetcher.get_value())
    });
    assert!(!fetcher.is_detached());

    owner.cleanup();

    assert!(fetcher.is_detached());
    fetch.fetch_data(None);
    fetch.cancel();
    assert!(!fetcher.has_pending());
    let result = block_on(fetcher.fetch(
        "/api/items",
        TokenSource::User,
        RequestOptions::default(),
    ));
    assert_eq!(result, Err(FetchError::Aborted));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_and_cancel_are_inert_without_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let fetch = use_fetch("/api/items".to_owned(), FetchOptions::manual());
        fetch.fetch_data(None);
        fetch.cancel();
        assert_eq!(fetch.state().get_untracked(), RequestState::initial(false));
    });
}

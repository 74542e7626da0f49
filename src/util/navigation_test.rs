use super::*;

#[test]
fn from_href_splits_path_and_search() {
    let loc = Location::from_href("/boards?page=2&sort=name");
    assert_eq!(loc.pathname, "/boards");
    assert_eq!(loc.search, "?page=2&sort=name");
    assert_eq!(loc.href(), "/boards?page=2&sort=name");
}

#[test]
fn from_href_without_query_has_empty_search() {
    assert_eq!(Location::from_href("/login").search, "");
    assert_eq!(Location::from_href("/login?").search, "");
}

#[test]
fn from_href_drops_fragment() {
    let loc = Location::from_href("/docs?v=1#intro");
    assert_eq!(loc.pathname, "/docs");
    assert_eq!(loc.search, "?v=1");
}

#[test]
fn memory_replace_overwrites_current_entry() {
    let nav = MemoryNavigator::at("/boards?page=1");
    let state = RouteState::new().with("from", "dashboard");
    let target = Location::from_href("/boards?page=2").with_state(state.clone());
    nav.replace(&target);

    assert_eq!(nav.len(), 1);
    let current = nav.location();
    assert_eq!(current.search, "?page=2");
    assert_eq!(current.state, state);
}

#[test]
fn memory_redirect_is_recorded_without_touching_history() {
    let nav = MemoryNavigator::at("/boards");
    nav.redirect("/login");
    assert_eq!(nav.redirects(), vec!["/login".to_owned()]);
    assert_eq!(nav.location().pathname, "/boards");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_navigator_is_inert_without_browser() {
    let nav = BrowserNavigator;
    assert_eq!(nav.location(), Location::default());
    nav.replace(&Location::from_href("/x?y=1"));
    nav.redirect("/login");
}

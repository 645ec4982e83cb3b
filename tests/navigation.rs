use rstest::rstest;
use std::collections::HashSet;
use workdesk::config::{AppConfig, RouterConfig, UnmatchedPolicy};
use workdesk::router::paths;
use workdesk::router::{
    AuthGuard, NavigationError, Navigator, RouteTable, StaticViewResolver, ViewId,
};
use workdesk::session::TokenStore;

const CHILDREN: [&str; 5] = [
    paths::WORK_ONE,
    paths::WORK_TWO,
    paths::USER_AVATAR,
    paths::USER_PASSWORD,
    paths::USER_PROFILE,
];

fn app(store: &TokenStore) -> Navigator<AuthGuard<TokenStore>> {
    Navigator::new(
        RouteTable::standard(),
        AuthGuard::new(store.clone()),
        &RouterConfig::default(),
    )
}

#[rstest]
#[case(paths::ROOT)]
#[case(paths::WORK_ONE)]
#[case(paths::WORK_TWO)]
#[case(paths::USER_AVATAR)]
#[case(paths::USER_PASSWORD)]
#[case(paths::USER_PROFILE)]
#[case("/settings")]
#[case("/user")]
fn without_a_token_everything_but_login_goes_to_login(#[case] path: &str) {
    let navigation = app(&TokenStore::in_memory()).navigate(path).unwrap();
    assert_eq!(navigation.target, paths::LOGIN);
}

#[rstest]
#[case(paths::LOGIN)]
#[case(paths::WORK_ONE)]
#[case(paths::WORK_TWO)]
#[case(paths::USER_AVATAR)]
#[case(paths::USER_PASSWORD)]
#[case(paths::USER_PROFILE)]
#[case("/settings")]
fn with_a_token_the_target_is_unchanged(#[case] path: &str) {
    let navigation = app(&TokenStore::with_token("t")).navigate(path).unwrap();
    assert_eq!(navigation.target, path);
    assert!(!navigation.redirected);
}

#[test]
fn login_without_a_token_stays_on_login() {
    let navigation = app(&TokenStore::in_memory())
        .navigate(paths::LOGIN)
        .unwrap();
    assert_eq!(navigation.target, paths::LOGIN);
    assert_eq!(navigation.view, Some(ViewId::LoginPage));
}

#[test]
fn root_with_a_token_opens_work_one() {
    let navigation = app(&TokenStore::with_token("t")).navigate("/").unwrap();
    assert_eq!(navigation.target, paths::WORK_ONE);
    assert_eq!(navigation.view, Some(ViewId::WorkOne));
}

#[test]
fn every_child_has_its_own_view() {
    let navigator = app(&TokenStore::with_token("t"));
    let views: HashSet<ViewId> = CHILDREN
        .iter()
        .map(|path| {
            let navigation = navigator.navigate(path).unwrap();
            assert_eq!(navigation.layout, Some(ViewId::LayoutContainer));
            navigation.view.unwrap()
        })
        .collect();
    assert_eq!(views.len(), CHILDREN.len());
}

#[tokio::test]
async fn signing_in_and_out_changes_where_navigation_lands() {
    let store = TokenStore::in_memory();
    let navigator = app(&store);
    let resolver = StaticViewResolver::new();

    let opened = navigator.open(paths::USER_PROFILE, &resolver).await.unwrap();
    assert_eq!(opened.view.map(|v| v.id), Some(ViewId::LoginPage));

    store.login("issued-by-backend").await.unwrap();
    let opened = navigator.open(paths::USER_PROFILE, &resolver).await.unwrap();
    assert_eq!(opened.view.map(|v| v.id), Some(ViewId::UserProfile));
    assert_eq!(opened.layout.map(|v| v.id), Some(ViewId::LayoutContainer));

    store.logout().await.unwrap();
    let navigation = navigator.navigate(paths::USER_PROFILE).unwrap();
    assert_eq!(navigation.target, paths::LOGIN);
}

#[test]
fn environment_configuration_drives_the_navigator() {
    let config = AppConfig::from_lookup(|key| match key {
        "WORKDESK_BASE_URL" => Some("/portal".to_string()),
        "WORKDESK_UNMATCHED" => Some("reject".to_string()),
        _ => None,
    })
    .unwrap();
    let table = RouteTable::standard();
    config.validate(&table).unwrap();

    let navigator = Navigator::new(
        table,
        AuthGuard::new(TokenStore::with_token("t")),
        &config.router,
    );
    assert_eq!(
        navigator.navigate("/portal/user/avatar").unwrap().target,
        paths::USER_AVATAR
    );
    assert_eq!(
        navigator.navigate("/portal/missing").unwrap_err(),
        NavigationError::NotFound("/missing".to_string())
    );
    assert_eq!(config.router.unmatched, UnmatchedPolicy::Reject);
}

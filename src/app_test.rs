use super::*;

#[test]
fn route_paths_are_distinct_and_absolute() {
    let paths = [
        AppRoute::Login.path(),
        AppRoute::Register.path(),
        AppRoute::Welcome.path(),
    ];
    assert_eq!(paths, ["/", "/register", "/welcome"]);
    assert!(paths.iter().all(|p| p.starts_with('/')));
}

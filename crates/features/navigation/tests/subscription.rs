use folio_navigation::{LocationProvider, MemoryLocation, NavigationController, Page};
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn external_edits_reach_an_async_consumer() {
    let location = MemoryLocation::default();
    let mut rx = location.subscribe();
    let mut nav = NavigationController::new(location.clone());

    let editor = location.clone();
    let handle = tokio::spawn(async move {
        editor.set_fragment("#contact");
    });

    timeout(Duration::from_secs(1), rx.changed())
        .await
        .expect("notification in time")
        .expect("sender alive");
    handle.await.expect("editor task");

    assert!(nav.on_hash_change());
    assert_eq!(nav.page(), Page::Contact);
}

#[tokio::test]
async fn bursts_coalesce_to_latest_fragment() {
    let location = MemoryLocation::default();
    let mut rx = location.subscribe();

    location.set_fragment("#projects");
    location.set_fragment("#contact");
    location.set_fragment("#home");

    rx.changed().await.expect("sender alive");
    assert_eq!(rx.borrow_and_update().as_str(), "#home");
    assert!(!rx.has_changed().expect("sender alive"));
}

#[tokio::test]
async fn type_erased_provider_drives_controller() {
    let location = MemoryLocation::new("#projects");
    let shared: std::rc::Rc<dyn LocationProvider> = std::rc::Rc::new(location.clone());
    let mut nav = NavigationController::new(shared);
    assert_eq!(nav.page(), Page::Projects);

    nav.navigate(Page::Contact);
    assert_eq!(location.fragment(), "contact");
}

use folio_navigation::{MemoryLocation, NavigationController, NavigationState, Page};

fn controller_at(fragment: &str) -> (MemoryLocation, NavigationController<MemoryLocation>) {
    let location = MemoryLocation::new(fragment);
    let nav = NavigationController::new(location.clone());
    (location, nav)
}

#[test]
fn navigate_sets_page_fragment_and_closes_menu() {
    for page in Page::all() {
        for menu_open in [false, true] {
            let (location, mut nav) = controller_at("");
            if menu_open {
                nav.toggle_menu();
            }

            nav.navigate(page);

            assert_eq!(nav.page(), page);
            assert_eq!(location.fragment(), page.fragment());
            assert!(!nav.is_menu_open());
        }
    }
}

#[test]
fn navigate_is_idempotent() {
    for page in Page::all() {
        let (location, mut nav) = controller_at("#home");
        nav.navigate(page);
        let first = (nav.state(), location.fragment());
        nav.navigate(page);
        assert_eq!((nav.state(), location.fragment()), first);
    }
}

#[test]
fn deep_link_is_honored_at_startup() {
    let (_, nav) = controller_at("#projects");
    assert_eq!(nav.state(), NavigationState { page: Page::Projects, menu_open: false });
}

#[test]
fn no_fragment_starts_at_home() {
    let (_, nav) = controller_at("");
    assert_eq!(nav.state(), NavigationState { page: Page::Home, menu_open: false });
}

#[test]
fn unknown_deep_link_starts_at_home() {
    let (_, nav) = controller_at("#admin");
    assert_eq!(nav.page(), Page::Home);
}

#[test]
fn toggle_menu_is_its_own_inverse() {
    let (_, mut nav) = controller_at("");
    let before = nav.state();

    assert!(nav.toggle_menu());
    assert!(nav.is_menu_open());
    assert!(!nav.toggle_menu());
    assert_eq!(nav.state(), before);
}

#[test]
fn scenario_empty_fragment_then_contact() {
    let (location, mut nav) = controller_at("");
    nav.navigate(Page::Contact);

    assert_eq!(nav.state(), NavigationState { page: Page::Contact, menu_open: false });
    assert_eq!(location.fragment(), "contact");
}

#[test]
fn scenario_external_bogus_fragment() {
    let (location, mut nav) = controller_at("#contact");
    assert_eq!(nav.page(), Page::Contact);

    location.set_fragment("#bogus");
    assert!(nav.on_hash_change());
    assert_eq!(nav.page(), Page::Home);
}

#[test]
fn rereading_own_write_is_a_no_op() {
    let (location, mut nav) = controller_at("");
    let mut rx = location.subscribe();

    nav.navigate(Page::Projects);
    assert!(rx.has_changed().expect("sender alive"));
    rx.borrow_and_update();

    // The notification produced by our own write.
    assert!(!nav.on_hash_change());
    assert_eq!(nav.page(), Page::Projects);

    nav.navigate(Page::Projects);
    assert!(!rx.has_changed().expect("sender alive"));
}

#[test]
fn back_navigation_restores_previous_page() {
    let (location, mut nav) = controller_at("");
    nav.navigate(Page::Projects);
    nav.navigate(Page::Contact);

    // Browser "back" rewrites the fragment to the previous entry.
    location.set_fragment("#projects");
    assert!(nav.on_hash_change());
    assert_eq!(nav.page(), Page::Projects);
    assert_eq!(nav.location_page(), Page::Projects);
}

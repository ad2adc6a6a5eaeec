use folio_navigation::{MemoryLocation, NavigationController, Page, resolve_fragment};
use proptest::prelude::*;

fn page() -> impl Strategy<Value = Page> {
    prop_oneof![Just(Page::Home), Just(Page::Projects), Just(Page::Contact)]
}

proptest! {
    #[test]
    fn unrecognized_fragments_resolve_home(raw in "#?.{0,24}") {
        let stripped = raw.strip_prefix('#').unwrap_or(&raw);
        prop_assume!(!["home", "projects", "contact"].contains(&stripped));

        let location = MemoryLocation::new("#contact");
        let mut nav = NavigationController::new(location.clone());
        location.set_fragment(&raw);
        nav.on_hash_change();

        prop_assert_eq!(nav.page(), Page::Home);
        prop_assert_eq!(resolve_fragment(&raw), Page::Home);
    }

    #[test]
    fn any_navigation_sequence_ends_consistent(
        steps in proptest::collection::vec((page(), any::<bool>()), 1..32),
    ) {
        let location = MemoryLocation::default();
        let mut nav = NavigationController::new(location.clone());

        for (target, toggle_first) in steps {
            if toggle_first {
                nav.toggle_menu();
            }
            nav.navigate(target);

            prop_assert_eq!(nav.page(), target);
            prop_assert!(!nav.is_menu_open());
            prop_assert_eq!(resolve_fragment(&location.fragment()), target);
            prop_assert!(!nav.on_hash_change());
        }
    }
}

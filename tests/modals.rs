use sports_landing::modal::{ModalDeck, ModalKind, Visibility};

#[test]
fn each_modal_opens_and_closes_alone() {
    let mut deck = ModalDeck::new();
    for kind in ModalKind::ALL {
        deck.show(kind);
        for other in ModalKind::ALL {
            assert_eq!(deck.is_visible(other), other == kind, "{other} after showing {kind}");
        }
        deck.hide(kind);
        assert_eq!(deck.visible().count(), 0);
    }
}

#[test]
fn unknown_identifier_never_reaches_the_deck() {
    let mut deck = ModalDeck::new();
    if let Ok(kind) = "pricing".parse::<ModalKind>() {
        deck.show(kind);
    }
    assert_eq!(deck, ModalDeck::new());
}

#[test]
fn visibility_maps_to_css_classes() {
    assert_eq!(Visibility::Shown.classes(), ("flex", "hidden"));
    assert_eq!(Visibility::Hidden.classes(), ("hidden", "flex"));
    assert_eq!(Visibility::default(), Visibility::Hidden);
}

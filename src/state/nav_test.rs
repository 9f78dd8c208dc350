use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!NavMenu::default().is_open());
}

#[test]
fn toggle_opens_then_closes() {
    let mut menu = NavMenu::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
}

#[test]
fn close_is_idempotent() {
    let mut menu = NavMenu::default();
    menu.toggle();
    assert!(!menu.close());
    assert!(!menu.close());
    assert!(!menu.is_open());
}

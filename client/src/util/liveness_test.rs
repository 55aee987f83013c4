use super::*;

#[test]
fn new_liveness_is_alive() {
    assert!(Liveness::new().alive());
}

#[test]
fn kill_is_visible_through_clones() {
    let a = Liveness::new();
    let b = a.clone();
    b.kill();
    assert!(!a.alive());
    assert!(!b.alive());
}

#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn toggling_twice_restores_original() {
    for start in [Theme::Light, Theme::Dark] {
        assert_eq!(toggle(toggle(start)), start);
    }
}

#[test]
fn parse_accepts_only_stored_names() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn stored_names_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn toggle_icon_offers_opposite_scheme() {
    assert_eq!(Theme::Light.toggle_icon(), "🌙");
    assert_eq!(Theme::Dark.toggle_icon(), "☀️");
}

#[test]
fn sync_is_noop_but_callable() {
    sync(Theme::Light);
    sync(Theme::Dark);
}

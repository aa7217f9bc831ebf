//! Architecture boundary tests. Run with `cargo test -p firmware --test arch_boundaries`
// Architecture test file: expect/unwrap/panic are intentional test mechanisms.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
)]
//!
//! Layering rules:
//!   Rule 1: platform (HAL) must not depend on ui or firmware
//!   Rule 2: ui must not depend on firmware or any desktop-only crate
//!   Rule 3: only firmware may pull in the simulator, tokio or serde_json
//!
//! # How enforcement works
//!
//! The dependency graph itself is the primary enforcement: a cycle such as
//! firmware -> platform -> firmware fails to resolve. The tests below add a
//! compile-time check that each layer's public surface is reachable on its
//! own, and a manifest check that the lower layers do not name forbidden
//! crates in their `[dependencies]` tables.

/// Body of the `header` table in a manifest, up to the next table header.
fn table<'a>(manifest: &'a str, header: &str) -> &'a str {
    let start = manifest
        .find(header)
        .unwrap_or_else(|| panic!("manifest has a {header} table"));
    let rest = &manifest[start + header.len()..];
    match rest.find("\n[") {
        Some(end) => &rest[..end],
        None => rest,
    }
}

fn dependencies_table(manifest: &str) -> &str {
    table(manifest, "[dependencies]")
}

fn declares(table: &str, krate: &str) -> bool {
    table.lines().map(str::trim_start).any(|line| {
        line.strip_prefix(krate)
            .is_some_and(|rest| rest.starts_with([' ', '=', '.']))
    })
}

/// The platform HAL exposes its traits without any application types.
#[test]
fn platform_hal_is_independent() {
    fn _assert_display_trait_exists<T: platform::DisplayDriver>() {}
    fn _assert_input_trait_exists<T: platform::InputDevice>() {}
    fn _assert_transmitter_trait_exists<T: platform::SignalTransmitter>() {}
    fn _assert_log_trait_exists<T: platform::DiagnosticLog>() {}

    let deps = dependencies_table(include_str!("../../platform/Cargo.toml"));
    for forbidden in ["ui", "firmware", "tokio", "embedded-graphics-simulator", "serde_json"] {
        assert!(
            !declares(deps, forbidden),
            "platform must not depend on {forbidden}"
        );
    }
}

/// The ui crate holds screen state only; it never draws or spawns.
#[test]
fn ui_does_not_depend_on_application_layer() {
    let deps = dependencies_table(include_str!("../../ui/Cargo.toml"));
    for forbidden in ["firmware", "tokio", "embedded-graphics-simulator", "tracing"] {
        assert!(!declares(deps, forbidden), "ui must not depend on {forbidden}");
    }
    assert!(declares(deps, "platform"), "ui builds on the platform HAL");
}

/// Nothing in ui is gated on `std`, so it offers no such feature.
#[test]
fn ui_features_gate_real_code() {
    let features = table(include_str!("../../ui/Cargo.toml"), "[features]");
    assert!(!declares(features, "std"), "ui has no std-only code");
    assert!(declares(features, "serde"), "DismissPolicy derives behind serde");
}

/// The screen starts hidden and idle when built straight from the ui crate.
#[test]
fn ui_screen_starts_idle() {
    use embedded_graphics::prelude::Size;
    use ui::{CallRequestScreen, ConfirmationBanner};

    let screen = CallRequestScreen::new(
        Size::new(480, 800),
        ConfirmationBanner::default(),
        platform::NullLog,
    );
    assert!(!screen.confirmation().visible());
    assert_eq!(screen.next_deadline(), None);
}

/// Call identifiers are the external contract with the hospital call system.
#[test]
fn call_identifiers_are_reachable_from_the_app_layer() {
    use platform::CallType;

    let ids: Vec<&str> = CallType::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(ids, ["NURSE_ASSISTANCE", "WATER_REQUEST", "PAIN_MEDICATION"]);
}

#[test]
fn manifest_parser_sanity() {
    let table = dependencies_table(
        "[package]\nname = \"x\"\n[dependencies]\nfoo = \"1\"\nbar.workspace = true\n[features]\nbaz = []\n",
    );
    assert!(declares(table, "foo"));
    assert!(declares(table, "bar"));
    assert!(!declares(table, "ba"));
    assert!(!declares(table, "baz"));
}

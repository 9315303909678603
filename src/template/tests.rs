// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{TemplateRegistry, has_placeholder};
use crate::error::TemplateError;

fn registry() -> TemplateRegistry {
    [
        ("DIST", "C:/r2"),
        ("R2_DATDIR", "share"),
        ("R2_WWWROOT", "{R2_DATDIR}/www"),
        ("R2_SDB", "{R2_DATDIR}"),
        ("R2_LIBDIR", "lib"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_substitute_single_pass_leaves_nested_placeholder() {
    let once = registry().substitute("{DIST}/{R2_WWWROOT}").unwrap();
    insta::assert_snapshot!(once, @"C:/r2/{R2_DATDIR}/www");
}

#[test]
fn test_two_passes_resolve_one_level_of_nesting() {
    let registry = registry();
    let once = registry.substitute("{DIST}/{R2_WWWROOT}").unwrap();
    let twice = registry.substitute(&once).unwrap();
    assert_eq!(twice, "C:/r2/share/www");

    let thrice = registry.substitute(&twice).unwrap();
    assert_eq!(thrice, twice, "third pass must be a no-op");
}

#[test]
fn test_resolve_is_idempotent_once_resolved() {
    let registry = registry();
    let resolved = registry.resolve("{DIST}/{R2_SDB}/syscall").unwrap();
    assert_eq!(resolved, "C:/r2/share/syscall");
    assert_eq!(registry.resolve(&resolved).unwrap(), resolved);
    assert!(!has_placeholder(&resolved));
}

#[test]
fn test_resolve_deep_nesting() {
    let registry: TemplateRegistry = [
        ("A", "{B}/a"),
        ("B", "{C}/b"),
        ("C", "{D}/c"),
        ("D", "root"),
    ]
    .into_iter()
    .collect();

    assert_eq!(registry.resolve("{A}").unwrap(), "root/c/b/a");
}

#[test]
fn test_unknown_placeholder_is_key_not_found() {
    let err = registry().resolve("{DIST}/{R2_NOPE}").unwrap_err();
    assert_eq!(
        err,
        TemplateError::KeyNotFound {
            key: "R2_NOPE".to_string()
        }
    );

    let err = registry().substitute("{MISSING}").unwrap_err();
    assert!(matches!(err, TemplateError::KeyNotFound { key } if key == "MISSING"));
}

#[test]
fn test_cycle_is_detected() {
    let registry: TemplateRegistry = [("A", "{B}/x"), ("B", "{A}/y")].into_iter().collect();

    let err = registry.resolve("{A}").unwrap_err();
    assert_eq!(
        err,
        TemplateError::CyclicTemplate {
            chain: vec!["A".to_string(), "B".to_string(), "A".to_string()]
        }
    );
}

#[test]
fn test_self_reference_is_a_cycle() {
    let registry: TemplateRegistry = [("SELF", "{SELF}")].into_iter().collect();
    assert!(matches!(
        registry.resolve("x/{SELF}"),
        Err(TemplateError::CyclicTemplate { .. })
    ));
}

#[test]
fn test_placeholder_joined_from_literal_braces_terminates() {
    let registry: TemplateRegistry = [("A", "{")].into_iter().collect();
    assert_eq!(registry.resolve("{A}A}").unwrap(), "{");
}

#[test]
fn test_cycle_reached_through_joined_placeholder_is_detected() {
    let registry: TemplateRegistry = [("A", "{"), ("B", "{B}")].into_iter().collect();

    let err = registry.resolve("{A}B}").unwrap_err();
    assert_eq!(
        err,
        TemplateError::CyclicTemplate {
            chain: vec!["B".to_string(), "B".to_string()]
        }
    );
}

#[test]
fn test_text_without_placeholders_passes_through() {
    let registry = TemplateRegistry::new();
    assert_eq!(
        registry.resolve(r"C:\plain\path").unwrap(),
        r"C:\plain\path"
    );
    // Braces that do not form a name are left alone.
    assert_eq!(registry.resolve("{ not a name }").unwrap(), "{ not a name }");
}

#[test]
fn test_insert_replaces_existing_value() {
    let mut registry = registry();
    registry.insert("R2_LIBDIR", "custom/lib");
    assert_eq!(registry.resolve("{R2_LIBDIR}").unwrap(), "custom/lib");
    assert_eq!(registry.get("R2_DATDIR"), Some("share"));
}

#[test]
fn test_placeholder_names_must_not_start_with_digit() {
    let registry: TemplateRegistry = [("A", "x")].into_iter().collect();
    assert_eq!(registry.resolve("{1A}/{A}").unwrap(), "{1A}/x");
    assert_eq!(registry.resolve("{{A}}").unwrap(), "{x}");
}

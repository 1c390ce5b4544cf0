use super::*;

// =============================================================
// Table shape
// =============================================================

#[test]
fn table_has_four_entries_in_order() {
    let keys: Vec<NavKey> = NAV_ENTRIES.iter().map(|e| e.key).collect();
    assert_eq!(keys, vec![NavKey::Dashboard, NavKey::Subjects, NavKey::Information, NavKey::Users]);
}

#[test]
fn table_paths_and_labels() {
    let rows: Vec<(&str, &str)> = NAV_ENTRIES.iter().map(|e| (e.path, e.label)).collect();
    assert_eq!(
        rows,
        vec![
            ("/", "Dasbor"),
            ("/mata-kuliah", "Mata Kuliah"),
            ("/informasi", "Informasi"),
            ("/pengguna", "Pengguna"),
        ]
    );
}

#[test]
fn only_dashboard_uses_exact_rule() {
    for e in NAV_ENTRIES {
        match e.key {
            NavKey::Dashboard => assert_eq!(e.rule, RouteRule::Exact),
            _ => assert!(matches!(e.rule, RouteRule::Contains(_))),
        }
    }
}

#[test]
fn entry_lookup_by_key() {
    assert_eq!(entry(NavKey::Users).map(|e| e.path), Some("/pengguna"));
}

// =============================================================
// Active matching
// =============================================================

#[test]
fn subject_detail_path_highlights_only_subjects() {
    assert_eq!(active_keys("/mata-kuliah/123"), vec![NavKey::Subjects]);
}

#[test]
fn root_path_highlights_only_dashboard() {
    assert_eq!(active_keys("/"), vec![NavKey::Dashboard]);
}

#[test]
fn dashboard_requires_exact_root() {
    let dashboard = entry(NavKey::Dashboard).unwrap();
    assert!(!dashboard.is_active("/foo"));
    assert!(!dashboard.is_active(""));
    assert!(active_keys("/foo").is_empty());
}

#[test]
fn contains_rule_matches_anywhere_in_path() {
    assert_eq!(active_keys("/admin/informasi/detail"), vec![NavKey::Information]);
    assert_eq!(active_keys("/pengguna"), vec![NavKey::Users]);
    assert_eq!(active_keys("/xpenggunax"), vec![NavKey::Users]);
}

#[test]
fn contains_rule_can_match_several_entries() {
    assert_eq!(
        active_keys("/mata-kuliah/informasi"),
        vec![NavKey::Subjects, NavKey::Information]
    );
}

// =============================================================
// Presentation
// =============================================================

#[test]
fn link_class_adds_highlight_only_when_active() {
    assert!(link_class(true).ends_with("bg-graydark dark:bg-meta-4"));
    assert!(!link_class(false).contains(" bg-graydark"));
    assert!(link_class(false).contains("hover:bg-graydark"));
}

#[test]
fn icon_classes_are_distinct() {
    let icons = [NavIcon::Dashboard, NavIcon::GraduationCap, NavIcon::InfoCircle, NavIcon::Users, NavIcon::Close];
    for (i, a) in icons.iter().enumerate() {
        for (j, b) in icons.iter().enumerate() {
            if i != j {
                assert_ne!(a.class(), b.class());
            }
        }
    }
}

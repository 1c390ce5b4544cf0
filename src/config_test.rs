use super::*;

#[test]
fn default_config_matches_stylesheet_contract() {
    let config = SidebarConfig::default();
    assert_eq!(config.storage_key, "sidebar-expanded");
    assert_eq!(config.body_class, "sidebar-expanded");
}

#[test]
fn breakpoint_matches_stylesheet_lg_variant() {
    assert_eq!(LG_BREAKPOINT_PX, 1024);
}

#[test]
fn wide_media_query_uses_lg_breakpoint() {
    assert_eq!(SidebarConfig::default().wide_media_query(), "(min-width: 1024px)");
}

#[test]
fn wide_media_query_ignores_storage_settings() {
    let config = SidebarConfig { storage_key: "nav-wide", body_class: "nav-wide-body" };
    assert_eq!(config.wide_media_query(), "(min-width: 1024px)");
}

use folio_domain::config::{LoggingConfig, SiteConfig, WindowConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let window = WindowConfig::default();
    assert_eq!(window.title, "Clinton's Portfolio");
    assert!(window.width > 0.0 && window.height > 0.0);

    let logging = LoggingConfig::default();
    assert!(logging.level.is_none());
    assert!(logging.directory.is_none());
    assert!(!logging.json);

    assert!(SiteConfig::default().start_page.is_none());
}

#[test]
fn site_config_deserializes_partial_input() {
    let raw = json!({
        "window": { "title": "Folio", "width": 640.0 },
        "logging": { "directory": "/tmp/folio-logs", "json": true },
        "start_page": "projects"
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.window.title, "Folio");
    assert!((cfg.window.width - 640.0).abs() < f64::EPSILON);
    assert!((cfg.window.height - 800.0).abs() < f64::EPSILON);
    assert!(cfg.logging.level.is_none());
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/folio-logs")));
    assert!(cfg.logging.json);
    assert_eq!(cfg.start_page.as_deref(), Some("projects"));
}

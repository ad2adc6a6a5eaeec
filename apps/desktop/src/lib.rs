//! Native shell: a Dioxus desktop window around [`folio_ui::App`].
//!
//! There is no address bar, so the location is an in-memory one seeded with the
//! start fragment (deep link).

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use folio_domain::config::WindowConfig;
use folio_navigation::MemoryLocation;
use folio_ui::{App, LocationHandle};

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    start_fragment: String,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(window: &WindowConfig) -> Self {
        Self {
            title: window.title.clone(),
            width: window.width,
            height: window.height,
            start_fragment: String::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Fragment the app opens at. Unknown values land on the home page.
    #[must_use]
    pub fn with_start_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.start_fragment = fragment.into();
        self
    }

    #[must_use]
    pub fn start_fragment(&self) -> &str {
        &self.start_fragment
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self) {
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        let fragment = self.start_fragment;
        tracing::info!(title = %self.title, fragment = %fragment, "Launching desktop window");

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || {
                Box::new(LocationHandle::new(MemoryLocation::new(fragment.clone())))
            })
            .launch(App);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_window_config() {
        let app = DesktopApp::new();
        assert_eq!(app.title, "Clinton's Portfolio");
        assert!((app.width - 1200.0).abs() < f64::EPSILON);
        assert_eq!(app.start_fragment(), "");
    }

    #[test]
    fn builder_overrides() {
        let app = DesktopApp::new()
            .with_title("Folio")
            .with_size(640.0, 480.0)
            .with_start_fragment("projects");
        assert_eq!(app.title, "Folio");
        assert!((app.height - 480.0).abs() < f64::EPSILON);
        assert_eq!(app.start_fragment(), "projects");
    }
}

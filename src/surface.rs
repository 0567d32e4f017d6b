use glam::DVec2;
use tilt_core::{Surface, TiltParams};
use web_sys as web;

/// The card shell as seen by the tilt engine.
///
/// Size comes from the shell's client box; parameters land as CSS custom
/// properties on the wrapper so every layer of the card can read them.
pub struct ShellSurface {
    shell: web::HtmlElement,
    wrap: web::HtmlElement,
    document: web::Document,
}

impl ShellSurface {
    pub fn new(shell: web::HtmlElement, wrap: web::HtmlElement, document: web::Document) -> Self {
        Self {
            shell,
            wrap,
            document,
        }
    }
}

impl Surface for ShellSurface {
    fn size(&self) -> Option<DVec2> {
        if !self.shell.is_connected() {
            return None;
        }
        Some(DVec2::new(
            self.shell.client_width() as f64,
            self.shell.client_height() as f64,
        ))
    }

    fn has_focus(&self) -> bool {
        self.document.has_focus().unwrap_or(false)
    }

    fn publish(&mut self, params: &TiltParams) {
        let style = self.wrap.style();
        for (name, value) in params.css_properties() {
            _ = style.set_property(name, &value);
        }
    }
}

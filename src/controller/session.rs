// src/controller/session.rs
use crate::{
    core::{Locale, RequestPayload, Transport},
    i18n::{self, Strings},
};

use super::PageController;

/// Open/closed state of the changelog window. Shares nothing with the
/// request lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChangelogOverlay {
    open: bool,
}

impl ChangelogOverlay {
    pub fn is_open(&self) -> bool { self.open }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        logd!("UI: changelog open={}", self.open);
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Everything one page session owns: the lifecycle plus the two
/// independent toggles.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub controller: PageController,
    pub changelog: ChangelogOverlay,
    locale: Locale,
}

impl Session {
    pub fn new(locale: Locale) -> Self {
        Self { locale, ..Self::default() }
    }

    pub fn locale(&self) -> Locale { self.locale }

    pub fn strings(&self) -> &'static Strings {
        i18n::strings(self.locale)
    }

    /// The language toggle is only offered while no result is shown.
    pub fn locale_toggle_visible(&self) -> bool {
        !self.controller.has_result()
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        logf!("UI: Language → {}", self.locale);
        self.locale
    }

    pub fn submit(&mut self) -> Option<RequestPayload> {
        self.controller.submit(self.locale)
    }

    pub fn submit_blocking(&mut self, transport: &dyn Transport) -> bool {
        self.controller.submit_blocking(self.locale, transport)
    }
}

// src/config/options.rs
use crate::core::Locale;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Remote parse endpoint that receives the POST.
    pub endpoint: String,
    /// Language the page starts in.
    pub locale: Locale,
    pub user_agent: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(API_URL),
            locale: Locale::default(),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl AppOptions {
    /// Replace the endpoint unless `endpoint` is blank.
    pub fn set_endpoint(&mut self, endpoint: &str) {
        let e = endpoint.trim();
        if !e.is_empty() {
            self.endpoint = s!(e);
        }
    }
}

//! Widget configuration
//!
//! Provided once from `App` through Dioxus context and read by the widget.

use std::time::Duration;

use crate::services::random_user::RANDOM_USER_ENDPOINT;

/// How long the "Thank you" overlay stays up
pub const ACKNOWLEDGE_DELAY_MS: u64 = 2000;

/// Author credited in the page footer
pub const CREATED_BY: &str = "Ismail Ahmed Shah";

/// Cosmetic variant of the card. Both variants render the same content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardStyle {
    /// Gradient page background and gradient card header
    #[default]
    Gradient,
    /// Flat neutral page with a bordered card
    Minimal,
}

impl CardStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStyle::Gradient => "gradient",
            CardStyle::Minimal => "minimal",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "minimal" => CardStyle::Minimal,
            _ => CardStyle::Gradient,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    /// Endpoint returning a randomuser.me style envelope
    pub endpoint: String,
    pub acknowledge_delay: Duration,
    pub style: CardStyle,
    /// Footer credit, no footer when `None`
    pub credit: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: RANDOM_USER_ENDPOINT.to_string(),
            acknowledge_delay: Duration::from_millis(ACKNOWLEDGE_DELAY_MS),
            style: CardStyle::default(),
            credit: Some(CREATED_BY.to_string()),
        }
    }
}

impl WidgetConfig {
    pub fn with_style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }
}

/// Pick the card variant from a page query string such as `?style=minimal`
pub fn style_from_query(search: &str) -> CardStyle {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "style")
        .map(|(_, value)| CardStyle::from_str(value))
        .unwrap_or_default()
}

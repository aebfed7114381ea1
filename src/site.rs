//! Page routes, navigation entries and contact form validation.

use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::i18n::TranslationKey;

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    PowerLeave,
    GovernAi,
    About,
    Contact,
    NotFound,
}

impl Route {
    /// Every routable page, excluding [`Route::NotFound`].
    pub const PAGES: [Self; 5] =
        [Self::Home, Self::PowerLeave, Self::GovernAi, Self::About, Self::Contact];

    /// Resolves a request path. Trailing slashes are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match normalize_path(path) {
            "/" => Self::Home,
            "/powerleave" => Self::PowerLeave,
            "/govern-ai" => Self::GovernAi,
            "/about" => Self::About,
            "/contact" => Self::Contact,
            _ => Self::NotFound,
        }
    }

    /// Canonical path, `None` for [`Route::NotFound`].
    #[must_use]
    pub const fn path(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::PowerLeave => Some("/powerleave"),
            Self::GovernAi => Some("/govern-ai"),
            Self::About => Some("/about"),
            Self::Contact => Some("/contact"),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub const fn is_product(self) -> bool {
        matches!(self, Self::PowerLeave | Self::GovernAi)
    }
}

/// Drops query, fragment and trailing slashes. The empty path is the root.
fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// A top-level navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub label: TranslationKey,
}

impl NavLink {
    /// Highlighted only on an exact match of its own page.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        Route::from_path(current_path) == self.route
    }
}

/// Links shown directly in the navigation bar, in display order.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { route: Route::Home, label: TranslationKey::NavHome },
    NavLink { route: Route::About, label: TranslationKey::NavAbout },
    NavLink { route: Route::Contact, label: TranslationKey::NavContact },
];

/// An entry of the products menu. Product names are brands and are not
/// translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductLink {
    pub route: Route,
    pub name: &'static str,
    pub tagline: &'static str,
}

impl ProductLink {
    /// Active on the product page and anything below it.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        let Some(base) = self.route.path() else {
            return false;
        };
        let current = normalize_path(current_path);
        current == base || current.strip_prefix(base).is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const PRODUCTS: [ProductLink; 2] = [
    ProductLink { route: Route::PowerLeave, name: "PowerLeave", tagline: "HR & Team Management" },
    ProductLink { route: Route::GovernAi, name: "GOVERN.AI", tagline: "AI Governance" },
];

/// Whether the products menu trigger is highlighted for `current_path`.
#[must_use]
pub fn products_menu_active(current_path: &str) -> bool {
    PRODUCTS.iter().any(|product| product.is_active(current_path))
}

/// Product interest selected on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    PowerLeave,
    GovernAi,
    Both,
    Other,
}

impl Interest {
    pub const ALL: [Self; 4] = [Self::PowerLeave, Self::GovernAi, Self::Both, Self::Other];

    /// Form value submitted for this option.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::PowerLeave => "powerleave",
            Self::GovernAi => "governai",
            Self::Both => "both",
            Self::Other => "other",
        }
    }
}

impl FromStr for Interest {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|interest| interest.value() == s)
            .ok_or_else(|| ContactError::UnknownInterest(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Required contact fields are empty: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Unknown interest option: {0}")]
    UnknownInterest(String),
}

impl ContactError {
    /// User-facing message shown for this error.
    #[must_use]
    pub const fn message_key(&self) -> TranslationKey {
        match self {
            Self::MissingFields(_) | Self::UnknownInterest(_) => TranslationKey::ContactFormError,
        }
    }
}

/// Contact form contents before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub interest: Option<Interest>,
    pub message: String,
}

impl ContactForm {
    /// Checks that name, email and message are filled in.
    ///
    /// Whitespace-only values count as empty. Company and interest are
    /// optional.
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() { Ok(()) } else { Err(ContactError::MissingFields(missing)) }
    }

    /// Clears every field, as after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

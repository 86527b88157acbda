//! Locale-aware ordering for member names
//!
//! Display names carry accents and non-ASCII letters ("bánh mỳ", "Đồng Nai"),
//! so the final tie-break uses a Unicode collator instead of byte order.

use crate::error::{LeaderboardError, Result};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

/// Default collation locale
pub const DEFAULT_LOCALE: &str = "en";

/// Compares names the way a human reader of the given locale expects
pub struct NameCollator {
    locale: String,
    collator: Option<Collator>,
}

impl NameCollator {
    /// Create a collator, failing if the locale tag is invalid or has no data
    pub fn try_new(locale: &str) -> Result<Self> {
        let parsed: Locale = locale.parse().map_err(|e| LeaderboardError::ConfigurationError {
            message: format!("Invalid collation locale {:?}: {}", locale, e),
        })?;
        let data_locale = parsed.into();
        let collator = Collator::try_new(&data_locale, CollatorOptions::new()).map_err(|e| {
            LeaderboardError::ConfigurationError {
                message: format!("No collation data for {:?}: {}", locale, e),
            }
        })?;

        Ok(Self {
            locale: locale.to_string(),
            collator: Some(collator),
        })
    }

    /// Create a collator, degrading to code point order if that fails
    pub fn new(locale: &str) -> Self {
        match Self::try_new(locale) {
            Ok(collator) => collator,
            Err(e) => {
                warn!("Falling back to code point name ordering: {}", e);
                Self::code_point()
            }
        }
    }

    /// Plain code point ordering
    pub fn code_point() -> Self {
        Self {
            locale: String::new(),
            collator: None,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn is_locale_aware(&self) -> bool {
        self.collator.is_some()
    }

    /// Compare two names; names the collator considers equal fall back to
    /// code point order so the result stays deterministic
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
            None => a.cmp(b),
        }
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameCollator")
            .field("locale", &self.locale)
            .field("locale_aware", &self.is_locale_aware())
            .finish()
    }
}

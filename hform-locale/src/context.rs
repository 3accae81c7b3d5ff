//! Ambient locale context
//!
//! The process-wide default locale and format provider. Both are read at call
//! time by the converters, so changes apply to the next conversion.

use crate::{BuiltinProvider, Locale, LocaleFormatProvider};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

static DEFAULT_LOCALE: Lazy<RwLock<Locale>> = Lazy::new(|| RwLock::new(Locale::en()));

static PROVIDER: Lazy<RwLock<Arc<dyn LocaleFormatProvider>>> =
    Lazy::new(|| RwLock::new(Arc::new(BuiltinProvider)));

/// The locale used when options do not name one.
pub fn default_locale() -> Locale {
    DEFAULT_LOCALE.read().clone()
}

/// Change the default locale.
pub fn set_default_locale(locale: Locale) {
    hform_log::debug!("default locale set to {}", locale);
    *DEFAULT_LOCALE.write() = locale;
}

/// The provider converters fetch format tables from.
pub fn current_provider() -> Arc<dyn LocaleFormatProvider> {
    PROVIDER.read().clone()
}

/// Replace the provider.
pub fn set_provider(provider: Arc<dyn LocaleFormatProvider>) {
    *PROVIDER.write() = provider;
}

/// Restore the built-in provider.
pub fn reset_provider() {
    set_provider(Arc::new(BuiltinProvider));
}

/// `locale` if given, otherwise the default locale.
pub fn resolve_locale(locale: Option<&Locale>) -> Locale {
    locale.cloned().unwrap_or_else(default_locale)
}

//! Localized strings for `boxoffice-ui`.
//!
//! The page ships a single locale, `ko-KR`, loaded from
//! `i18n/ko-KR/boxoffice-ui.ftl` through `i18n-embed` + `fluent`. Lookups go
//! through the [`t!`](crate::t) macro, which `i18n-embed-fl` checks against
//! the bundle at compile time.
use std::sync::Once;

use i18n_embed::{fluent::FluentLanguageLoader, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro, e.g. `t!("page-title")`. Named arguments are
/// forwarded to `fl!` unchanged.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the bundle file is `i18n/ko-KR/{DOMAIN}.ftl`.
const DOMAIN: &str = "boxoffice-ui";

/// The one locale the page renders in.
pub const LOCALE: &str = "ko-KR";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = LOCALE.parse().expect("valid locale identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Loads the bundle (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let locale = LOADER.fallback_language().clone();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[locale]) {
            tracing::error!(error = %err, "failed to load {LOCALE} strings");
        }
    });
}

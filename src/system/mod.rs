// System Layer
pub mod locale;
pub mod preference_store;

pub use locale::{LocaleManager, ProcessLocale};
pub use preference_store::PreferenceStore;

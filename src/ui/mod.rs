// UI Layer
pub mod components;
pub mod flags;
pub mod i18n;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{LayoutManager, LayoutMode};

// Re-export components
pub use components::{
    create_language_menu, CommandBar, DropdownMenu, HomeView, Menu, MenuState, TitleBar,
    WarningScreen,
};
pub use i18n::{I18n, Language, MessageKey, TextKey};
pub use theme::Theme;

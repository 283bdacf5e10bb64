// UI Components
pub mod command_bar;
pub mod dropdown_menu;
pub mod home;
pub mod title_bar;
pub mod warning;

// Re-export components for convenience
pub use command_bar::CommandBar;
pub use dropdown_menu::{create_language_menu, DropdownMenu, Menu, MenuState};
pub use home::HomeView;
pub use title_bar::TitleBar;
pub use warning::WarningScreen;

pub mod filter_bar;
pub mod flag_card;
pub mod flag_grid;
pub mod flag_modal;
pub mod header;
pub mod language_picker;
pub mod settings_panel;

pub use filter_bar::FilterBar;
pub use flag_card::FlagCard;
pub use flag_grid::FlagGrid;
pub use flag_modal::FlagModal;
pub use header::Header;
pub use language_picker::LanguagePicker;
pub use settings_panel::SettingsPanel;

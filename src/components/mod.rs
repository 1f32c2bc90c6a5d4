pub mod app;
pub mod board_view;
pub mod complete_overlay;
pub mod found_words_panel;
pub mod stats_panel;

pub use app::App;

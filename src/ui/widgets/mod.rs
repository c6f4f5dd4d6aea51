//! Ratatui widgets for the browse view

mod help_bar;
mod item_list;
mod notice;
mod search_bar;
mod status_bar;
mod tag_panel;
mod text_page;

pub use help_bar::{HelpBar, KeyHint};
pub use item_list::ItemList;
pub use notice::NoticePopup;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use tag_panel::TagPanel;
pub use text_page::TextPage;

pub mod achievement_popup;
pub mod button;
pub mod footer;
pub mod header;
pub mod login_modal;
pub mod modal;
pub mod quotes;
pub mod ranking_card;
pub mod ranking_tabs;
pub mod typewriter;
pub mod user_badges;

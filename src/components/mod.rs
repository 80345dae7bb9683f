//! View components for the activity board.

pub mod activity_card;
pub mod confirm_dialog;
pub mod message_banner;
pub mod signup_form;

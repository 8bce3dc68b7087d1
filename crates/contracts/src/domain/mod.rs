pub mod common;
pub mod a101_article;
pub mod a102_user_option;
pub mod a103_setting;

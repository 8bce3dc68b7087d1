pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod http;
pub mod icons;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;

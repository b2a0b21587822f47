pub mod checkbox;
pub mod date_input;
pub mod language_switch;
pub mod mobile_cta;
pub mod parallax_image;
pub mod reservation_form;
pub mod tabs;
pub mod time_select;

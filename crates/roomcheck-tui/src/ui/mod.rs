pub mod booking_modal;
pub mod layout;
pub mod notice_modal;
pub mod toast;

pub use layout::render_layout;
pub use toast::toast_area;

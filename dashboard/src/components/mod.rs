pub mod center_select;
pub mod layout;
pub mod toast;

pub use center_select::CenterSelect;
pub use toast::ToastContainer;

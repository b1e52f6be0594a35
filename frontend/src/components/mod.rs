pub mod handlers;
pub mod landing;
pub mod login_modal;
pub mod nav;
pub mod results;
pub mod upload_section;
pub mod utils;

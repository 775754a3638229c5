mod home;
pub use home::Home;

mod upload;
pub use upload::UploadId;

mod property_info;
pub use property_info::PropertyInfo;

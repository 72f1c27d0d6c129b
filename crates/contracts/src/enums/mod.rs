pub mod lang;
pub mod service_category;

pub use lang::Lang;
pub use service_category::ServiceCategory;

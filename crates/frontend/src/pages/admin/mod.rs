pub mod dashboard;
pub mod login;
pub mod service_form;

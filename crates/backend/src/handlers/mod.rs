pub mod a001_service_listing;
pub mod a002_contact_message;

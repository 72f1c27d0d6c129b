pub mod about;
pub mod admin;
pub mod blog;
pub mod blog_article;
pub mod category;
pub mod city;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod service_detail;

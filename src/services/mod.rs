pub mod booking_service;
pub mod catalog_service;
pub mod client_service;
pub mod employee_service;
pub mod report_service;
pub mod review_service;
pub mod user_service;

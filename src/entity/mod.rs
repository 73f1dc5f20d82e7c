pub mod audit_logs;
pub mod banners;
pub mod categories;
pub mod contact_messages;
pub mod courses;
pub mod enrollments;
pub mod faqs;
pub mod galleries;
pub mod instructors;
pub mod modules;
pub mod services;
pub mod site_settings;
pub mod students;
pub mod testimonials;
pub mod users;

pub use audit_logs::Entity as AuditLogs;
pub use banners::Entity as Banners;
pub use categories::Entity as Categories;
pub use contact_messages::Entity as ContactMessages;
pub use courses::Entity as Courses;
pub use enrollments::Entity as Enrollments;
pub use faqs::Entity as Faqs;
pub use galleries::Entity as Galleries;
pub use instructors::Entity as Instructors;
pub use modules::Entity as Modules;
pub use services::Entity as Services;
pub use site_settings::Entity as SiteSettings;
pub use students::Entity as Students;
pub use testimonials::Entity as Testimonials;
pub use users::Entity as Users;

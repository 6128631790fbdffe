pub mod admin_users;
pub mod faqs;
pub mod features;
pub mod hero_content;
pub mod packages;
pub mod subscriptions;
pub mod testimonials;

pub mod auth;
pub mod enums;
pub mod faqs;
pub mod features;
pub mod hero_content;
pub mod packages;
pub mod payment_webhook;
pub mod subscriptions;
pub mod testimonials;

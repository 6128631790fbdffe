pub mod authentication;
pub mod bootstrap;
pub mod entitlement;
pub mod errors;
pub mod faqs;
pub mod features;
pub mod hero_content;
pub mod packages;
pub mod testimonials;

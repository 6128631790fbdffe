pub mod grant_statuses;

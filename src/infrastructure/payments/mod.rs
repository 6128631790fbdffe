pub mod nowpayments;

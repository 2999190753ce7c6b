pub mod payment;
pub mod schedule;

pub mod ift;
pub mod ift_concurrency;
pub mod ift_foreign;

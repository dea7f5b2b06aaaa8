pub mod ift;

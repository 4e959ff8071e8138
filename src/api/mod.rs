pub mod prediction;

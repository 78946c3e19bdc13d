pub mod elementary;

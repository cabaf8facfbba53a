pub mod adder;
pub mod batch;

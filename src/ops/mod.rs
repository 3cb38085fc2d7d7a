pub mod filter;
pub mod paginate;
pub mod sort;
pub mod task_ops;

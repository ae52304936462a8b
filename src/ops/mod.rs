pub mod edit_session;
pub mod task_ops;
pub mod view;

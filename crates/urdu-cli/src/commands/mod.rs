pub mod config_ops;
pub mod snapshot_ops;
pub mod translate_ops;

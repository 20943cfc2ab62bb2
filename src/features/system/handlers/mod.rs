pub mod system_handler;

pub use system_handler::{
    __path_get_stats, __path_health_check, __path_root, get_stats, health_check, root,
};

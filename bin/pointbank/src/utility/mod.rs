pub mod db_pool;
pub mod logging;
pub mod server;
pub mod shutdown;

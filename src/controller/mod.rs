pub mod db_prefill;
pub mod http_handlers;
pub mod router;
pub mod stats_service;

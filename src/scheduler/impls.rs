pub mod eviction_scheduler;

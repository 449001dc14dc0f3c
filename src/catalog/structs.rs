pub mod catalog_memory;
pub mod torrent_meta;
pub mod torrent_meta_update;

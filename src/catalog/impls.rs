pub mod catalog_memory;
pub mod torrent_meta;

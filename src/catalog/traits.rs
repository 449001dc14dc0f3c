pub mod torrent_catalog;

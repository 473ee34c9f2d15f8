pub mod decompression;
pub mod game_manager;
pub mod installer;
pub mod library;
pub mod protocol;
pub mod registry;
pub mod render;
pub mod selection;
pub mod transport;

use wasm_bindgen::prelude::*;

pub mod config;
pub mod content;
pub mod game;
pub mod layout;
pub mod overlay;
pub mod panel;
pub mod starfield;

use game::CosmicPortfolio;

cosmic_web::export_game!(CosmicPortfolio, "cosmic-portfolio");

//! Demo application that opens a single window and pumps its event loop
//!
//! Pass a TOML config path as the first argument to override the default
//! window parameters, e.g.:
//!
//! ```toml
//! width = 1024
//! height = 768
//! title = "my window"
//! background = [32, 32, 32]
//! ```

use minwin::prelude::*;

fn main() -> Result<(), WindowError> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => WindowConfig::from_toml_file(&path)?,
        None => WindowConfig::new(800, 600, "minwin demo"),
    };

    let mut window = Window::open(&config)?;
    log::info!("window open; close it to exit");

    window.clear();
    while window.is_open() {
        window.clear();
    }

    let (width, height) = window.size();
    log::info!("closing at {}x{}", width, height);
    window.terminate();
    Ok(())
}

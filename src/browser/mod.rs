pub mod headless;

pub use headless::{launch_headless_browser, shutdown_browser};

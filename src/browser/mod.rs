pub mod headless;
pub mod preview;

pub use headless::{launch_headless_browser, print_to_pdf};
pub use preview::{data_url, LaunchMethod, PreviewLauncher};

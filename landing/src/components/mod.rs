// Shared widgets

mod confetti;
mod download;
mod gallery;
mod toast;

pub use confetti::{Celebration, Confetti, provide_celebration};
pub use download::{DownloadButton, DownloadController, DownloadModal};
pub use gallery::Gallery;
pub use toast::{Toasts, provide_toasts};

//! UI Components for Folio.

mod audio_player;
mod contact;
mod gallery;
mod hero;
mod media_slider;
mod nav_header;

pub use audio_player::AudioPlayer;
pub use contact::ContactSection;
pub use gallery::{ProjectCard, ProjectGallery};
pub use hero::Hero;
pub use media_slider::{ImageSlider, VideoSection};
pub use nav_header::{NavHeader, NavLocation};

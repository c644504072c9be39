//! Media slider paging and slide classification.

use crate::types::Project;

/// Substring identifying an embeddable video player URL.
pub const EMBED_MARKER: &str = "youtube.com/embed";

/// Height of embedded players, in pixels.
pub const EMBED_HEIGHT_PX: u32 = 360;

/// Permissions granted to embedded players.
pub const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// How a slide is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Image,
    /// Native video element: muted, looped, no autoplay, with controls
    Video,
    /// Third-party player in an iframe
    Embed,
}

/// One entry in a carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub kind: SlideKind,
    pub src: String,
}

impl Slide {
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            kind: SlideKind::Image,
            src: src.into(),
        }
    }

    /// Classify a video URL as embed or native video.
    pub fn video(url: impl Into<String>) -> Self {
        let src = url.into();
        let kind = if src.contains(EMBED_MARKER) {
            SlideKind::Embed
        } else {
            SlideKind::Video
        };
        Self { kind, src }
    }
}

/// Image slides of a project: `images`, else the single `image`.
pub fn image_slides(project: &Project) -> Vec<Slide> {
    project.slide_images().into_iter().map(Slide::image).collect()
}

/// Layout of the video area, chosen by how many videos a project has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoLayout {
    /// No videos; the section is not rendered
    Empty,
    /// One video, rendered inline without navigation chrome
    Single(Slide),
    /// Two or more videos in a paged carousel
    Carousel(Vec<Slide>),
}

impl VideoLayout {
    pub fn for_project(project: &Project) -> Self {
        Self::from_urls(&project.video_urls)
    }

    pub fn from_urls(urls: &[String]) -> Self {
        let mut slides: Vec<Slide> = urls.iter().map(Slide::video).collect();
        match slides.len() {
            0 => VideoLayout::Empty,
            1 => VideoLayout::Single(slides.remove(0)),
            _ => VideoLayout::Carousel(slides),
        }
    }
}

/// Paging state of one carousel.
///
/// `index` always satisfies `index < count` when `count > 0`; next and
/// previous wrap around at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderState {
    index: usize,
    count: usize,
}

impl SliderState {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn next(&mut self) {
        if self.count > 0 {
            self.index = (self.index + 1) % self.count;
        }
    }

    pub fn prev(&mut self) {
        if self.count > 0 {
            self.index = (self.index + self.count - 1) % self.count;
        }
    }

    /// Jump to a slide (dot click). Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.count {
            self.index = index;
        }
    }

    /// Whether arrows and dots are shown.
    pub fn has_chrome(&self) -> bool {
        self.count > 1
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// CSS transform of the slide track.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}

/// Navigation input for a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderNav {
    Prev,
    Next,
    GoTo(usize),
}

impl SliderState {
    pub fn apply(&mut self, nav: SliderNav) {
        match nav {
            SliderNav::Prev => self.prev(),
            SliderNav::Next => self.next(),
            SliderNav::GoTo(index) => self.go_to(index),
        }
        tracing::debug!(index = self.index, count = self.count, "Slider moved");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classify_video() {
        assert_eq!(
            Slide::video("https://www.youtube.com/embed/abc").kind,
            SlideKind::Embed
        );
        assert_eq!(Slide::video("video/demo.mp4").kind, SlideKind::Video);
        assert_eq!(
            Slide::video("https://www.youtube.com/watch?v=abc").kind,
            SlideKind::Video
        );
    }

    #[test]
    fn test_video_layouts() {
        assert_eq!(VideoLayout::from_urls(&[]), VideoLayout::Empty);
        assert_eq!(
            VideoLayout::from_urls(&urls(&["a.mp4"])),
            VideoLayout::Single(Slide::video("a.mp4"))
        );
        match VideoLayout::from_urls(&urls(&["a.mp4", "https://youtube.com/embed/x"])) {
            VideoLayout::Carousel(slides) => {
                assert_eq!(slides.len(), 2);
                assert_eq!(slides[1].kind, SlideKind::Embed);
            }
            other => panic!("expected carousel, got {:?}", other),
        }
    }

    #[test]
    fn test_wraparound() {
        let mut slider = SliderState::new(3);
        slider.prev();
        assert_eq!(slider.index(), 2);
        slider.next();
        assert_eq!(slider.index(), 0);
        slider.next();
        slider.next();
        slider.next();
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn test_go_to() {
        let mut slider = SliderState::new(4);
        slider.apply(SliderNav::GoTo(3));
        assert_eq!(slider.index(), 3);
        assert!(slider.is_active(3));
        slider.apply(SliderNav::GoTo(9));
        assert_eq!(slider.index(), 3);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty = SliderState::new(0);
        empty.next();
        empty.prev();
        assert_eq!(empty.index(), 0);
        assert!(!empty.has_chrome());

        let single = SliderState::new(1);
        assert!(!single.has_chrome());
        assert!(SliderState::new(2).has_chrome());
    }

    #[test]
    fn test_track_transform() {
        let mut slider = SliderState::new(3);
        assert_eq!(slider.track_transform(), "translateX(-0%)");
        slider.next();
        slider.next();
        assert_eq!(slider.track_transform(), "translateX(-200%)");
    }
}

//! Image carousel for the product detail view.

/// Index-cycling state over a fixed list of images.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    /// Start at the first image.
    pub fn new(images: Vec<String>) -> Self {
        Self { images, index: 0 }
    }

    /// Advance, wrapping past the last image to the first.
    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    /// Step back, wrapping from the first image to the last.
    pub fn previous(&mut self) {
        if !self.images.is_empty() {
            self.index = self.index.checked_sub(1).unwrap_or(self.images.len() - 1);
        }
    }

    /// Jump to an image. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The image at the current index.
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Track offset of the current slide, as a percentage of one slide width.
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel {
        Carousel::new((0..n).map(|i| format!("img-{}.jpg", i)).collect())
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut c = carousel(3);
        c.next();
        c.next();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
        assert_eq!(c.current(), Some("img-0.jpg"));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut c = carousel(3);
        c.previous();
        assert_eq!(c.index(), 2);
        c.previous();
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_go_to() {
        let mut c = carousel(4);
        assert!(c.go_to(3));
        assert_eq!(c.offset_percent(), 300);
        assert!(!c.go_to(4));
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_single_image() {
        let mut c = carousel(1);
        c.next();
        assert_eq!(c.index(), 0);
        c.previous();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::default();
        c.next();
        c.previous();
        assert!(!c.go_to(0));
        assert_eq!(c.current(), None);
    }
}

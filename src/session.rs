use media_library::ImageRef;

/// Result of asking the platform for a photo
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    Selected(ImageRef),
    Cancelled,
}

/// In-memory state of one editing session.
///
/// Lives in a single signal owned by the `App` component; children only get
/// read access and callbacks that map onto the methods below.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    /// Photo being decorated, `None` shows the placeholder
    pub base_image: Option<ImageRef>,
    /// Reset / add sticker / save row instead of the choose buttons
    pub options_visible: bool,
    /// Emoji picker sheet
    pub picker_visible: bool,
    /// `None` means no sticker overlay
    pub chosen_sticker: Option<ImageRef>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the result of the image picker. A cancelled pick changes nothing.
    /// Returns whether the session changed.
    pub fn apply_pick(&mut self, outcome: PickOutcome) -> bool {
        match outcome {
            PickOutcome::Selected(image) => {
                log::debug!("Base image selected: {}", image.name());
                self.base_image = Some(image);
                self.options_visible = true;
                true
            }
            PickOutcome::Cancelled => false,
        }
    }

    /// "Use this photo": shows the options without requiring a pick, so the
    /// placeholder can be decorated as well.
    pub fn use_current_photo(&mut self) {
        self.options_visible = true;
    }

    pub fn reset_options(&mut self) {
        self.options_visible = false;
    }

    pub fn open_sticker_picker(&mut self) {
        self.picker_visible = true;
    }

    pub fn close_sticker_picker(&mut self) {
        self.picker_visible = false;
    }

    /// Choosing a sticker always closes the picker as well
    pub fn choose_sticker(&mut self, sticker: ImageRef) {
        log::debug!("Sticker chosen: {}", sticker.name());
        self.chosen_sticker = Some(sticker);
        self.close_sticker_picker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(name: &str) -> ImageRef {
        ImageRef::file(name)
    }

    #[test]
    fn test_initial_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.base_image, None);
        assert_eq!(session.chosen_sticker, None);
        assert!(!session.options_visible);
        assert!(!session.picker_visible);
    }

    #[test]
    fn test_successful_pick_shows_options() {
        let mut session = Session::new();
        assert!(session.apply_pick(PickOutcome::Selected(img("img1"))));
        assert_eq!(session.base_image, Some(img("img1")));
        assert!(session.options_visible);
    }

    #[test]
    fn test_cancelled_pick_leaves_session_unchanged() {
        let mut session = Session::new();
        session.apply_pick(PickOutcome::Selected(img("img1")));
        session.reset_options();
        session.choose_sticker(img("emoji2"));
        let before = session.clone();

        assert!(!session.apply_pick(PickOutcome::Cancelled));
        assert_eq!(session, before);
    }

    #[test]
    fn test_reset_options_is_idempotent_and_keeps_images() {
        let mut session = Session::new();
        session.apply_pick(PickOutcome::Selected(img("img1")));
        session.choose_sticker(img("emoji1"));

        session.reset_options();
        let once = session.clone();
        session.reset_options();

        assert_eq!(session, once);
        assert!(!session.options_visible);
        assert_eq!(session.base_image, Some(img("img1")));
        assert_eq!(session.chosen_sticker, Some(img("emoji1")));
    }

    #[test]
    fn test_choose_sticker_closes_picker() {
        for open_first in [true, false] {
            let mut session = Session::new();
            if open_first {
                session.open_sticker_picker();
            }
            session.choose_sticker(img("emoji4"));
            assert_eq!(session.chosen_sticker, Some(img("emoji4")));
            assert!(!session.picker_visible);
        }
    }

    #[test]
    fn test_open_then_close_picker() {
        let mut session = Session::new();
        session.open_sticker_picker();
        assert!(session.picker_visible);
        session.close_sticker_picker();
        assert!(!session.picker_visible);
        assert!(session.chosen_sticker.is_none());
    }

    #[test]
    fn test_picker_and_options_are_independent() {
        let mut session = Session::new();
        session.open_sticker_picker();
        assert!(!session.options_visible);
        session.use_current_photo();
        session.reset_options();
        assert!(session.picker_visible);
    }

    #[test]
    fn test_use_current_photo_without_pick() {
        let mut session = Session::new();
        session.use_current_photo();
        assert!(session.options_visible);
        assert_eq!(session.base_image, None);
    }

    #[test]
    fn test_full_scenario() {
        let mut session = Session::new();
        session.apply_pick(PickOutcome::Selected(img("img1")));
        assert_eq!(
            session,
            Session {
                base_image: Some(img("img1")),
                options_visible: true,
                picker_visible: false,
                chosen_sticker: None,
            }
        );

        session.open_sticker_picker();
        session.choose_sticker(img("emoji3"));
        assert_eq!(
            session,
            Session {
                base_image: Some(img("img1")),
                options_visible: true,
                picker_visible: false,
                chosen_sticker: Some(img("emoji3")),
            }
        );
    }
}

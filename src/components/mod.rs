pub mod buttons;
pub mod emoji_picker;
pub mod emoji_sticker;
pub mod image_viewer;
pub mod notice;

pub use buttons::{Button, ButtonTheme, CircleButton, IconButton};
pub use emoji_picker::{EmojiList, EmojiPicker};
pub use emoji_sticker::EmojiSticker;
pub use image_viewer::ImageViewer;
pub use notice::{Notice, NoticeBanner};

//! Stock mono images shipped with the ev3dev OS image.

use std::path::Path;

/// An image preinstalled under `/usr/share/images/ev3dev/mono/`.
///
/// Members are grouped by the category directory the image lives in. The
/// set is fixed by the OS image; resolving a label that is not listed here
/// fails, it never falls back to probing the filesystem.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageFile {
    // information
    Right,
    Forward,
    Accept,
    QuestionMark,
    #[strum(serialize = "STOP_1")]
    Stop1,
    Left,
    Decline,
    ThumbsDown,
    Backward,
    NoGo,
    Warning,
    #[strum(serialize = "STOP_2")]
    Stop2,
    ThumbsUp,
    // lego
    Ev3,
    Ev3Icon,
    // objects
    Target,
    // eyes
    BottomRight,
    BottomLeft,
    Evil,
    #[strum(serialize = "CRAZY_2")]
    Crazy2,
    KnockedOut,
    PinchedRight,
    Winking,
    Dizzy,
    Down,
    TiredMiddle,
    MiddleRight,
    Sleeping,
    MiddleLeft,
    TiredRight,
    PinchedLeft,
    PinchedMiddle,
    #[strum(serialize = "CRAZY_1")]
    Crazy1,
    Neutral,
    Awake,
    Up,
    TiredLeft,
    Angry,
}

impl ImageFile {
    /// Absolute path of the image on the OS image.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Right => "/usr/share/images/ev3dev/mono/information/right.png",
            Self::Forward => "/usr/share/images/ev3dev/mono/information/forward.png",
            Self::Accept => "/usr/share/images/ev3dev/mono/information/accept.png",
            Self::QuestionMark => "/usr/share/images/ev3dev/mono/information/question_mark.png",
            Self::Stop1 => "/usr/share/images/ev3dev/mono/information/stop_1.png",
            Self::Left => "/usr/share/images/ev3dev/mono/information/left.png",
            Self::Decline => "/usr/share/images/ev3dev/mono/information/decline.png",
            Self::ThumbsDown => "/usr/share/images/ev3dev/mono/information/thumbs_down.png",
            Self::Backward => "/usr/share/images/ev3dev/mono/information/backward.png",
            Self::NoGo => "/usr/share/images/ev3dev/mono/information/no_go.png",
            Self::Warning => "/usr/share/images/ev3dev/mono/information/warning.png",
            Self::Stop2 => "/usr/share/images/ev3dev/mono/information/stop_2.png",
            Self::ThumbsUp => "/usr/share/images/ev3dev/mono/information/thumbs_up.png",
            Self::Ev3 => "/usr/share/images/ev3dev/mono/lego/ev3.png",
            Self::Ev3Icon => "/usr/share/images/ev3dev/mono/lego/ev3_icon.png",
            Self::Target => "/usr/share/images/ev3dev/mono/objects/target.png",
            Self::BottomRight => "/usr/share/images/ev3dev/mono/eyes/bottom_right.png",
            Self::BottomLeft => "/usr/share/images/ev3dev/mono/eyes/bottom_left.png",
            Self::Evil => "/usr/share/images/ev3dev/mono/eyes/evil.png",
            Self::Crazy2 => "/usr/share/images/ev3dev/mono/eyes/crazy_2.png",
            Self::KnockedOut => "/usr/share/images/ev3dev/mono/eyes/knocked_out.png",
            Self::PinchedRight => "/usr/share/images/ev3dev/mono/eyes/pinched_right.png",
            Self::Winking => "/usr/share/images/ev3dev/mono/eyes/winking.png",
            Self::Dizzy => "/usr/share/images/ev3dev/mono/eyes/dizzy.png",
            Self::Down => "/usr/share/images/ev3dev/mono/eyes/down.png",
            Self::TiredMiddle => "/usr/share/images/ev3dev/mono/eyes/tired_middle.png",
            Self::MiddleRight => "/usr/share/images/ev3dev/mono/eyes/middle_right.png",
            Self::Sleeping => "/usr/share/images/ev3dev/mono/eyes/sleeping.png",
            Self::MiddleLeft => "/usr/share/images/ev3dev/mono/eyes/middle_left.png",
            Self::TiredRight => "/usr/share/images/ev3dev/mono/eyes/tired_right.png",
            Self::PinchedLeft => "/usr/share/images/ev3dev/mono/eyes/pinched_left.png",
            Self::PinchedMiddle => "/usr/share/images/ev3dev/mono/eyes/pinched_middle.png",
            Self::Crazy1 => "/usr/share/images/ev3dev/mono/eyes/crazy_1.png",
            Self::Neutral => "/usr/share/images/ev3dev/mono/eyes/neutral.png",
            Self::Awake => "/usr/share/images/ev3dev/mono/eyes/awake.png",
            Self::Up => "/usr/share/images/ev3dev/mono/eyes/up.png",
            Self::TiredLeft => "/usr/share/images/ev3dev/mono/eyes/tired_left.png",
            Self::Angry => "/usr/share/images/ev3dev/mono/eyes/angry.png",
        }
    }

    /// Name of the category directory the image lives in.
    pub const fn category(self) -> &'static str {
        match self {
            Self::Right
            | Self::Forward
            | Self::Accept
            | Self::QuestionMark
            | Self::Stop1
            | Self::Left
            | Self::Decline
            | Self::ThumbsDown
            | Self::Backward
            | Self::NoGo
            | Self::Warning
            | Self::Stop2
            | Self::ThumbsUp => "information",
            Self::Ev3 | Self::Ev3Icon => "lego",
            Self::Target => "objects",
            Self::BottomRight
            | Self::BottomLeft
            | Self::Evil
            | Self::Crazy2
            | Self::KnockedOut
            | Self::PinchedRight
            | Self::Winking
            | Self::Dizzy
            | Self::Down
            | Self::TiredMiddle
            | Self::MiddleRight
            | Self::Sleeping
            | Self::MiddleLeft
            | Self::TiredRight
            | Self::PinchedLeft
            | Self::PinchedMiddle
            | Self::Crazy1
            | Self::Neutral
            | Self::Awake
            | Self::Up
            | Self::TiredLeft
            | Self::Angry => "eyes",
        }
    }
}

impl AsRef<Path> for ImageFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_path_is_under_the_base_and_a_png() {
        for image in ImageFile::iter() {
            let path = image.path();
            assert!(
                path.starts_with("/usr/share/images/ev3dev/mono/"),
                "bad base: {path}"
            );
            assert!(path.ends_with(".png"), "bad extension: {path}");
            let category = format!("/usr/share/images/ev3dev/mono/{}/", image.category());
            assert!(path.starts_with(&category), "wrong category dir: {path}");
        }
    }

    #[test]
    fn test_labels_resolve() {
        assert_eq!("EV3_ICON".parse::<ImageFile>().unwrap(), ImageFile::Ev3Icon);
        assert_eq!("STOP_1".parse::<ImageFile>().unwrap(), ImageFile::Stop1);
        assert_eq!("CRAZY_2".parse::<ImageFile>().unwrap(), ImageFile::Crazy2);
        assert_eq!(ImageFile::ThumbsUp.to_string(), "THUMBS_UP");
        assert!("SMILING".parse::<ImageFile>().is_err());
    }

    #[test]
    fn test_the_set_is_closed() {
        assert_eq!(ImageFile::iter().count(), 38);
        let paths: std::collections::HashSet<_> =
            ImageFile::iter().map(|i| i.path()).collect();
        assert_eq!(paths.len(), 38);
    }
}

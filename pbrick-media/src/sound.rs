//! Stock sound clips shipped with the ev3dev OS image.

use std::path::Path;

/// A sound clip preinstalled under `/usr/share/sounds/ev3dev/`.
///
/// Members are grouped by the category directory the clip lives in. The
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
pub enum SoundFile {
    // expressions
    Shouting,
    Cheering,
    Crying,
    Ouch,
    #[strum(serialize = "LAUGHING_2")]
    Laughing2,
    Sneezing,
    Smack,
    Boing,
    Boo,
    UhOh,
    Snoring,
    KungFu,
    Fanfare,
    Crunching,
    MagicWand,
    #[strum(serialize = "LAUGHING_1")]
    Laughing1,
    // communication
    Goodbye,
    Bravo,
    Hello,
    Hi,
    GoodJob,
    Morning,
    No,
    Okay,
    OkeyDokey,
    Sorry,
    ThankYou,
    Yes,
    // information
    Activate,
    Analyze,
    Backwards,
    Color,
    Detected,
    Down,
    Error,
    ErrorAlarm,
    Flashing,
    Forward,
    GameOver,
    Go,
    Left,
    Object,
    Right,
    Searching,
    Start,
    Stop,
    Touch,
    Turn,
    Up,
    // movements
    SpeedDown,
    SpeedIdle,
    SpeedUp,
    // colors
    Black,
    Blue,
    Brown,
    Green,
    Red,
    White,
    Yellow,
    // mechanical
    AirRelease,
    Airbrake,
    BackingAlert,
    #[strum(serialize = "HORN_1")]
    Horn1,
    #[strum(serialize = "HORN_2")]
    Horn2,
    Laser,
    MotorIdle,
    MotorStart,
    MotorStop,
    Ratchet,
    Sonar,
    TickTack,
    // animals
    CatPurr,
    #[strum(serialize = "DOG_BARK_1")]
    DogBark1,
    #[strum(serialize = "DOG_BARK_2")]
    DogBark2,
    DogGrowl,
    DogSniff,
    DogWhine,
    ElephantCall,
    #[strum(serialize = "INSECT_BUZZ_1")]
    InsectBuzz1,
    #[strum(serialize = "INSECT_BUZZ_2")]
    InsectBuzz2,
    InsectChirp,
    SnakeHiss,
    SnakeRattle,
    TRexRoar,
    // numbers
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    // system
    Click,
    Confirm,
    GeneralAlert,
    Overpower,
    Ready,
}

impl SoundFile {
    /// Absolute path of the clip on the OS image.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Shouting => "/usr/share/sounds/ev3dev/expressions/shouting.wav",
            Self::Cheering => "/usr/share/sounds/ev3dev/expressions/cheering.wav",
            Self::Crying => "/usr/share/sounds/ev3dev/expressions/crying.wav",
            Self::Ouch => "/usr/share/sounds/ev3dev/expressions/ouch.wav",
            Self::Laughing2 => "/usr/share/sounds/ev3dev/expressions/laughing_2.wav",
            Self::Sneezing => "/usr/share/sounds/ev3dev/expressions/sneezing.wav",
            Self::Smack => "/usr/share/sounds/ev3dev/expressions/smack.wav",
            Self::Boing => "/usr/share/sounds/ev3dev/expressions/boing.wav",
            Self::Boo => "/usr/share/sounds/ev3dev/expressions/boo.wav",
            Self::UhOh => "/usr/share/sounds/ev3dev/expressions/uh-oh.wav",
            Self::Snoring => "/usr/share/sounds/ev3dev/expressions/snoring.wav",
            Self::KungFu => "/usr/share/sounds/ev3dev/expressions/kung_fu.wav",
            Self::Fanfare => "/usr/share/sounds/ev3dev/expressions/fanfare.wav",
            Self::Crunching => "/usr/share/sounds/ev3dev/expressions/crunching.wav",
            Self::MagicWand => "/usr/share/sounds/ev3dev/expressions/magic_wand.wav",
            Self::Laughing1 => "/usr/share/sounds/ev3dev/expressions/laughing_1.wav",
            Self::Goodbye => "/usr/share/sounds/ev3dev/communication/goodbye.wav",
            Self::Bravo => "/usr/share/sounds/ev3dev/communication/bravo.wav",
            Self::Hello => "/usr/share/sounds/ev3dev/communication/hello.wav",
            Self::Hi => "/usr/share/sounds/ev3dev/communication/hi.wav",
            Self::GoodJob => "/usr/share/sounds/ev3dev/communication/good_job.wav",
            Self::Morning => "/usr/share/sounds/ev3dev/communication/morning.wav",
            Self::No => "/usr/share/sounds/ev3dev/communication/no.wav",
            Self::Okay => "/usr/share/sounds/ev3dev/communication/okay.wav",
            Self::OkeyDokey => "/usr/share/sounds/ev3dev/communication/okey-dokey.wav",
            Self::Sorry => "/usr/share/sounds/ev3dev/communication/sorry.wav",
            Self::ThankYou => "/usr/share/sounds/ev3dev/communication/thank_you.wav",
            Self::Yes => "/usr/share/sounds/ev3dev/communication/yes.wav",
            Self::Activate => "/usr/share/sounds/ev3dev/information/activate.wav",
            Self::Analyze => "/usr/share/sounds/ev3dev/information/analyze.wav",
            Self::Backwards => "/usr/share/sounds/ev3dev/information/backwards.wav",
            Self::Color => "/usr/share/sounds/ev3dev/information/color.wav",
            Self::Detected => "/usr/share/sounds/ev3dev/information/detected.wav",
            Self::Down => "/usr/share/sounds/ev3dev/information/down.wav",
            Self::Error => "/usr/share/sounds/ev3dev/information/error.wav",
            Self::ErrorAlarm => "/usr/share/sounds/ev3dev/information/error_alarm.wav",
            Self::Flashing => "/usr/share/sounds/ev3dev/information/flashing.wav",
            Self::Forward => "/usr/share/sounds/ev3dev/information/forward.wav",
            Self::GameOver => "/usr/share/sounds/ev3dev/information/game_over.wav",
            Self::Go => "/usr/share/sounds/ev3dev/information/go.wav",
            Self::Left => "/usr/share/sounds/ev3dev/information/left.wav",
            Self::Object => "/usr/share/sounds/ev3dev/information/object.wav",
            Self::Right => "/usr/share/sounds/ev3dev/information/right.wav",
            Self::Searching => "/usr/share/sounds/ev3dev/information/searching.wav",
            Self::Start => "/usr/share/sounds/ev3dev/information/start.wav",
            Self::Stop => "/usr/share/sounds/ev3dev/information/stop.wav",
            Self::Touch => "/usr/share/sounds/ev3dev/information/touch.wav",
            Self::Turn => "/usr/share/sounds/ev3dev/information/turn.wav",
            Self::Up => "/usr/share/sounds/ev3dev/information/up.wav",
            Self::SpeedDown => "/usr/share/sounds/ev3dev/movements/speed_down.wav",
            Self::SpeedIdle => "/usr/share/sounds/ev3dev/movements/speed_idle.wav",
            Self::SpeedUp => "/usr/share/sounds/ev3dev/movements/speed_up.wav",
            Self::Black => "/usr/share/sounds/ev3dev/colors/black.wav",
            Self::Blue => "/usr/share/sounds/ev3dev/colors/blue.wav",
            Self::Brown => "/usr/share/sounds/ev3dev/colors/brown.wav",
            Self::Green => "/usr/share/sounds/ev3dev/colors/green.wav",
            Self::Red => "/usr/share/sounds/ev3dev/colors/red.wav",
            Self::White => "/usr/share/sounds/ev3dev/colors/white.wav",
            Self::Yellow => "/usr/share/sounds/ev3dev/colors/yellow.wav",
            Self::AirRelease => "/usr/share/sounds/ev3dev/mechanical/air_release.wav",
            Self::Airbrake => "/usr/share/sounds/ev3dev/mechanical/airbrake.wav",
            Self::BackingAlert => "/usr/share/sounds/ev3dev/mechanical/backing_alert.wav",
            Self::Horn1 => "/usr/share/sounds/ev3dev/mechanical/horn_1.wav",
            Self::Horn2 => "/usr/share/sounds/ev3dev/mechanical/horn_2.wav",
            Self::Laser => "/usr/share/sounds/ev3dev/mechanical/laser.wav",
            Self::MotorIdle => "/usr/share/sounds/ev3dev/mechanical/motor_idle.wav",
            Self::MotorStart => "/usr/share/sounds/ev3dev/mechanical/motor_start.wav",
            Self::MotorStop => "/usr/share/sounds/ev3dev/mechanical/motor_stop.wav",
            Self::Ratchet => "/usr/share/sounds/ev3dev/mechanical/ratchet.wav",
            Self::Sonar => "/usr/share/sounds/ev3dev/mechanical/sonar.wav",
            Self::TickTack => "/usr/share/sounds/ev3dev/mechanical/tick_tack.wav",
            Self::CatPurr => "/usr/share/sounds/ev3dev/animals/cat_purr.wav",
            Self::DogBark1 => "/usr/share/sounds/ev3dev/animals/dog_bark_1.wav",
            Self::DogBark2 => "/usr/share/sounds/ev3dev/animals/dog_bark_2.wav",
            Self::DogGrowl => "/usr/share/sounds/ev3dev/animals/dog_growl.wav",
            Self::DogSniff => "/usr/share/sounds/ev3dev/animals/dog_sniff.wav",
            Self::DogWhine => "/usr/share/sounds/ev3dev/animals/dog_whine.wav",
            Self::ElephantCall => "/usr/share/sounds/ev3dev/animals/elephant_call.wav",
            Self::InsectBuzz1 => "/usr/share/sounds/ev3dev/animals/insect_buzz_1.wav",
            Self::InsectBuzz2 => "/usr/share/sounds/ev3dev/animals/insect_buzz_2.wav",
            Self::InsectChirp => "/usr/share/sounds/ev3dev/animals/insect_chirp.wav",
            Self::SnakeHiss => "/usr/share/sounds/ev3dev/animals/snake_hiss.wav",
            Self::SnakeRattle => "/usr/share/sounds/ev3dev/animals/snake_rattle.wav",
            Self::TRexRoar => "/usr/share/sounds/ev3dev/animals/t-rex_roar.wav",
            Self::Zero => "/usr/share/sounds/ev3dev/numbers/zero.wav",
            Self::One => "/usr/share/sounds/ev3dev/numbers/one.wav",
            Self::Two => "/usr/share/sounds/ev3dev/numbers/two.wav",
            Self::Three => "/usr/share/sounds/ev3dev/numbers/three.wav",
            Self::Four => "/usr/share/sounds/ev3dev/numbers/four.wav",
            Self::Five => "/usr/share/sounds/ev3dev/numbers/five.wav",
            Self::Six => "/usr/share/sounds/ev3dev/numbers/six.wav",
            Self::Seven => "/usr/share/sounds/ev3dev/numbers/seven.wav",
            Self::Eight => "/usr/share/sounds/ev3dev/numbers/eight.wav",
            Self::Nine => "/usr/share/sounds/ev3dev/numbers/nine.wav",
            Self::Ten => "/usr/share/sounds/ev3dev/numbers/ten.wav",
            Self::Click => "/usr/share/sounds/ev3dev/system/click.wav",
            Self::Confirm => "/usr/share/sounds/ev3dev/system/confirm.wav",
            Self::GeneralAlert => "/usr/share/sounds/ev3dev/system/general_alert.wav",
            Self::Overpower => "/usr/share/sounds/ev3dev/system/overpower.wav",
            Self::Ready => "/usr/share/sounds/ev3dev/system/ready.wav",
        }
    }

    /// Name of the category directory the clip lives in.
    pub const fn category(self) -> &'static str {
        match self {
            Self::Shouting
            | Self::Cheering
            | Self::Crying
            | Self::Ouch
            | Self::Laughing2
            | Self::Sneezing
            | Self::Smack
            | Self::Boing
            | Self::Boo
            | Self::UhOh
            | Self::Snoring
            | Self::KungFu
            | Self::Fanfare
            | Self::Crunching
            | Self::MagicWand
            | Self::Laughing1 => "expressions",
            Self::Goodbye
            | Self::Bravo
            | Self::Hello
            | Self::Hi
            | Self::GoodJob
            | Self::Morning
            | Self::No
            | Self::Okay
            | Self::OkeyDokey
            | Self::Sorry
            | Self::ThankYou
            | Self::Yes => "communication",
            Self::Activate
            | Self::Analyze
            | Self::Backwards
            | Self::Color
            | Self::Detected
            | Self::Down
            | Self::Error
            | Self::ErrorAlarm
            | Self::Flashing
            | Self::Forward
            | Self::GameOver
            | Self::Go
            | Self::Left
            | Self::Object
            | Self::Right
            | Self::Searching
            | Self::Start
            | Self::Stop
            | Self::Touch
            | Self::Turn
            | Self::Up => "information",
            Self::SpeedDown | Self::SpeedIdle | Self::SpeedUp => "movements",
            Self::Black
            | Self::Blue
            | Self::Brown
            | Self::Green
            | Self::Red
            | Self::White
            | Self::Yellow => "colors",
            Self::AirRelease
            | Self::Airbrake
            | Self::BackingAlert
            | Self::Horn1
            | Self::Horn2
            | Self::Laser
            | Self::MotorIdle
            | Self::MotorStart
            | Self::MotorStop
            | Self::Ratchet
            | Self::Sonar
            | Self::TickTack => "mechanical",
            Self::CatPurr
            | Self::DogBark1
            | Self::DogBark2
            | Self::DogGrowl
            | Self::DogSniff
            | Self::DogWhine
            | Self::ElephantCall
            | Self::InsectBuzz1
            | Self::InsectBuzz2
            | Self::InsectChirp
            | Self::SnakeHiss
            | Self::SnakeRattle
            | Self::TRexRoar => "animals",
            Self::Zero
            | Self::One
            | Self::Two
            | Self::Three
            | Self::Four
            | Self::Five
            | Self::Six
            | Self::Seven
            | Self::Eight
            | Self::Nine
            | Self::Ten => "numbers",
            Self::Click
            | Self::Confirm
            | Self::GeneralAlert
            | Self::Overpower
            | Self::Ready => "system",
        }
    }
}

impl AsRef<Path> for SoundFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_path_is_under_the_base_and_a_wav() {
        for clip in SoundFile::iter() {
            let path = clip.path();
            assert!(
                path.starts_with("/usr/share/sounds/ev3dev/"),
                "bad base: {path}"
            );
            assert!(path.ends_with(".wav"), "bad extension: {path}");
            let category = format!("/usr/share/sounds/ev3dev/{}/", clip.category());
            assert!(path.starts_with(&category), "wrong category dir: {path}");
        }
    }

    #[test]
    fn test_irregular_file_names() {
        assert_eq!(
            SoundFile::UhOh.path(),
            "/usr/share/sounds/ev3dev/expressions/uh-oh.wav"
        );
        assert_eq!(
            SoundFile::OkeyDokey.path(),
            "/usr/share/sounds/ev3dev/communication/okey-dokey.wav"
        );
        assert_eq!(
            SoundFile::TRexRoar.path(),
            "/usr/share/sounds/ev3dev/animals/t-rex_roar.wav"
        );
    }

    #[test]
    fn test_labels_resolve() {
        assert_eq!("HELLO".parse::<SoundFile>().unwrap(), SoundFile::Hello);
        assert_eq!(
            "T_REX_ROAR".parse::<SoundFile>().unwrap(),
            SoundFile::TRexRoar
        );
        assert_eq!(
            "LAUGHING_1".parse::<SoundFile>().unwrap(),
            SoundFile::Laughing1
        );
        assert_eq!(SoundFile::GoodJob.to_string(), "GOOD_JOB");
        assert!("YODELING".parse::<SoundFile>().is_err());
    }

    #[test]
    fn test_the_set_is_closed() {
        assert_eq!(SoundFile::iter().count(), 100);
        let paths: std::collections::HashSet<_> =
            SoundFile::iter().map(|c| c.path()).collect();
        assert_eq!(paths.len(), 100);
    }
}

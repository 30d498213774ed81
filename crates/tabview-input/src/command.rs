//! The closed set of pager commands produced by input translation.

use std::fmt;

/// Label returned by [`describe`] for values outside the command range.
pub const UNKNOWN_COMMAND: &str = "unknown command";

/// Semantic commands understood by the pager.
///
/// Discriminants follow declaration order starting at zero. The order exists
/// for diagnostics only; callers should not do arithmetic on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum Command {
    /// Input with no binding. Consumers treat it as a no-op.
    Invalid = 0,
    /// The terminal was resized.
    ResizeEvent,
    /// A mouse report is pending.
    MouseEvent,

    ReleaseCols,
    FreezeOneCol,
    FreezeTwoCols,
    FreezeThreeCols,
    FreezeFourCols,

    SoundToggle,
    MouseToggle,
    UtfArtToggle,
    /// Case sensitive search.
    CsSearchSet,
    /// Case insensitive search.
    CiSearchSet,
    /// Search is case sensitive only when the pattern has upper case chars.
    UsSearchSet,
    HighlightLines,
    HighlightValues,
    NoHighlight,

    SetThemeMidnightBlack,
    SetThemeMidnight,
    SetThemeFoxpro,
    SetThemePdmenu,
    SetThemeWhite,
    SetThemeMutt,
    SetThemePcfand,
    SetThemeGreen,
    SetThemeBlue,
    SetThemeWp,
    SetThemeLowcontrast,
    SetThemeDarkcyan,
    SetThemeParadox,
    SetThemeDBase,
    SetThemeDBasemagenta,
    SetThemeRed,
    SetThemeSimple,
    SaveSetup,

    Quit,
    ShowMenu,
    FlushBookmarks,
    ToggleBookmark,
    PrevBookmark,
    NextBookmark,

    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    ScrollUpHalfPage,
    ScrollDownHalfPage,
    MoveLeft,
    MoveRight,
    CursorFirstRow,
    CursorLastRow,
    CursorFirstRowPage,
    CursorLastRowPage,
    CursorHalfPage,
    PageUp,
    PageDown,
    ShowFirstCol,
    ShowLastCol,
    SaveData,

    ForwardSearch,
    BackwardSearch,
    SearchNext,
    SearchPrev,
}

impl Command {
    /// Every command, in discriminant order.
    pub const ALL: [Command; 63] = [
        Command::Invalid,
        Command::ResizeEvent,
        Command::MouseEvent,
        Command::ReleaseCols,
        Command::FreezeOneCol,
        Command::FreezeTwoCols,
        Command::FreezeThreeCols,
        Command::FreezeFourCols,
        Command::SoundToggle,
        Command::MouseToggle,
        Command::UtfArtToggle,
        Command::CsSearchSet,
        Command::CiSearchSet,
        Command::UsSearchSet,
        Command::HighlightLines,
        Command::HighlightValues,
        Command::NoHighlight,
        Command::SetThemeMidnightBlack,
        Command::SetThemeMidnight,
        Command::SetThemeFoxpro,
        Command::SetThemePdmenu,
        Command::SetThemeWhite,
        Command::SetThemeMutt,
        Command::SetThemePcfand,
        Command::SetThemeGreen,
        Command::SetThemeBlue,
        Command::SetThemeWp,
        Command::SetThemeLowcontrast,
        Command::SetThemeDarkcyan,
        Command::SetThemeParadox,
        Command::SetThemeDBase,
        Command::SetThemeDBasemagenta,
        Command::SetThemeRed,
        Command::SetThemeSimple,
        Command::SaveSetup,
        Command::Quit,
        Command::ShowMenu,
        Command::FlushBookmarks,
        Command::ToggleBookmark,
        Command::PrevBookmark,
        Command::NextBookmark,
        Command::CursorUp,
        Command::CursorDown,
        Command::ScrollUp,
        Command::ScrollDown,
        Command::ScrollUpHalfPage,
        Command::ScrollDownHalfPage,
        Command::MoveLeft,
        Command::MoveRight,
        Command::CursorFirstRow,
        Command::CursorLastRow,
        Command::CursorFirstRowPage,
        Command::CursorLastRowPage,
        Command::CursorHalfPage,
        Command::PageUp,
        Command::PageDown,
        Command::ShowFirstCol,
        Command::ShowLastCol,
        Command::SaveData,
        Command::ForwardSearch,
        Command::BackwardSearch,
        Command::SearchNext,
        Command::SearchPrev,
    ];

    /// Look up a command by its numeric discriminant.
    pub fn from_repr(value: i32) -> Option<Command> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Command::ALL.get(idx).copied())
    }

    /// Human readable label for logs and key inspection output.
    ///
    /// Labels are never parsed back into commands.
    pub fn name(self) -> &'static str {
        match self {
            Command::Invalid => "Invalid",
            Command::ResizeEvent => "RESIZE",
            Command::MouseEvent => "MOUSE",

            Command::ReleaseCols => "ReleaseCols",
            Command::FreezeOneCol => "FreezeOneCol",
            Command::FreezeTwoCols => "FreezeTwoCols",
            Command::FreezeThreeCols => "FreezeThreeCols",
            Command::FreezeFourCols => "FreezeFourCols",
            Command::SoundToggle => "SoundToggle",
            Command::MouseToggle => "MouseToggle",
            Command::UtfArtToggle => "UtfArtToggle",
            Command::CsSearchSet => "CSSearchSet",
            Command::CiSearchSet => "CISearchSet",
            Command::UsSearchSet => "USSearchSet",
            Command::HighlightLines => "HighlightLines",
            Command::HighlightValues => "HighlightValues",
            Command::NoHighlight => "NoHighlight",

            Command::SetThemeMidnightBlack => "SetTheme_MidnightBlack",
            Command::SetThemeMidnight => "SetTheme_Midnight",
            Command::SetThemeFoxpro => "SetTheme_Foxpro",
            Command::SetThemePdmenu => "SetTheme_Pdmenu",
            Command::SetThemeWhite => "SetTheme_White",
            Command::SetThemeMutt => "SetTheme_Mutt",
            Command::SetThemePcfand => "SetTheme_Pcfand",
            Command::SetThemeGreen => "SetTheme_Green",
            Command::SetThemeBlue => "SetTheme_Blue",
            Command::SetThemeWp => "SetTheme_WP",
            Command::SetThemeLowcontrast => "SetTheme_Lowcontrast",
            Command::SetThemeDarkcyan => "SetTheme_Darkcyan",
            Command::SetThemeParadox => "SetTheme_Paradox",
            Command::SetThemeDBase => "SetTheme_DBase",
            Command::SetThemeDBasemagenta => "SetTheme_DBasemagenta",
            Command::SetThemeRed => "SetTheme_Red",
            Command::SetThemeSimple => "SetTheme_Simple",
            Command::SaveSetup => "SaveSetup",

            Command::Quit => "Quit",
            Command::ShowMenu => "ShowMenu",
            Command::FlushBookmarks => "FlushBookmarks",
            Command::ToggleBookmark => "ToggleBookmark",
            Command::PrevBookmark => "PrevBookmark",
            Command::NextBookmark => "NextBookmark",
            Command::CursorUp => "CursorUp",
            Command::CursorDown => "CursorDown",
            Command::ScrollUp => "ScrollUp",
            Command::ScrollDown => "ScrollDown",
            Command::ScrollUpHalfPage => "ScrollUpHalfPage",
            Command::ScrollDownHalfPage => "ScrollDownHalfPage",
            Command::MoveLeft => "MoveLeft",
            Command::MoveRight => "MoveRight",
            Command::CursorFirstRow => "CursorFirstRow",
            Command::CursorLastRow => "CursorLastRow",
            Command::CursorFirstRowPage => "CursorFirstRowPage",
            Command::CursorLastRowPage => "CursorLastRowPage",
            Command::CursorHalfPage => "CursorHalfPage",
            Command::PageUp => "PageUp",
            Command::PageDown => "PageDown",
            Command::ShowFirstCol => "ShowFirstCol",
            Command::ShowLastCol => "ShowLastCol",
            Command::SaveData => "SaveData",
            Command::ForwardSearch => "ForwardSearch",
            Command::BackwardSearch => "BackwardSearch",
            Command::SearchNext => "SearchNext",
            Command::SearchPrev => "SearchPrev",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Label for a raw command value, e.g. one read back from a log or a
/// different build of the command set.
pub fn describe(value: i32) -> &'static str {
    Command::from_repr(value).map_or(UNKNOWN_COMMAND, Command::name)
}

//! Keyboard shortcuts
//!
//! | Key            | Command                      |
//! |----------------|------------------------------|
//! | `w` / `s`      | increase / decrease left     |
//! | `d` / `a`      | increase / decrease right    |
//! | `1`..`9`       | switch board                 |
//! | `r o y g l b p m` | palette color, uppercase for the light pair |
//! | `Escape`       | "none" color                 |

use serde::{Deserialize, Serialize};

use crate::models::ScreenSide;

/// Palette keys in palette order
const COLOR_KEYS: [char; 8] = ['r', 'o', 'y', 'g', 'l', 'b', 'p', 'm'];

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum KeyCommand {
    IncreaseFrets { side: ScreenSide },
    DecreaseFrets { side: ScreenSide },
    /// Board slot, 1-based
    SwitchBoard { slot: usize },
    SelectColor { index: usize, light: bool },
    SelectNone,
}

impl KeyCommand {
    /// Map a `KeyboardEvent.key` value to a command
    pub fn from_key(key: &str) -> Option<Self> {
        if key == "Escape" {
            return Some(KeyCommand::SelectNone);
        }

        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };

        let command = match c {
            'w' => KeyCommand::IncreaseFrets { side: ScreenSide::Left },
            's' => KeyCommand::DecreaseFrets { side: ScreenSide::Left },
            'd' => KeyCommand::IncreaseFrets { side: ScreenSide::Right },
            'a' => KeyCommand::DecreaseFrets { side: ScreenSide::Right },
            '1'..='9' => KeyCommand::SwitchBoard {
                slot: c as usize - '0' as usize,
            },
            _ => {
                let index = COLOR_KEYS
                    .iter()
                    .position(|&k| k == c.to_ascii_lowercase())?;
                KeyCommand::SelectColor {
                    index,
                    light: c.is_ascii_uppercase(),
                }
            }
        };
        Some(command)
    }
}

/// Whether the list is being browsed or edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Viewing,
    Editing,
}

/// What a front end applies when a mode becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeEffects {
    /// Rows can be deleted.
    pub rows_deletable: bool,
    /// Label of the button that toggles the mode.
    pub action_label: &'static str,
}

impl Mode {
    pub fn other_mode(self) -> Mode {
        match self {
            Mode::Editing => Mode::Viewing,
            Mode::Viewing => Mode::Editing,
        }
    }

    pub fn effects(self) -> ModeEffects {
        match self {
            Mode::Editing => ModeEffects {
                rows_deletable: true,
                action_label: "Done",
            },
            Mode::Viewing => ModeEffects {
                rows_deletable: false,
                action_label: "Edit",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(Mode::Viewing.other_mode(), Mode::Editing);
        assert_eq!(Mode::Editing.other_mode(), Mode::Viewing);
        assert_eq!(Mode::Viewing.other_mode().other_mode(), Mode::Viewing);
    }

    #[test]
    fn test_effects() {
        assert_eq!(
            Mode::Editing.effects(),
            ModeEffects { rows_deletable: true, action_label: "Done" }
        );
        assert_eq!(
            Mode::Viewing.effects(),
            ModeEffects { rows_deletable: false, action_label: "Edit" }
        );
    }
}

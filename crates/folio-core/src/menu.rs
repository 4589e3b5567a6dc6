//! Mobile menu open/close state machine.
//!
//! Closing is a two step affair: the menu first enters [`MenuPhase::Closing`]
//! and stays mounted while its exit animation runs, then
//! [`MobileMenu::finish_exit`] removes it. Each exit is tagged with an epoch
//! so a completion scheduled for an earlier exit cannot end a later one.

/// Default length of the enter and exit animations.
pub const DEFAULT_MENU_DURATION_MS: u32 = 200;

/// Lifecycle phase of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuPhase {
    /// Not in the render tree.
    #[default]
    Closed,
    /// Mounted and running (or done with) the enter animation.
    Open,
    /// Mounted and running the exit animation for `epoch`.
    Closing { epoch: u32 },
}

/// Mobile menu controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    phase: MenuPhase,
    epoch: u32,
}

impl MobileMenu {
    /// Flip the logical open state.
    pub fn toggle(&mut self) {
        match self.phase {
            MenuPhase::Closed | MenuPhase::Closing { .. } => self.open(),
            MenuPhase::Open => self.close(),
        }
    }

    /// A link or the mail action inside the menu was chosen.
    pub fn select(&mut self) {
        if self.phase == MenuPhase::Open {
            self.close();
        }
    }

    /// The exit animation tagged `epoch` completed.
    ///
    /// Returns whether the menu was removed.
    pub fn finish_exit(&mut self, epoch: u32) -> bool {
        match self.phase {
            MenuPhase::Closing { epoch: current } if current == epoch => {
                log::debug!("menu: exit {epoch} finished");
                self.phase = MenuPhase::Closed;
                true
            }
            _ => false,
        }
    }

    fn open(&mut self) {
        log::debug!("menu: open");
        self.phase = MenuPhase::Open;
    }

    fn close(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        log::debug!("menu: closing (exit {})", self.epoch);
        self.phase = MenuPhase::Closing { epoch: self.epoch };
    }

    /// Current phase.
    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    /// Logical open state, as reported to assistive technology.
    pub fn is_open(&self) -> bool {
        self.phase == MenuPhase::Open
    }

    /// Whether the overlay belongs in the render tree.
    pub fn is_mounted(&self) -> bool {
        self.phase != MenuPhase::Closed
    }

    /// Epoch of the exit in progress, if any.
    pub fn closing_epoch(&self) -> Option<u32> {
        match self.phase {
            MenuPhase::Closing { epoch } => Some(epoch),
            _ => None,
        }
    }
}

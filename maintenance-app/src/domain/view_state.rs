use super::PointerOffset;

/// Local UI state of one mounted maintenance view.
///
/// Every transition reports whether it changed anything so callers only
/// publish real updates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    pub mounted: bool,
    pub loaded: bool,
    pub spinning: bool,
    pub pointer_offset: PointerOffset,
}

impl ViewState {
    /// Starts a fresh mount. A view that is already mounted is left alone.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        *self = Self {
            mounted: true,
            ..Self::default()
        };
        true
    }

    pub fn reveal(&mut self) -> bool {
        if !self.mounted || self.loaded {
            return false;
        }
        self.loaded = true;
        true
    }

    pub fn start_spin(&mut self) -> bool {
        if !self.mounted || self.spinning {
            return false;
        }
        self.spinning = true;
        true
    }

    pub fn finish_spin(&mut self) -> bool {
        if !self.spinning {
            return false;
        }
        self.spinning = false;
        true
    }

    pub fn track_pointer(&mut self, offset: PointerOffset) -> bool {
        if !self.mounted || self.pointer_offset == offset {
            return false;
        }
        self.pointer_offset = offset;
        true
    }

    pub fn unmount(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        self.mounted = false;
        self.spinning = false;
        self.pointer_offset = PointerOffset::ZERO;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted() -> ViewState {
        let mut state = ViewState::default();
        state.mount();
        state
    }

    #[test]
    fn test_reveal_only_once() {
        let mut state = mounted();
        assert!(!state.loaded);
        assert!(state.reveal());
        assert!(state.loaded);
        assert!(!state.reveal());
    }

    #[test]
    fn test_no_mutation_after_unmount() {
        let mut state = mounted();
        state.unmount();

        assert!(!state.reveal());
        assert!(!state.start_spin());
        assert!(!state.track_pointer(PointerOffset { x: 1.0, y: 2.0 }));
        assert_eq!(
            state,
            ViewState {
                mounted: false,
                ..ViewState::default()
            }
        );
    }

    #[test]
    fn test_spin_while_spinning_is_noop() {
        let mut state = mounted();
        assert!(state.start_spin());
        assert!(!state.start_spin());
        assert!(state.finish_spin());
        assert!(!state.finish_spin());
    }

    #[test]
    fn test_remount_starts_fresh() {
        let mut state = mounted();
        state.reveal();
        state.unmount();

        assert!(state.mount());
        assert!(!state.loaded);
        assert!(!state.mount());
    }

    #[test]
    fn test_identical_pointer_offset_is_not_a_change() {
        let mut state = mounted();
        let offset = PointerOffset { x: 3.0, y: -1.5 };
        assert!(state.track_pointer(offset));
        assert!(!state.track_pointer(offset));
    }
}

use std::rc::Rc;

use yew::Reducible;

/// Redeemable-code dialog plus the transient "Copied" acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedemptionModal {
    pub is_open: bool,
    pub has_copied_code: bool,
    copy_seq: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedemptionAction {
    /// Button press. Ignored until the event has started.
    Open { has_started: bool },
    /// Fired by the one-shot start transition.
    AutoOpen,
    Close,
    /// Clipboard write succeeded; carries the sequence number of that copy.
    Copied(u32),
    /// Reset timer for the copy with this sequence number ran out.
    CopyExpired(u32),
}

impl RedemptionModal {
    pub fn apply(&self, action: RedemptionAction) -> Self {
        let mut next = self.clone();
        match action {
            RedemptionAction::Open { has_started } => {
                if has_started {
                    next.is_open = true;
                }
            }
            RedemptionAction::AutoOpen => next.is_open = true,
            RedemptionAction::Close => next.is_open = false,
            RedemptionAction::Copied(seq) => {
                next.has_copied_code = true;
                next.copy_seq = seq;
            }
            RedemptionAction::CopyExpired(seq) => {
                // A newer copy restarted the timer
                if seq == self.copy_seq {
                    next.has_copied_code = false;
                }
            }
        }
        next
    }
}

impl Reducible for RedemptionModal {
    type Action = RedemptionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Remembers whether the start transition has already opened the modal.
/// Owned by whoever drives the evaluation loop.
#[derive(Debug, Default)]
pub struct AutoOpenLatch {
    fired: bool,
}

impl AutoOpenLatch {
    /// True exactly once: on the first observation with `has_started` set.
    pub fn observe(&mut self, has_started: bool) -> bool {
        if has_started && !self.fired {
            self.fired = true;
            true
        } else {
            false
        }
    }

    /// Arms the latch again after the event start moved.
    pub fn rearm(&mut self) {
        self.fired = false;
    }
}

/// Owns the pending reset of the copy acknowledgement. Restarting drops the
/// previous handle, which cancels it for handles like `gloo_timers::callback::Timeout`.
#[derive(Debug)]
pub struct CopyResetTimer<H> {
    seq: u32,
    pending: Option<H>,
}

impl<H> Default for CopyResetTimer<H> {
    fn default() -> Self {
        CopyResetTimer { seq: 0, pending: None }
    }
}

impl<H> CopyResetTimer<H> {
    /// Starts a new reset window. `schedule` receives the sequence number the
    /// reset must carry and returns the timer handle.
    pub fn restart(&mut self, schedule: impl FnOnce(u32) -> H) -> u32 {
        self.seq = self.seq.wrapping_add(1);
        self.pending = None;
        self.pending = Some(schedule(self.seq));
        self.seq
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

//! Pacing capability the driver is given by its host.

use std::collections::VecDeque;

/// Identifies one requested callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }
}

/// A host facility that calls back "soon", typically once per display refresh.
///
/// The driver calls `request` to schedule its next frame and `cancel` when it
/// stops. A host that cannot truly cancel may ignore `cancel`: the driver
/// discards frames for tokens it no longer expects.
pub trait Scheduler {
    fn request(&mut self) -> FrameToken;
    fn cancel(&mut self, token: FrameToken);
}

/// Queue of requested frames, delivered by whoever owns the loop.
///
/// The desktop loop pops one token per `next_frame()`; tests pop them by hand
/// to drive the driver synchronously.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: VecDeque<FrameToken>,
    requests_made: u64,
    cancellations: u64,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest frame that is due
    pub fn take_due(&mut self) -> Option<FrameToken> {
        self.pending.pop_front()
    }

    /// Requests neither delivered nor cancelled
    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }

    pub fn requests_made(&self) -> u64 {
        self.requests_made
    }

    pub fn cancellations(&self) -> u64 {
        self.cancellations
    }
}

impl Scheduler for FrameQueue {
    fn request(&mut self) -> FrameToken {
        let token = FrameToken::new(self.next_id);
        self.next_id += 1;
        self.requests_made += 1;
        self.pending.push_back(token);
        token
    }

    fn cancel(&mut self, token: FrameToken) {
        let before = self.pending.len();
        self.pending.retain(|&pending| pending != token);
        if self.pending.len() < before {
            self.cancellations += 1;
        }
    }
}

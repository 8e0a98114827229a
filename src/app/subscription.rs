// SPDX-License-Identifier: MPL-2.0
//! The pagination sentinel.
//!
//! The presentation layer places an invisible marker after the last rendered
//! timeline item and reports [`Message::SentinelVisible`] with the token it
//! was handed. This module owns the token lifecycle:
//!
//! - **mount**: a new sentinel for a new source list; older tokens go stale
//! - **arm/disarm**: whether a visibility report may advance the window
//! - **fire**: consumes the arm, so each arm yields at most one advance
//! - **unmount**: leaving the timeline; no token is valid until remounted
//!
//! [`Message::SentinelVisible`]: super::Message::SentinelVisible

use std::fmt;

/// Identifies one mounted sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SentinelToken(u64);

impl fmt::Display for SentinelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sentinel#{}", self.0)
    }
}

/// Visibility subscription for the timeline's load-more marker.
#[derive(Debug, Clone, Default)]
pub struct Sentinel {
    generation: u64,
    mounted: bool,
    armed: bool,
}

impl Sentinel {
    /// Mounts a fresh sentinel. Tokens of the previous one stop working.
    /// The new sentinel starts disarmed.
    pub fn mount(&mut self) {
        self.generation += 1;
        self.mounted = true;
        self.armed = false;
    }

    /// Tears the sentinel down.
    pub fn unmount(&mut self) {
        if self.mounted {
            self.generation += 1;
        }
        self.mounted = false;
        self.armed = false;
    }

    /// Arms the mounted sentinel; does nothing while unmounted.
    pub fn arm(&mut self) {
        self.armed = self.mounted;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Consumes a visibility report. Returns `true` if it should advance.
    pub fn fire(&mut self, token: SentinelToken) -> bool {
        if self.armed && token.0 == self.generation {
            self.armed = false;
            true
        } else {
            log::trace!("ignored visibility report for {token}");
            false
        }
    }

    /// Token to hand to the presentation layer, while armed.
    #[must_use]
    pub fn token(&self) -> Option<SentinelToken> {
        self.armed.then_some(SentinelToken(self.generation))
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

// Copyright 2025 the Swippy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Host hook that pins the device orientation while the pager is shown.
///
/// The carousel calls [`OrientationLock::lock_portrait`] when entering full
/// screen and [`OrientationLock::unlock`] when leaving it or when the carousel
/// is dropped. Calls are always paired; the host never sees two locks in a
/// row.
pub trait OrientationLock {
    /// Restrict the interface to portrait.
    fn lock_portrait(&mut self);

    /// Lift the restriction placed by [`OrientationLock::lock_portrait`].
    fn unlock(&mut self);
}

/// An [`OrientationLock`] for hosts without orientation control.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOrientationLock;

impl OrientationLock for NoOrientationLock {
    fn lock_portrait(&mut self) {}

    fn unlock(&mut self) {}
}

impl<L: OrientationLock + ?Sized> OrientationLock for &mut L {
    fn lock_portrait(&mut self) {
        (**self).lock_portrait();
    }

    fn unlock(&mut self) {
        (**self).unlock();
    }
}

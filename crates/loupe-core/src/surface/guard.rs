//! Scoped save/restore of surface state.

use std::ops::{Deref, DerefMut};

use super::DrawingSurface;

/// Saves surface state on creation and restores it when dropped.
///
/// The restore also runs on early `?` returns and during unwinding, so a
/// failed draw never leaves a clip behind.
pub struct SurfaceGuard<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawingSurface + ?Sized> SurfaceGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: DrawingSurface + ?Sized> Deref for SurfaceGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for SurfaceGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for SurfaceGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};

    #[test]
    fn test_guard_pairs_save_and_restore() {
        let mut surface = RecordingSurface::new(10, 10);
        {
            let guard = SurfaceGuard::new(&mut surface);
            assert_eq!(guard.depth(), 1);
        }
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.ops(), &[SurfaceOp::Save, SurfaceOp::Restore]);
    }

    #[test]
    fn test_guard_restores_on_unwind() {
        let mut surface = RecordingSurface::new(10, 10);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = SurfaceGuard::new(&mut surface);
            panic!("draw failed mid-way");
        }));
        assert!(result.is_err());
        assert_eq!(surface.depth(), 0);
    }
}

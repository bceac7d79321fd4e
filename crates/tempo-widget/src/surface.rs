#![forbid(unsafe_code)]

//! Presentation surface contract.

use crate::view::View;

/// A host presentation layer the widget renders into.
///
/// The widget pushes whole [`View`] snapshots after every state change; the
/// surface reconciles them against its retained node tree (toggling region
/// visibility, swapping structural classes, updating digit text).
///
/// Fullscreen is the host's OS/browser-level presentation mode, distinct
/// from the widget's own expanded mode. Both requests are asynchronous and
/// must not block: the outcome arrives later as `Event::FullscreenChanged`
/// (on success) or `Event::FullscreenDenied` (on rejection), and the widget
/// keeps accepting input in the meantime.
pub trait Surface {
    /// Apply a presentation snapshot.
    fn apply(&mut self, view: &View);

    /// Ask the host to enter OS-level fullscreen.
    fn request_fullscreen(&mut self);

    /// Ask the host to leave OS-level fullscreen.
    fn exit_fullscreen(&mut self);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn apply(&mut self, view: &View) {
        (**self).apply(view);
    }

    fn request_fullscreen(&mut self) {
        (**self).request_fullscreen();
    }

    fn exit_fullscreen(&mut self) {
        (**self).exit_fullscreen();
    }
}

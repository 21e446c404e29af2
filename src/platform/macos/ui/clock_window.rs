//! Floating clock window.
//!
//! A small titled NSWindow with one large label showing the total elapsed
//! time. Its alpha and window level follow the shared [`WindowOptions`].

use crate::model::constants::ZERO_DISPLAY;
use crate::model::WindowOptions;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, NSPoint, NSRect, NSSize, NSString, NO,
};

const WINDOW_WIDTH: f64 = 350.0;
const WINDOW_HEIGHT: f64 = 120.0;
const LABEL_MARGIN: f64 = 20.0;
const FONT_SIZE: f64 = 48.0;

// NSWindowLevel values
const NORMAL_WINDOW_LEVEL: isize = 0;
const FLOATING_WINDOW_LEVEL: isize = 3;

/// Raw handles to the window and its label. Copies refer to the same
/// window; it lives for the whole process.
#[derive(Debug, Clone, Copy)]
pub struct ClockWindow {
    window: id,
    label: id,
}

impl ClockWindow {
    /// Create the window with `options` applied. Not shown yet.
    ///
    /// # Safety
    /// Must be called from the main thread inside an autorelease pool.
    pub unsafe fn new(options: &WindowOptions) -> Self {
        let frame = NSRect::new(
            NSPoint::new(200.0, 200.0),
            NSSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        );

        // NSWindowStyleMaskTitled | Closable | Miniaturizable
        let style_mask: u64 = 1 | 2 | 4;
        // NSBackingStoreBuffered = 2
        let backing: u64 = 2;

        let window: id = msg_send![get_class("NSWindow"), alloc];
        let window: id = msg_send![
            window,
            initWithContentRect: frame,
            styleMask: style_mask,
            backing: backing,
            defer: NO
        ];
        let _: () = msg_send![window, setReleasedWhenClosed: NO];
        let _: () = msg_send![window, setTitle: nsstring_id("Lapwatch")];

        let label: id = msg_send![
            get_class("NSTextField"),
            labelWithString: nsstring_id(ZERO_DISPLAY)
        ];
        let font: id = msg_send![
            get_class("NSFont"),
            monospacedDigitSystemFontOfSize: FONT_SIZE,
            weight: 0.0f64
        ];
        let _: () = msg_send![label, setFont: font];
        let label_frame = NSRect::new(
            NSPoint::new(LABEL_MARGIN, LABEL_MARGIN),
            NSSize::new(
                WINDOW_WIDTH - 2.0 * LABEL_MARGIN,
                WINDOW_HEIGHT - 2.0 * LABEL_MARGIN,
            ),
        );
        let _: () = msg_send![label, setFrame: label_frame];

        let content: id = msg_send![window, contentView];
        let _: () = msg_send![content, addSubview: label];

        let clock = Self { window, label };
        clock.apply_options(options);
        clock
    }

    /// # Safety
    /// Main thread only.
    pub unsafe fn show(&self) {
        let _: () = msg_send![self.window, makeKeyAndOrderFront: nil];
    }

    /// # Safety
    /// Main thread only.
    pub unsafe fn apply_options(&self, options: &WindowOptions) {
        let _: () = msg_send![self.window, setAlphaValue: options.transparency];
        let level = if options.always_on_top {
            FLOATING_WINDOW_LEVEL
        } else {
            NORMAL_WINDOW_LEVEL
        };
        let _: () = msg_send![self.window, setLevel: level];
    }

    /// # Safety
    /// Main thread only.
    pub unsafe fn set_time(&self, display: &str) {
        let text = NSString::from_str(display);
        let _: () = msg_send![self.label, setStringValue: &*text];
    }

    /// # Safety
    /// Main thread only.
    pub unsafe fn set_title(&self, title: &str) {
        let text = NSString::from_str(title);
        let _: () = msg_send![self.window, setTitle: &*text];
    }
}

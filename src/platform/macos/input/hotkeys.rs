//! Carbon hotkey source.
//!
//! Registers global hotkeys with the Carbon Event Manager. Unlike a
//! CGEvent tap this needs no accessibility permission. The callback only
//! publishes `AppEvent::ToggleStartStop`; the timing core picks it up from
//! the event bus on the main loop.

use std::ffi::c_void;

use crate::events::{AppEvent, EventPublisher};
use crate::hotkeys::{HotkeyError, HotkeySource, HotkeySubscription, KeyCombo};
use crate::platform::macos::ffi::{
    carbon_combo, EventHandlerCallRef, EventHandlerRef, EventHotKeyID, EventHotKeyRef, EventRef,
    EventTypeSpec, GetApplicationEventTarget, GetEventClass, GetEventKind, GetEventParameter,
    InstallEventHandler, RegisterEventHotKey, RemoveEventHandler, UnregisterEventHotKey,
    EVENT_NOT_HANDLED_ERR, K_EVENT_CLASS_KEYBOARD, K_EVENT_HOTKEY_PRESSED,
    K_EVENT_PARAM_DIRECT_OBJECT, NO_ERR, SIG_LAPW, TYPE_EVENT_HOTKEY_ID,
};

/// Passed to Carbon as the handler's user data. Owned by the subscription.
struct HandlerContext {
    hotkey_id: u32,
    publisher: EventPublisher,
}

/// Global hotkeys through `RegisterEventHotKey`.
///
/// Events are delivered while the application run loop is running, on the
/// main thread. Subscribe and cancel from the main thread only.
#[derive(Debug, Default)]
pub struct CarbonHotkeySource {
    next_id: u32,
}

impl CarbonHotkeySource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HotkeySource for CarbonHotkeySource {
    fn subscribe(
        &mut self,
        combo: KeyCombo,
        publisher: EventPublisher,
    ) -> Result<HotkeySubscription, HotkeyError> {
        let (keycode, modifiers) =
            carbon_combo(&combo).ok_or(HotkeyError::UnsupportedKey(combo.key()))?;

        self.next_id += 1;
        let hotkey_id = self.next_id;
        let context = Box::into_raw(Box::new(HandlerContext {
            hotkey_id,
            publisher,
        }));

        let types = [EventTypeSpec {
            event_class: K_EVENT_CLASS_KEYBOARD,
            event_kind: K_EVENT_HOTKEY_PRESSED,
        }];
        let mut handler_ref: EventHandlerRef = std::ptr::null_mut();
        let mut hotkey_ref: EventHotKeyRef = std::ptr::null_mut();

        // SAFETY: `context` stays alive until the cancel closure below frees
        // it, after the handler has been removed.
        unsafe {
            let status = InstallEventHandler(
                GetApplicationEventTarget(),
                hotkey_event_handler,
                types.len() as u32,
                types.as_ptr(),
                context as *mut c_void,
                &mut handler_ref,
            );
            if status != NO_ERR {
                drop(Box::from_raw(context));
                return Err(HotkeyError::HandlerInstall(status));
            }

            let status = RegisterEventHotKey(
                keycode,
                modifiers,
                EventHotKeyID {
                    signature: SIG_LAPW,
                    id: hotkey_id,
                },
                GetApplicationEventTarget(),
                0,
                &mut hotkey_ref,
            );
            if status != NO_ERR || hotkey_ref.is_null() {
                RemoveEventHandler(handler_ref);
                drop(Box::from_raw(context));
                return Err(HotkeyError::Registration { combo, status });
            }
        }

        tracing::debug!(%combo, hotkey_id, "carbon hotkey registered");
        Ok(HotkeySubscription::new(combo, move || unsafe {
            UnregisterEventHotKey(hotkey_ref);
            RemoveEventHandler(handler_ref);
            drop(Box::from_raw(context));
        }))
    }
}

/// Carbon event handler for hotkey events.
///
/// Called by the Carbon Event Manager when any registered hotkey is
/// pressed. Must not panic.
extern "C" fn hotkey_event_handler(
    _call_ref: EventHandlerCallRef,
    event: EventRef,
    user_data: *mut c_void,
) -> i32 {
    if user_data.is_null() {
        return EVENT_NOT_HANDLED_ERR;
    }
    unsafe {
        if GetEventClass(event) != K_EVENT_CLASS_KEYBOARD
            || GetEventKind(event) != K_EVENT_HOTKEY_PRESSED
        {
            return EVENT_NOT_HANDLED_ERR;
        }

        let mut hot_id = EventHotKeyID {
            signature: 0,
            id: 0,
        };
        let status = GetEventParameter(
            event,
            K_EVENT_PARAM_DIRECT_OBJECT,
            TYPE_EVENT_HOTKEY_ID,
            std::ptr::null_mut(),
            std::mem::size_of::<EventHotKeyID>() as u32,
            std::ptr::null_mut(),
            &mut hot_id as *mut _ as *mut c_void,
        );

        let context = &*(user_data as *const HandlerContext);
        if status == NO_ERR && hot_id.signature == SIG_LAPW && hot_id.id == context.hotkey_id {
            context.publisher.publish(AppEvent::ToggleStartStop);
            return NO_ERR;
        }
    }
    // Let the next handler (another registration) look at it
    EVENT_NOT_HANDLED_ERR
}

//! FFI bindings for Carbon Event Manager (hotkeys).
//!
//! This module provides the low-level Carbon API declarations needed
//! for registering and handling global hotkeys on macOS, plus the mapping
//! from [`KeyCombo`] to Carbon key codes and modifier masks.

use crate::hotkeys::{KeyCombo, Modifiers};

// === Types ===

pub type EventTargetRef = *mut std::ffi::c_void;
pub type EventHandlerRef = *mut std::ffi::c_void;
pub type EventRef = *mut std::ffi::c_void;
pub type EventHandlerUPP =
    extern "C" fn(EventHandlerCallRef, EventRef, *mut std::ffi::c_void) -> i32;
pub type EventHandlerCallRef = *mut std::ffi::c_void;
pub type EventHotKeyRef = *mut std::ffi::c_void;

#[repr(C)]
#[derive(Copy, Clone)]
pub struct EventTypeSpec {
    pub event_class: u32,
    pub event_kind: u32,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct EventHotKeyID {
    pub signature: u32,
    pub id: u32,
}

// === Constants ===

pub const NO_ERR: i32 = 0;
pub const EVENT_NOT_HANDLED_ERR: i32 = -9874;
pub const K_EVENT_CLASS_KEYBOARD: u32 = 0x6B65_7962; // 'keyb'
pub const K_EVENT_HOTKEY_PRESSED: u32 = 6;
pub const K_EVENT_PARAM_DIRECT_OBJECT: u32 = 0x2D2D_2D2D; // '----'
pub const TYPE_EVENT_HOTKEY_ID: u32 = 0x686B_6964; // 'hkid'

// Modifiers
pub const CMD_KEY: u32 = 1 << 8;
pub const SHIFT_KEY: u32 = 1 << 9;
pub const OPTION_KEY: u32 = 1 << 11;
pub const CONTROL_KEY: u32 = 1 << 12;

// Hotkey signature: 'lapw'
pub const SIG_LAPW: u32 = 0x6C61_7077;

/// Carbon modifier mask for a set of modifiers.
pub fn carbon_modifiers(m: Modifiers) -> u32 {
    let mut mask = 0;
    if m.command {
        mask |= CMD_KEY;
    }
    if m.shift {
        mask |= SHIFT_KEY;
    }
    if m.option {
        mask |= OPTION_KEY;
    }
    if m.control {
        mask |= CONTROL_KEY;
    }
    mask
}

/// ANSI virtual key code for a key character (US layout positions).
pub fn ansi_keycode(key: char) -> Option<u32> {
    let code = match key.to_ascii_lowercase() {
        'a' => 0,
        's' => 1,
        'd' => 2,
        'f' => 3,
        'h' => 4,
        'g' => 5,
        'z' => 6,
        'x' => 7,
        'c' => 8,
        'v' => 9,
        'b' => 11,
        'q' => 12,
        'w' => 13,
        'e' => 14,
        'r' => 15,
        'y' => 16,
        't' => 17,
        '1' => 18,
        '2' => 19,
        '3' => 20,
        '4' => 21,
        '6' => 22,
        '5' => 23,
        '=' => 24,
        '9' => 25,
        '7' => 26,
        '-' => 27,
        '8' => 28,
        '0' => 29,
        ']' => 30,
        'o' => 31,
        'u' => 32,
        '[' => 33,
        'i' => 34,
        'p' => 35,
        'l' => 37,
        'j' => 38,
        '\'' => 39,
        'k' => 40,
        ';' => 41,
        '\\' => 42,
        ',' => 43,
        '/' => 44,
        'n' => 45,
        'm' => 46,
        '.' => 47,
        ' ' => 49,
        '`' => 50,
        _ => return None,
    };
    Some(code)
}

/// Key code and modifier mask for a combo, if the key has a code.
pub fn carbon_combo(combo: &KeyCombo) -> Option<(u32, u32)> {
    ansi_keycode(combo.key()).map(|code| (code, carbon_modifiers(combo.modifiers())))
}

// === FFI Declarations ===

#[link(name = "Carbon", kind = "framework")]
extern "C" {
    pub fn RegisterEventHotKey(
        inHotKeyCode: u32,
        inHotKeyModifiers: u32,
        inHotKeyID: EventHotKeyID,
        inTarget: EventTargetRef,
        inOptions: u32,
        outRef: *mut EventHotKeyRef,
    ) -> i32;

    pub fn UnregisterEventHotKey(inHotKeyRef: EventHotKeyRef) -> i32;

    pub fn InstallEventHandler(
        inTarget: EventTargetRef,
        inHandler: EventHandlerUPP,
        inNumTypes: u32,
        inList: *const EventTypeSpec,
        inUserData: *mut std::ffi::c_void,
        outRef: *mut EventHandlerRef,
    ) -> i32;

    pub fn RemoveEventHandler(inHandlerRef: EventHandlerRef) -> i32;

    pub fn GetApplicationEventTarget() -> EventTargetRef;

    pub fn GetEventClass(inEvent: EventRef) -> u32;
    pub fn GetEventKind(inEvent: EventRef) -> u32;

    pub fn GetEventParameter(
        inEvent: EventRef,
        inName: u32,
        inDesiredType: u32,
        outActualType: *mut u32,
        inBufferSize: u32,
        outActualSize: *mut u32,
        outData: *mut std::ffi::c_void,
    ) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hotkey_maps_to_cmd_shift_s() {
        let combo: KeyCombo = "cmd+shift+s".parse().unwrap();
        assert_eq!(carbon_combo(&combo), Some((1, CMD_KEY | SHIFT_KEY)));
    }

    #[test]
    fn test_unknown_key_has_no_code() {
        assert_eq!(ansi_keycode('é'), None);
    }
}

//! Main menu bar with the stopwatch commands.
//!
//! Items share one action, `menuAction:`, on a small target object. The
//! target reads the item's tag and publishes the matching event; the drain
//! timer applies it like any other command.

use std::ffi::c_void;

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use crate::events::EventPublisher;
use crate::model::WindowOptions;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nsstring_id, NSApp, NSString};
use crate::ui::{toggle_label, MenuCommand};

const TARGET_CLASS: &std::ffi::CStr = c"LapwatchMenuTarget";
const PUBLISHER_IVAR: &std::ffi::CStr = c"_publisher";

/// Handles to the items whose titles change.
#[derive(Debug, Clone, Copy)]
pub struct AppMenu {
    start_pause: id,
    always_on_top: id,
}

impl AppMenu {
    /// Build the menu bar and install it on the shared application.
    ///
    /// # Safety
    /// Main thread only, after `NSApp()` exists.
    pub unsafe fn install(publisher: EventPublisher, options: &WindowOptions) -> Self {
        let target = create_target(publisher);

        let menu_bar: id = msg_send![get_class("NSMenu"), new];
        let app_item: id = msg_send![get_class("NSMenuItem"), new];
        let _: () = msg_send![menu_bar, addItem: app_item];

        let menu: id = msg_send![get_class("NSMenu"), new];

        let mut items = [std::ptr::null_mut(); MenuCommand::ALL.len()];
        for (slot, command) in items.iter_mut().zip(MenuCommand::ALL) {
            if command == MenuCommand::Quit {
                let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
                let _: () = msg_send![menu, addItem: separator];
            }
            let item: id = msg_send![get_class("NSMenuItem"), alloc];
            let item: id = msg_send![
                item,
                initWithTitle: nsstring_id(command.title(false, options)),
                action: sel!(menuAction:),
                keyEquivalent: nsstring_id(command.key_equivalent())
            ];
            let _: () = msg_send![item, setTag: command.tag()];
            let _: () = msg_send![item, setTarget: target];
            let _: () = msg_send![menu, addItem: item];
            *slot = item;
        }

        let _: () = msg_send![app_item, setSubmenu: menu];
        let _: () = msg_send![NSApp(), setMainMenu: menu_bar];

        Self {
            start_pause: items[0],
            always_on_top: items[1],
        }
    }

    /// # Safety
    /// Main thread only.
    pub unsafe fn set_running(&self, running: bool) {
        let title = NSString::from_str(toggle_label(running));
        let _: () = msg_send![self.start_pause, setTitle: &*title];
    }

    /// # Safety
    /// Main thread only.
    pub unsafe fn apply_options(&self, options: &WindowOptions) {
        let title = NSString::from_str(MenuCommand::ToggleAlwaysOnTop.title(false, options));
        let _: () = msg_send![self.always_on_top, setTitle: &*title];
    }
}

/// Register the target class once and create an instance that owns
/// `publisher` for the life of the process.
unsafe fn create_target(publisher: EventPublisher) -> id {
    let class = match AnyClass::get(TARGET_CLASS) {
        Some(class) => class,
        None => {
            let superclass = get_class("NSObject");
            let mut builder = ClassBuilder::new(TARGET_CLASS, superclass)
                .unwrap_or_else(|| panic!("class {:?} already registered", TARGET_CLASS));
            builder.add_ivar::<*mut c_void>(PUBLISHER_IVAR);
            builder.add_method(
                sel!(menuAction:),
                menu_action as unsafe extern "C-unwind" fn(_, _, _),
            );
            builder.register()
        }
    };

    let target: id = msg_send![class, new];
    if let Some(ivar) = class.instance_variable(PUBLISHER_IVAR) {
        *ivar.load_mut::<*mut c_void>(&mut *target) =
            Box::into_raw(Box::new(publisher)) as *mut c_void;
    }
    target
}

unsafe extern "C-unwind" fn menu_action(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let tag: isize = msg_send![sender, tag];
    let Some(command) = MenuCommand::from_tag(tag) else {
        tracing::warn!(tag, "menu item with unknown tag");
        return;
    };

    let Some(ivar) = this.class().instance_variable(PUBLISHER_IVAR) else {
        return;
    };
    let publisher = *ivar.load::<*mut c_void>(this) as *const EventPublisher;
    if let Some(publisher) = publisher.as_ref() {
        tracing::debug!(?command, "menu command");
        publisher.publish(command.event());
    }
}

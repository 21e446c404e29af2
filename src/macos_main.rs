//! macOS entry point: floating clock window, Carbon hotkey and the
//! terminal command reader, all driven from the AppKit run loop.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use lapwatch::input::spawn_stdin_reader;
use lapwatch::platform::macos::ffi::bridge::{
    autoreleasepool, get_class, id, msg_send, nil, NSApp, RcBlock, YES,
};
use lapwatch::platform::macos::{AppMenu, CarbonHotkeySource, ClockWindow};
use lapwatch::ui::chrome_line;
use lapwatch::{Dispatcher, EventBus, Flow, OptionsStore, SystemClock, ThreadTicker, TimingCore};

use crate::app::{print_intro, process_batch, subscribe_hotkey};
use crate::cli::Arguments;

/// How often the run loop drains the event bus, in seconds.
const DRAIN_INTERVAL: f64 = 0.05;

type AppDispatcher = Dispatcher<SystemClock, ThreadTicker>;

fn window_title(running: bool) -> &'static str {
    if running {
        "Lapwatch (running)"
    } else {
        "Lapwatch"
    }
}

pub fn run(arguments: &Arguments) -> anyhow::Result<()> {
    autoreleasepool(|| unsafe { run_app(arguments) })
}

/// # Safety
/// Must be called on the main thread.
unsafe fn run_app(arguments: &Arguments) -> anyhow::Result<()> {
    let app = NSApp();
    // NSApplicationActivationPolicyRegular = 0
    let _: bool = msg_send![app, setActivationPolicy: 0i64];

    let bus = EventBus::new();
    let core = TimingCore::new(SystemClock, ThreadTicker::new(bus.publisher()));
    let mut dispatcher: AppDispatcher =
        Dispatcher::new(core, OptionsStore::new(arguments.window_options()));

    let window = ClockWindow::new(dispatcher.options().get());
    let menu = AppMenu::install(bus.publisher(), dispatcher.options().get());
    dispatcher.options_mut().subscribe(move |options| {
        // SAFETY: observers run on the main thread inside the drain timer.
        unsafe {
            window.apply_options(options);
            menu.apply_options(options);
        }
        println!("{}", chrome_line(options));
    });
    window.show();

    let mut hotkeys = CarbonHotkeySource::new();
    let hotkey = subscribe_hotkey(&mut hotkeys, arguments.hotkey(), bus.publisher());

    print_intro(&mut io::stdout(), &dispatcher, hotkey.as_ref())?;
    spawn_stdin_reader(bus.publisher())?;

    let dispatcher = Rc::new(RefCell::new(dispatcher));
    let drain = RcBlock::new(move |_timer: id| {
        let events = bus.drain();
        if events.is_empty() {
            return;
        }

        let mut dispatcher = dispatcher.borrow_mut();
        match process_batch(&mut *dispatcher, events, &mut io::stdout()) {
            Ok(Flow::Continue) => unsafe {
                let core = dispatcher.core();
                window.set_time(core.total_elapsed_display());
                window.set_title(window_title(core.is_running()));
                menu.set_running(core.is_running());
            },
            Ok(Flow::Quit) => unsafe {
                tracing::info!("Quitting");
                let _: () = msg_send![NSApp(), terminate: nil];
            },
            Err(e) => tracing::error!(%e, "Failed to write to the terminal"),
        }
    });

    let _timer: id = msg_send![
        get_class("NSTimer"),
        scheduledTimerWithTimeInterval: DRAIN_INTERVAL,
        repeats: YES,
        block: &*drain
    ];

    let _: () = msg_send![app, activateIgnoringOtherApps: YES];
    let _: () = msg_send![app, run];

    // Keep the hotkey registered for the life of the run loop.
    drop(hotkey);
    Ok(())
}

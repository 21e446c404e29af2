use clap::Parser;
use lapwatch::model::constants::{DEFAULT_HOTKEY, DEFAULT_TRANSPARENCY};
use lapwatch::{KeyCombo, WindowOptions};

/// Floating stopwatch with lap recording.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about)]
pub struct Arguments {
    #[arg(short = 'v', long = None, env = "LAPWATCH_VERBOSITY", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Window opacity, clamped to 0.2..=1.0
    #[arg(short, long, env = "LAPWATCH_TRANSPARENCY", default_value_t = DEFAULT_TRANSPARENCY)]
    pub transparency: f64,

    /// Start with the window floating above other windows
    #[arg(long)]
    pub always_on_top: bool,

    /// Global Start/Pause hotkey, e.g. `cmd+shift+s`
    #[arg(long, env = "LAPWATCH_HOTKEY", default_value = DEFAULT_HOTKEY)]
    pub hotkey: KeyCombo,

    /// Do not register the global hotkey
    #[arg(long)]
    pub no_hotkey: bool,
}

impl Arguments {
    pub fn window_options(&self) -> WindowOptions {
        WindowOptions::new(self.transparency, self.always_on_top)
    }

    /// The hotkey to register, if any.
    pub fn hotkey(&self) -> Option<KeyCombo> {
        (!self.no_hotkey).then_some(self.hotkey)
    }
}

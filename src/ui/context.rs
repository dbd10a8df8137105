use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use texmgr::config::{ColorMode, Config};
use texmgr::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    /// NDJSON events instead of text
    pub json: bool,
    /// Echo commands before running them
    pub print_commands: bool,
    /// Hide info lines
    pub silent: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        print_commands: bool,
        silent: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, print_commands, silent, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        print_commands: bool,
        silent: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let mode = cli_color.map(ColorMode::from).unwrap_or(config.output.color);
        let color = !json
            && match mode {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            };

        Self {
            json,
            print_commands,
            silent,
            color,
            unicode: caps.supports_unicode,
        }
    }
}

use plantsafe::config::{ColorMode, Config};
use plantsafe::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose,
            caps,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }

    /// Prompts need a person at the keyboard
    pub fn interactive(&self) -> bool {
        !self.json && self.caps.stdin_is_tty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            stdin_is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci: true,
            width: 120,
        }
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let ui = UiContext::from_caps(false, 0, None, &Config::default(), ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn ci_allows_explicit_color_always_flag() {
        let ui = UiContext::from_caps(false, 0, Some(ColorWhen::Always), &Config::default(), ci_caps());
        assert!(ui.color);
    }

    #[test]
    fn config_never_beats_terminal_support() {
        let mut config = Config::default();
        config.output.color = ColorMode::Never;
        let caps = TerminalCapabilities {
            is_ci: false,
            ..ci_caps()
        };
        assert!(!UiContext::from_caps(false, 0, None, &config, caps).color);
        assert!(UiContext::from_caps(false, 0, Some(ColorWhen::Always), &config, caps).color);
    }

    #[test]
    fn json_mode_is_never_colored_or_interactive() {
        let ui = UiContext::from_caps(true, 0, Some(ColorWhen::Always), &Config::default(), ci_caps());
        assert!(!ui.color);
        assert!(!ui.interactive());
    }
}

use std::fmt;
use std::str::FromStr;

use pocket_core::BackendUnavailable;
use pocket_render_common::{Backend, SurfaceOptions};
use thiserror::Error;

/// Environment variable that overrides [`BackendSelector::Auto`].
pub const BACKEND_ENV: &str = "POCKET_BACKEND";

/// Builds a backend for [`BackendSelector::Custom`].
pub type BackendFactory =
    Box<dyn FnOnce(&SurfaceOptions) -> Result<Box<dyn Backend>, BackendUnavailable>>;

/// Which backend [`App::run`](crate::App::run) should open.
///
/// Every choice other than [`Console`](Self::Console) falls back to the
/// console backend when it cannot be initialised.
#[derive(Default)]
pub enum BackendSelector {
    /// The windowed backend when available, else the console. Overridden by
    /// `POCKET_BACKEND`.
    #[default]
    Auto,
    /// A desktop window rendered through `pixels`.
    Windowed,
    /// Text output only.
    Console,
    /// A caller-supplied backend.
    Custom(BackendFactory),
}

impl BackendSelector {
    /// Wraps a factory closure as [`BackendSelector::Custom`].
    pub fn custom<F>(factory: F) -> Self
    where
        F: FnOnce(&SurfaceOptions) -> Result<Box<dyn Backend>, BackendUnavailable> + 'static,
    {
        BackendSelector::Custom(Box::new(factory))
    }

    /// Reads `POCKET_BACKEND`. Unset or empty yields `None`; an unknown
    /// value is logged and ignored.
    pub fn from_env() -> Option<Self> {
        let value = std::env::var(BACKEND_ENV).ok()?;
        if value.trim().is_empty() {
            return None;
        }
        match value.parse() {
            Ok(selector) => Some(selector),
            Err(err) => {
                log::warn!("ignoring {BACKEND_ENV}: {err}");
                None
            }
        }
    }

    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            BackendSelector::Auto => "auto",
            BackendSelector::Windowed => "windowed",
            BackendSelector::Console => "console",
            BackendSelector::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for BackendSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A backend name that is not one of `auto`, `windowed` or `console`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown backend `{0}`; expected auto, windowed or console")]
pub struct UnknownBackend(pub String);

impl FromStr for BackendSelector {
    type Err = UnknownBackend;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(BackendSelector::Auto),
            "windowed" | "window" | "desktop" => Ok(BackendSelector::Windowed),
            "console" | "headless" => Ok(BackendSelector::Console),
            _ => Err(UnknownBackend(value.to_string())),
        }
    }
}

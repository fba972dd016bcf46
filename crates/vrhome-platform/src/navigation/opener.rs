use super::resolve::resolve_url;
use vrhome_common::PlatformError;
use tracing::info;
use url::Url;

/// Opens sample URLs in the desktop's default handler.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    base_url: Option<Url>,
}

impl SystemOpener {
    /// `base_url` is what relative sample URLs resolve against.
    pub fn new(base_url: Option<&str>) -> Result<Self, PlatformError> {
        let base_url = base_url
            .map(|raw| {
                Url::parse(raw).map_err(|e| {
                    PlatformError::NavigationError(format!("invalid base url '{raw}': {e}"))
                })
            })
            .transpose()?;
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Resolve and open `raw` with the OS opener.
    pub fn open(&self, raw: &str) -> Result<Url, PlatformError> {
        let url = resolve_url(self.base_url.as_ref(), raw)?;
        platform_open(url.as_str())?;
        info!("opened {url}");
        Ok(url)
    }
}

#[cfg(target_os = "macos")]
fn platform_open(url: &str) -> Result<(), PlatformError> {
    spawn_opener(std::process::Command::new("open").arg(url), "open")
}

#[cfg(target_os = "windows")]
fn platform_open(url: &str) -> Result<(), PlatformError> {
    spawn_opener(
        std::process::Command::new("cmd").args(["/C", "start", "", url]),
        "cmd start",
    )
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_open(url: &str) -> Result<(), PlatformError> {
    spawn_opener(std::process::Command::new("xdg-open").arg(url), "xdg-open")
}

#[cfg(not(any(unix, target_os = "windows")))]
fn platform_open(_url: &str) -> Result<(), PlatformError> {
    Err(PlatformError::NotSupported(
        "no URL opener on this platform".into(),
    ))
}

#[cfg(any(unix, target_os = "windows"))]
fn spawn_opener(command: &mut std::process::Command, name: &str) -> Result<(), PlatformError> {
    // The browser outlives us; only the launch itself is checked.
    command
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| PlatformError::NavigationError(format!("failed to run {name}: {e}")))
}

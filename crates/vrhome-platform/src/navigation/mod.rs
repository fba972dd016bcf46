//! Executing launcher actions.
//!
//! [`Navigator`] is the seam between the input router and whatever owns
//! the window: the application implements it, typically delegating URL
//! opening to [`SystemOpener`].

mod opener;
mod resolve;

pub use opener::SystemOpener;
pub use resolve::resolve_url;

use tracing::warn;
use vrhome_common::{Action, PlatformError};

pub trait Navigator {
    /// Leave the launcher for `url`.
    fn navigate(&mut self, url: &str) -> Result<(), PlatformError>;

    /// Reload the launcher itself.
    fn reload(&mut self) -> Result<(), PlatformError>;
}

/// Perform `action`. Failures are logged, never propagated into the frame loop.
pub fn dispatch(action: &Action, navigator: &mut dyn Navigator) {
    let result = match action {
        Action::Navigate(url) => navigator.navigate(url),
        Action::Reload => navigator.reload(),
    };
    if let Err(e) = result {
        warn!("{} failed: {e}", action.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        navigated: Vec<String>,
        reloads: usize,
        fail: bool,
    }

    impl Navigator for Recorder {
        fn navigate(&mut self, url: &str) -> Result<(), PlatformError> {
            if self.fail {
                return Err(PlatformError::NavigationError("boom".into()));
            }
            self.navigated.push(url.to_string());
            Ok(())
        }

        fn reload(&mut self) -> Result<(), PlatformError> {
            self.reloads += 1;
            Ok(())
        }
    }

    #[test]
    fn dispatch_routes_each_action() {
        let mut nav = Recorder::default();
        dispatch(&Action::Navigate("https://a.example/".into()), &mut nav);
        dispatch(&Action::Reload, &mut nav);
        assert_eq!(nav.navigated, vec!["https://a.example/".to_string()]);
        assert_eq!(nav.reloads, 1);
    }

    #[test]
    fn dispatch_swallows_errors() {
        let mut nav = Recorder {
            fail: true,
            ..Default::default()
        };
        dispatch(&Action::Navigate("https://a.example/".into()), &mut nav);
        assert!(nav.navigated.is_empty());
    }
}

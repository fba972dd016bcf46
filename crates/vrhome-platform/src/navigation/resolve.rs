use vrhome_common::PlatformError;
use url::Url;

/// Resolve a sample URL, joining relative ones onto `base`.
pub fn resolve_url(base: Option<&Url>, raw: &str) -> Result<Url, PlatformError> {
    match Url::parse(raw) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = base.ok_or_else(|| {
                PlatformError::NavigationError(format!(
                    "relative url '{raw}' needs navigation.base_url"
                ))
            })?;
            base.join(raw).map_err(|e| {
                PlatformError::NavigationError(format!("cannot resolve '{raw}' against {base}: {e}"))
            })
        }
        Err(e) => Err(PlatformError::NavigationError(format!(
            "invalid url '{raw}': {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through() {
        let url = resolve_url(None, "https://playcanv.as/p/VNTAx5Eu/").unwrap();
        assert_eq!(url.as_str(), "https://playcanv.as/p/VNTAx5Eu/");
    }

    #[test]
    fn relative_urls_join_base() {
        let base = Url::parse("https://samples.example/vr/home/index.html").unwrap();
        let url = resolve_url(Some(&base), "../WebVRSamples/Pano/index.html").unwrap();
        assert_eq!(url.as_str(), "https://samples.example/vr/WebVRSamples/Pano/index.html");
    }

    #[test]
    fn relative_without_base_is_an_error() {
        let err = resolve_url(None, "../x.html").unwrap_err().to_string();
        assert!(err.contains("navigation.base_url"));
    }
}

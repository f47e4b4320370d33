pub mod conversion;
pub mod ec2;

use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::SdkConfig;
use headers::Authorization;
use hyper::client::HttpConnector;
use hyper::Uri;
use hyper_proxy::{Intercept, Proxy, ProxyConnector};
use log::{debug, error, warn};
use url::Url;

/// Reads the proxy from `HTTPS_PROXY`, falling back to `https_proxy`.
fn proxy_from_env() -> Option<String> {
    std::env::var("HTTPS_PROXY")
        .or_else(|_v| std::env::var("https_proxy"))
        .ok()
        .filter(|p| !p.is_empty())
}

/// Prefixes `http://` when the proxy was configured without a scheme.
fn with_scheme(proxy: &str) -> String {
    if proxy.contains("://") {
        proxy.to_string()
    } else {
        warn!("Configured proxy did not specify a scheme - falling back to HTTP.");
        format!("http://{}", proxy)
    }
}

/// Returns `ProxyConnector<HttpConnector>` if env. variable 'https_proxy' is set
pub fn determine_proxy() -> Option<ProxyConnector<HttpConnector>> {
    let raw = with_scheme(&proxy_from_env()?);
    let proxy_url: Url = match raw.parse() {
        Ok(url) => url,
        Err(e) => {
            error!("Ignoring invalid proxy {}: {}", raw, e);
            return None;
        }
    };
    let proxy_uri: Uri = match raw.parse() {
        Ok(uri) => uri,
        Err(e) => {
            error!("Ignoring invalid proxy {}: {}", raw, e);
            return None;
        }
    };
    let mut proxy = Proxy::new(Intercept::All, proxy_uri);

    if let Some(password) = proxy_url.password() {
        proxy.set_authorization(Authorization::basic(proxy_url.username(), password));
    }

    match ProxyConnector::from_proxy(HttpConnector::new(), proxy) {
        Ok(connector) => Some(connector),
        Err(e) => {
            error!("Failed to set up proxy connector: {}", e);
            None
        }
    }
}

/// Will setup the SdkConfig with a proxy if needed.
///
/// An explicit region wins over the default provider chain, which falls back
/// to `us-east-1`.
pub async fn aws_setup(region: Option<String>, profile: Option<String>) -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(region.map(Region::new))
        .or_default_provider()
        .or_else("us-east-1");
    if let Some(region) = region_provider.region().await {
        debug!("Using region: {}", region);
    }
    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
    if let Some(profile) = profile {
        debug!("Using profile: {}", profile);
        loader = loader.profile_name(profile);
    }
    if let Some(proxy) = determine_proxy() {
        debug!("Using proxy");
        let client =
            aws_smithy_runtime::client::http::hyper_014::HyperClientBuilder::new().build(proxy);
        loader = loader.http_client(client);
    } else {
        debug!("Not using a proxy");
    }
    loader.load().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_scheme() {
        assert_eq!(with_scheme("proxy:3128"), "http://proxy:3128");
        assert_eq!(
            with_scheme("https://user:pw@proxy:3128"),
            "https://user:pw@proxy:3128"
        );
    }
}

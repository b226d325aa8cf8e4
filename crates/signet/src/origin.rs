//! Browser-origin allow-list policy.

use url::Url;

/// Decides which browser origins may receive signed credentials.
///
/// Built once at startup from the configured domain list and the
/// local-development toggle. Origins are URL-parsed and matched on the
/// exact host (`domain` or `*.domain`), never substring containment, so
/// `https://evil-example.com` and `https://example.com.evil.com` do not
/// sneak past an `example.com` entry.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    domains: Vec<String>,
    allow_localhost: bool,
}

impl OriginPolicy {
    /// Build a policy from an iterator of domain names.
    ///
    /// Entries are trimmed and lowercased; empties are dropped. When
    /// `allow_localhost` is true, `localhost` joins the https-capable
    /// domain set and plain `http://localhost` is also accepted. When
    /// false, a literal `localhost` entry is removed even if configured.
    pub fn new<I, S>(domains: I, allow_localhost: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut domains: Vec<String> = domains
            .into_iter()
            .map(|d| d.as_ref().trim().to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();

        if allow_localhost {
            if !domains.iter().any(|d| d == "localhost") {
                domains.push("localhost".to_string());
            }
        } else {
            domains.retain(|d| d != "localhost");
        }

        Self {
            domains,
            allow_localhost,
        }
    }

    /// Parse a comma-separated domain list (the `ALLOWED_DOMAINS` format).
    pub fn from_spec(spec: &str, allow_localhost: bool) -> Self {
        Self::new(spec.split(','), allow_localhost)
    }

    /// Number of https-capable domains in the allow-list.
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    /// Whether local-development `http://localhost` origins are accepted.
    pub fn localhost_enabled(&self) -> bool {
        self.allow_localhost
    }

    /// Whether `origin` (`scheme://host[:port]`) may receive credentials.
    ///
    /// `https://` origins match when the host equals a configured domain or
    /// is a subdomain of one, on any port. `http://localhost` (any port)
    /// matches only when local development is enabled. Everything else
    /// (other schemes, unparsable values, unlisted hosts) is denied.
    pub fn is_allowed(&self, origin: &str) -> bool {
        let Ok(url) = Url::parse(origin) else {
            return false;
        };
        let Some(host) = url.host_str() else {
            return false;
        };

        match url.scheme() {
            "https" => self.domains.iter().any(|d| {
                let d = d.as_str();
                host == d || host.strip_suffix(d).is_some_and(|prefix| prefix.ends_with('.'))
            }),
            "http" => self.allow_localhost && host == "localhost",
            _ => false,
        }
    }
}

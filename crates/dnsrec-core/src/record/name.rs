//! Fully-qualified record name composition
//!
//! Local configuration splits a record name into `subdomain` and `domain`;
//! the provider only knows the fully-qualified name.

/// Compose the fully-qualified record name.
///
/// An empty subdomain addresses the zone apex, so the name is the domain
/// itself.
pub fn record_name(subdomain: &str, domain: &str) -> String {
    if subdomain.is_empty() {
        return domain.to_string();
    }
    format!("{subdomain}.{domain}")
}

/// Recover the subdomain from a fully-qualified record name.
///
/// Strips the domain suffix and then a single trailing `.`. A name that does
/// not end in `domain` only loses its trailing separator.
pub fn subdomain_name(full_name: &str, domain: &str) -> String {
    let without_domain = full_name.strip_suffix(domain).unwrap_or(full_name);
    without_domain
        .strip_suffix('.')
        .unwrap_or(without_domain)
        .to_string()
}

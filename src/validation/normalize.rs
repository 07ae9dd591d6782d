/// Local-part rewriting applied for a known provider.
#[derive(Debug, Clone, Copy)]
enum Cut {
    /// Drop everything from the first `+`.
    PlusOnly,
    /// Drop dots and everything from the first `+`.
    PlusAndDot,
}

struct Provider {
    domain: &'static str,
    cut: Cut,
    alias_of: Option<&'static str>,
}

const PROVIDERS: &[Provider] = &[
    Provider { domain: "gmail.com", cut: Cut::PlusAndDot, alias_of: None },
    Provider { domain: "googlemail.com", cut: Cut::PlusAndDot, alias_of: Some("gmail.com") },
    Provider { domain: "hotmail.com", cut: Cut::PlusOnly, alias_of: None },
    Provider { domain: "live.com", cut: Cut::PlusAndDot, alias_of: None },
    Provider { domain: "outlook.com", cut: Cut::PlusOnly, alias_of: None },
];

/// Canonicalizes an email address.
///
/// The address is lowercased, then provider rules strip `+tag` suffixes (and
/// dots, for Gmail and Live) from the local part. `googlemail.com` is rewritten
/// to `gmail.com`. Input that does not split into exactly two parts on `@` is
/// returned unchanged. Applying this twice gives the same result as once.
pub fn normalize_email(email: &str) -> String {
    let lower = email.to_lowercase();
    let mut parts = lower.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return email.to_owned();
    };

    let Some(provider) = PROVIDERS.iter().find(|p| p.domain == domain) else {
        return lower;
    };

    let local = match provider.cut {
        Cut::PlusOnly => strip_tag(local).to_owned(),
        Cut::PlusAndDot => strip_tag(local).replace('.', ""),
    };
    let domain = provider.alias_of.unwrap_or(domain);

    format!("{local}@{domain}")
}

fn strip_tag(local: &str) -> &str {
    local.split_once('+').map_or(local, |(head, _)| head)
}

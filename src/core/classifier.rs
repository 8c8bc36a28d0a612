use crate::domain::model::SocialProfile;
use std::collections::BTreeSet;

/// Ordering-platform domain substrings and the platform name each maps to.
/// Matching is plain substring containment on the lower-cased link.
pub const ORDER_PLATFORMS: [(&str, &str); 9] = [
    ("glovoapp.com", "glovo"),
    ("pyszne.pl", "pyszne"),
    ("ubereats", "uber"),
    ("bolt", "bolt"),
    ("wolt", "wolt"),
    ("foodora", "foodora"),
    ("bistro.sk", "bistro"),
    ("lokomenu", "loko"),
    ("delivery", "delivery"),
];

// Facebook URLs from share buttons, embedded widgets and feed dialogs are not
// canonical page links.
const FACEBOOK_SKIP: [&str; 3] = ["sharer", "plugins", "dialog/feed"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLinks {
    pub facebook: String,
    pub instagram: String,
    pub order: String,
}

/// Maps a noisy collection of harvested URLs (plus optional profile hints)
/// to one Facebook URL, one Instagram URL and a sorted, deduplicated list of
/// ordering platforms.
///
/// Profile links win over scanned links; within each pass the first match is
/// kept. Scanned links are deduplicated and walked in lexicographic order so
/// the choice among equally valid candidates does not depend on input order.
/// A single link can feed the platform list and a social field at the same
/// time.
pub fn classify(all_links: &[String], social_profiles: &[SocialProfile]) -> ClassifiedLinks {
    let mut facebook = String::new();
    let mut instagram = String::new();
    let mut order: BTreeSet<&'static str> = BTreeSet::new();

    for profile in social_profiles {
        let link = profile.link.to_lowercase();
        if link.contains("instagram.com") {
            if instagram.is_empty() {
                instagram = profile.link.clone();
            }
        } else if link.contains("facebook.com") && facebook.is_empty() {
            facebook = profile.link.clone();
        }
    }

    let unique: BTreeSet<&str> = all_links.iter().map(String::as_str).collect();

    for link in unique {
        let l = link.to_lowercase();

        if l.contains("facebook.com") && facebook.is_empty() {
            if FACEBOOK_SKIP.iter().all(|excl| !l.contains(excl)) {
                facebook = link.to_string();
            }
        } else if l.contains("instagram.com") && instagram.is_empty() {
            instagram = link.to_string();
        }

        for (domain, platform) in ORDER_PLATFORMS {
            if l.contains(domain) {
                order.insert(platform);
            }
        }
    }

    ClassifiedLinks {
        facebook,
        instagram,
        order: order.into_iter().collect::<Vec<_>>().join(", "),
    }
}

//! Footer normalizer: one CMS footer record -> contact info + social links.
//!
//! The footer's sections are generic `{title, itens}` records. They are
//! indexed once by exact title into a [`SectionIndex`]; each of the four
//! [`SectionKind`]s is then looked up with an explicit missing outcome, so a
//! renamed section empties only its own group.
//!
//! Icon URLs in `Follow Us` stay relative. The presentation layer prepends
//! the content host for social icons, unlike menu icons which arrive here
//! already absolute.

use std::collections::HashMap;

use regex::Regex;
use serde::Deserialize;

use crate::config::FooterConfig;
use crate::error::{NormalizeError, NormalizeResult};
use crate::types::{
    BusinessHours, ContactInfo, FooterView, RawFooter, RawSection, RawSectionItem, SocialIcon,
    SocialInfo, SocialLink, UsefulLink,
};

/// The four sections the footer widget knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    BusinessHours,
    Contacts,
    UsefulLinks,
    FollowUs,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::BusinessHours,
        SectionKind::Contacts,
        SectionKind::UsefulLinks,
        SectionKind::FollowUs,
    ];
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::BusinessHours => write!(f, "business_hours"),
            SectionKind::Contacts => write!(f, "contacts"),
            SectionKind::UsefulLinks => write!(f, "useful_links"),
            SectionKind::FollowUs => write!(f, "follow_us"),
        }
    }
}

/// Outcome of looking a section up by kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionLookup<'a> {
    Present(&'a RawSection),
    Missing { kind: SectionKind, title: &'a str },
}

impl<'a> SectionLookup<'a> {
    /// Child items of the section, or an empty slice when it is missing.
    pub fn items(&self) -> &'a [RawSectionItem] {
        match *self {
            SectionLookup::Present(section) => &section.itens,
            SectionLookup::Missing { .. } => &[],
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, SectionLookup::Missing { .. })
    }
}

/// Compiled heuristics and labels. Built once from [`FooterConfig`].
#[derive(Debug, Clone)]
pub struct FooterRules {
    titles: HashMap<SectionKind, String>,
    phone_marker: Regex,
    phone_separator: String,
    address_keywords: Vec<String>,
}

impl FooterRules {
    pub fn from_config(cfg: &FooterConfig) -> NormalizeResult<Self> {
        if cfg.phone_separator.is_empty() {
            return Err(NormalizeError::Config(
                "footer.phone_separator must not be empty".to_string(),
            ));
        }
        let titles = HashMap::from([
            (SectionKind::BusinessHours, cfg.business_hours_title.clone()),
            (SectionKind::Contacts, cfg.contacts_title.clone()),
            (SectionKind::UsefulLinks, cfg.useful_links_title.clone()),
            (SectionKind::FollowUs, cfg.follow_us_title.clone()),
        ]);
        Ok(Self {
            titles,
            phone_marker: Regex::new(&cfg.phone_pattern)?,
            phone_separator: cfg.phone_separator.clone(),
            address_keywords: cfg
                .address_keywords
                .iter()
                .filter(|k| !k.is_empty())
                .cloned()
                .collect(),
        })
    }

    pub fn title(&self, kind: SectionKind) -> &str {
        self.titles.get(&kind).map(String::as_str).unwrap_or_default()
    }
}

/// Sections of one footer keyed by exact, case-sensitive title. When two
/// sections share a title the first one wins.
#[derive(Debug)]
pub struct SectionIndex<'a> {
    by_title: HashMap<&'a str, &'a RawSection>,
}

impl<'a> SectionIndex<'a> {
    pub fn build(footer: &'a RawFooter) -> Self {
        let mut by_title = HashMap::with_capacity(footer.itens.len());
        for section in &footer.itens {
            if let Some(title) = section.title.as_deref() {
                by_title.entry(title).or_insert(section);
            }
        }
        Self { by_title }
    }

    pub fn lookup(&self, kind: SectionKind, rules: &'a FooterRules) -> SectionLookup<'a> {
        let title = rules.title(kind);
        match self.by_title.get(title).copied() {
            Some(section) => SectionLookup::Present(section),
            None => SectionLookup::Missing { kind, title },
        }
    }
}

/// What a single `Contacts` line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactLine {
    Phones(String, String),
    Email(String),
    Address(String),
}

/// Converts a footer record into a [`FooterView`].
#[derive(Debug, Clone)]
pub struct FooterNormalizer {
    rules: FooterRules,
}

impl FooterNormalizer {
    pub fn new(rules: FooterRules) -> Self {
        Self { rules }
    }

    pub fn from_config(cfg: &FooterConfig) -> NormalizeResult<Self> {
        Ok(Self::new(FooterRules::from_config(cfg)?))
    }

    pub fn rules(&self) -> &FooterRules {
        &self.rules
    }

    /// Normalize the CMS `data` payload: `null` means the footer is absent,
    /// an object is the footer record, anything else is rejected.
    pub fn normalize_value(&self, data: &serde_json::Value) -> NormalizeResult<FooterView> {
        match data {
            serde_json::Value::Null => Ok(self.normalize(None)),
            serde_json::Value::Object(_) => {
                let footer = RawFooter::deserialize(data)
                    .map_err(|_| NormalizeError::invalid_input("a footer record or null", data))?;
                Ok(self.normalize(Some(&footer)))
            }
            other => Err(NormalizeError::invalid_input("a footer record or null", other)),
        }
    }

    pub fn normalize(&self, footer: Option<&RawFooter>) -> FooterView {
        let Some(footer) = footer else {
            return FooterView::default();
        };

        let index = SectionIndex::build(footer);
        let [hours, contacts, links, social] =
            SectionKind::ALL.map(|kind| index.lookup(kind, &self.rules));

        for lookup in [&hours, &contacts, &links, &social] {
            if let SectionLookup::Missing { kind, title } = lookup {
                tracing::warn!(%kind, title, "footer section missing; rendering it empty");
            }
        }

        let mut contact_info = self.contacts(contacts.items());
        contact_info.business_hours = hours
            .items()
            .iter()
            .map(|item| BusinessHours {
                id: item.id.clone(),
                days: item.title.clone().unwrap_or_default(),
            })
            .collect();
        contact_info.useful_links = links
            .items()
            .iter()
            .map(|item| UsefulLink {
                id: item.id.clone(),
                name: item.title.clone().unwrap_or_default(),
                url: item.link.clone(),
            })
            .collect();

        let social_info = SocialInfo {
            social_links: social.items().iter().map(social_link).collect(),
        };

        FooterView {
            contact_info: Some(contact_info),
            social_info: Some(social_info),
        }
    }

    /// Classify one contact line: phone marker first, then `@`, then an
    /// address keyword. `None` means the line is dropped.
    pub fn classify(&self, title: &str) -> Option<ContactLine> {
        if self.rules.phone_marker.is_match(title) {
            let mut numbers = title
                .split(self.rules.phone_separator.as_str())
                .map(str::trim);
            let first = numbers.next().unwrap_or_default().to_string();
            let second = numbers.next().unwrap_or_default().to_string();
            return Some(ContactLine::Phones(first, second));
        }
        if title.contains('@') {
            return Some(ContactLine::Email(title.trim().to_string()));
        }
        if self.rules.address_keywords.iter().any(|k| title.contains(k.as_str())) {
            return Some(ContactLine::Address(title.trim().to_string()));
        }
        None
    }

    /// The first line of each class fills its field.
    fn contacts(&self, items: &[RawSectionItem]) -> ContactInfo {
        let mut info = ContactInfo::default();
        let (mut phones, mut email, mut address) = (false, false, false);

        for item in items {
            let title = item.title.as_deref().unwrap_or_default();
            match self.classify(title) {
                Some(ContactLine::Phones(first, second)) if !phones => {
                    info.phone1 = first;
                    info.phone2 = second;
                    phones = true;
                }
                Some(ContactLine::Email(value)) if !email => {
                    info.email = value;
                    email = true;
                }
                Some(ContactLine::Address(value)) if !address => {
                    info.address = value;
                    address = true;
                }
                Some(line) => tracing::debug!(?line, "duplicate contact line ignored"),
                None => tracing::debug!(title, "unclassified contact line dropped"),
            }
        }
        info
    }
}

fn social_link(item: &RawSectionItem) -> SocialLink {
    SocialLink {
        id: item.id.clone(),
        name: item.title.clone().unwrap_or_default(),
        url: item.link.clone(),
        icon: item
            .icon
            .iter()
            .filter(|icon| !icon.url.is_empty())
            .map(|icon| SocialIcon {
                url: icon.url.clone(),
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Static CMS payloads used across harnesses.
//!
//! The shapes mirror what the CMS serves for the live site: two top-level
//! menus with icon-bearing topics, and a footer with all four sections.

use serde_json::{json, Value};

/// Base URL used wherever a harness needs a content host without a server.
pub const CMS_HOST: &str = "https://cms.test";

/// Two menus, the first with two topics (one without an icon), the second
/// without `itens`. Source orders are deliberately scrambled.
pub fn menus_fixture() -> Value {
    json!([
        {
            "id": 1,
            "title": "Particulares",
            "link": "/particulares",
            "order": 2,
            "itens": [
                {
                    "id": 11,
                    "title": "Auto",
                    "order": 7,
                    "icon": { "url": "/uploads/auto.svg", "alternativeText": null },
                    "itens": [
                        { "id": 111, "title": "Simular", "link": "/simular/auto", "order": 3 },
                        { "id": 112, "title": "Participar sinistro", "link": "/sinistros", "order": 1 },
                        { "id": 113, "title": "Coberturas", "link": "/auto/coberturas" }
                    ]
                },
                {
                    "id": 12,
                    "title": "Habitação",
                    "order": 1,
                    "itens": []
                }
            ]
        },
        {
            "id": 2,
            "title": "Empresas",
            "link": "/empresas"
        }
    ])
}

/// Footer with every section the widget renders.
pub fn footer_fixture() -> Value {
    json!({
        "id": 1,
        "title": "Footer",
        "itens": [
            {
                "id": 10,
                "title": "Business Hours",
                "itens": [
                    { "id": 101, "title": "Mon - Fri: 08:00 - 17:00" },
                    { "id": 102, "title": "Sat: 09:00 - 12:00" }
                ]
            },
            {
                "id": 20,
                "title": "Contacts",
                "itens": [
                    { "id": 201, "title": "(+238) 123 456 / 987 654" },
                    { "id": 202, "title": "email@example.com" },
                    { "id": 203, "title": "Achada Street 1" },
                    { "id": 204, "title": "Fax available on request" }
                ]
            },
            {
                "id": 30,
                "title": "Useful Links",
                "itens": [
                    { "id": 301, "title": "Complaints", "link": "/complaints" },
                    { "id": 302, "title": "Privacy", "link": "/privacy" }
                ]
            },
            {
                "id": 40,
                "title": "Follow Us",
                "itens": [
                    {
                        "id": 401,
                        "title": "Facebook",
                        "link": "https://facebook.com/seguros",
                        "icon": { "url": "/uploads/facebook.svg" }
                    },
                    { "id": 402, "title": "LinkedIn", "link": "https://linkedin.com/company/seguros" }
                ]
            }
        ]
    })
}

/// `footer_fixture` without the section titled `title`.
pub fn footer_without(title: &str) -> Value {
    let mut footer = footer_fixture();
    if let Some(sections) = footer["itens"].as_array_mut() {
        sections.retain(|s| s["title"] != title);
    }
    footer
}

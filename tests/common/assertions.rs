//! Domain-specific assertion macros for portal harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! view-model invariant that was violated.

// ---------------------------------------------------------------------------
// Menu assertions
// ---------------------------------------------------------------------------

/// Assert that every topic's `order` equals its position and every leaf's
/// `order` is 0.
///
/// ```rust
/// assert_menu_orders_normalized!(menus);
/// ```
#[macro_export]
macro_rules! assert_menu_orders_normalized {
    ($menus:expr) => {{
        let menus: &[portal_core::MenuEntry] = &$menus;
        for entry in menus {
            for (position, topic) in entry.topics.iter().enumerate() {
                if topic.order != position {
                    panic!(
                        "assert_menu_orders_normalized! failed: topic {:?} of menu {:?}\n  expected order: {}\n  actual:         {}",
                        topic.title, entry.name, position, topic.order
                    );
                }
                if let Some(leaf) = topic.submenus.iter().find(|leaf| leaf.order != 0) {
                    panic!(
                        "assert_menu_orders_normalized! failed: leaf {:?} under {:?} has order {}",
                        leaf.name, topic.title, leaf.order
                    );
                }
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Footer assertions
// ---------------------------------------------------------------------------

/// Assert the four scalar contact fields of a `FooterView`.
///
/// ```rust
/// assert_contact!(view, phone1: "(+238) 123 456", phone2: "987 654",
///                 email: "email@example.com", address: "Achada Street 1");
/// ```
#[macro_export]
macro_rules! assert_contact {
    ($view:expr, phone1: $p1:expr, phone2: $p2:expr, email: $email:expr, address: $addr:expr) => {{
        let view: &portal_core::FooterView = &$view;
        let info = view
            .contact_info
            .as_ref()
            .expect("assert_contact! failed: contactInfo is null");
        pretty_assertions::assert_eq!(
            (
                info.phone1.as_str(),
                info.phone2.as_str(),
                info.email.as_str(),
                info.address.as_str()
            ),
            ($p1, $p2, $email, $addr),
            "assert_contact! failed: (phone1, phone2, email, address) mismatch"
        );
    }};
}

/// Assert that a `FooterView` is the "render nothing" value.
#[macro_export]
macro_rules! assert_footer_absent {
    ($view:expr) => {{
        let view: &portal_core::FooterView = &$view;
        if view.contact_info.is_some() || view.social_info.is_some() {
            panic!(
                "assert_footer_absent! failed: expected both outputs null, got {:?}",
                view
            );
        }
    }};
}

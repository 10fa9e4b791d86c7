//! View functions rendering data models into HTML strings
//!
//! Views are pure: they take a data model and return markup, nothing
//! else. Behavior lives in the containers; the `data-testid` attributes
//! emitted here are the hooks containers and tests rely on.

pub mod bills_ui;
pub mod new_bill_ui;
pub mod pages;

pub use bills_ui::{bills_ui, receipt_modal};
pub use new_bill_ui::{NewBillViewModel, new_bill_ui};
pub use pages::{error_page, layout, login_page};

/// Percent-encode a value for use as a query-string parameter
///
/// Everything outside the RFC 3986 unreserved set is encoded, so a
/// value containing `&`, `#` or `?` survives as a single parameter.
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Escape a value for safe interpolation into HTML
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

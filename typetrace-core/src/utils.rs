//! Naming helpers for generated identifiers.
//!
//! Event names in tracking plans are free-form ("Order Completed", "cart
//! viewed", "checkout_step_2"); generators derive language identifiers from
//! them with these helpers.

/// Convert a free-form name to PascalCase (e.g. "Order Completed" -> "OrderCompleted").
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).map(capitalize).collect()
}

/// Convert a free-form name to camelCase (e.g. "Order Completed" -> "orderCompleted").
pub fn to_camel_case(s: &str) -> String {
    let mut words = split_words(s);
    match words.next() {
        None => String::new(),
        Some(first) => {
            let mut out = decapitalize(first);
            for word in words {
                out.push_str(&capitalize(word));
            }
            out
        }
    }
}

fn split_words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

fn decapitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("Order Completed"), "OrderCompleted");
        assert_eq!(to_pascal_case("cart viewed"), "CartViewed");
        assert_eq!(to_pascal_case("checkout_step_2"), "CheckoutStep2");
        assert_eq!(to_pascal_case("app-opened"), "AppOpened");
        assert_eq!(to_pascal_case("orderId"), "OrderId");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("Order Completed"), "orderCompleted");
        assert_eq!(to_camel_case("cart viewed"), "cartViewed");
        assert_eq!(to_camel_case("checkout_step_2"), "checkoutStep2");
        assert_eq!(to_camel_case("orderId"), "orderId");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_punctuation_is_stripped() {
        assert_eq!(to_pascal_case("Product (v2) Added!"), "ProductV2Added");
        assert_eq!(to_camel_case("Product (v2) Added!"), "productV2Added");
    }
}

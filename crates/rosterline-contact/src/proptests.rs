//! Property-based tests for phone formatting.

#[cfg(test)]
mod tests {
    use crate::phone::format_phone;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_text_is_never_empty(raw in "\\PC*") {
            prop_assert!(!format_phone(&raw).text.is_empty());
        }

        #[test]
        fn test_href_is_digits_and_extension(raw in "[0-9 ()x.;,/|+-]{0,40}") {
            if let Some(href) = format_phone(&raw).href {
                let rest = href.strip_prefix("tel:+1").unwrap_or("");
                prop_assert!(!rest.is_empty());
                let mut parts = rest.splitn(2, ',');
                let number = parts.next().unwrap_or("");
                prop_assert!(number.len() == 10 || number.len() == 7);
                prop_assert!(number.chars().all(|c| c.is_ascii_digit()));
                if let Some(ext) = parts.next() {
                    prop_assert!((1..=6).contains(&ext.len()));
                    prop_assert!(ext.chars().all(|c| c.is_ascii_digit()));
                }
            }
        }

        #[test]
        fn test_ten_digit_numbers_round_trip(area in 200u32..1000, prefix in 200u32..1000, line in 0u32..10000) {
            let raw = format!("{area}-{prefix}-{line:04}");
            let channel = format_phone(&raw);
            prop_assert_eq!(channel.text, format!("({area}) {prefix}-{line:04}"));
            prop_assert_eq!(channel.href, Some(format!("tel:+1{area}{prefix}{line:04}")));
        }
    }
}

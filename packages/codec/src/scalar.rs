//! Codecs for primitive scalars and `String`.
//!
//! Numbers and booleans use Rust's own literal grammar. Nothing is trimmed
//! and no locale applies: `" 1"`, `"1_000"` and `"1,5"` all fail.

use crate::StringCodec;

crate::from_str_codec!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

impl StringCodec for String {
    fn parse(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn format(&self) -> String {
        self.clone()
    }
}

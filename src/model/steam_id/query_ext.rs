use std::borrow::Borrow;
use std::fmt::Write;

use super::SteamId;

/// Extends iterators that iterate over [`SteamId`]s or [`&SteamId`](SteamId)s
pub trait SteamIdQueryExt: Iterator {
    /// Builds a string by using up the iterator.
    ///
    /// Tries to be efficient, by approximating the size of the resulting
    /// string and initially allocating enough space for the whole thing.
    fn to_steam_id_string<T>(mut self, sep: &str) -> String
    where
        Self: Sized + Iterator<Item = T>,
        T: Borrow<SteamId>,
    {
        let (lower, _) = self.size_hint();
        let cap = lower * SteamId::MAX_DIGITS_FOR_U64 + lower.saturating_sub(1) * sep.len();
        let mut buf = String::with_capacity(cap);
        if let Some(id) = self.next() {
            // writing into a `String` can't fail
            let _ = write!(buf, "{}", id.borrow());
            for id in self {
                buf.push_str(sep);
                let _ = write!(buf, "{}", id.borrow());
            }
        }
        buf
    }
}
impl<T: Borrow<SteamId>, I: Iterator<Item = T>> SteamIdQueryExt for I {}

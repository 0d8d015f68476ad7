//! Minimal i18n message resolver.
//!
//! This module provides a tiny message table for the console diagnostics. It
//! avoids allocations and keeps string lifetimes static for UEFI text output.
//! Messages that carry a value end with the separator the value follows.

/// Supported languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    En,
    Ja,
    Zh,
}

/// Select the language heuristically. In UEFI we do not query locale yet; we
/// default to English to maximize compatibility.
#[inline(always)]
pub fn detect_lang() -> Lang {
    Lang::En
}

/// Message keys used by the command.
pub mod key {
    pub const USAGE: &str = "usage";
    pub const USAGE_ADDR: &str = "usage_addr";
    pub const USAGE_PAGES: &str = "usage_pages";
    pub const USAGE_HEX: &str = "usage_hex";
    pub const BAD_ARGC: &str = "bad_argc";
    pub const BAD_PAGES: &str = "bad_pages";
    pub const BAD_ADDR: &str = "bad_addr";
    pub const TRUNCATED: &str = "truncated";
    pub const FAILED: &str = "failed";
}

/// Resolve a message key for a given language.
#[inline(always)]
pub fn t(lang: Lang, key: &str) -> &'static str {
    match lang {
        Lang::En => match key {
            key::USAGE => "FreePages: __PhysAddr__ __PgCnt__\r\n",
            key::USAGE_ADDR => "__PhysAddr__   0... ",
            key::USAGE_PAGES => "__PgCnt__     [0..",
            key::USAGE_HEX => "All numbers hex w/ no leading 0x\r\n",
            key::BAD_ARGC => "Invalid argument count\r\n",
            key::BAD_PAGES => "Invalid PgCnt\r\n",
            key::BAD_ADDR => "Invalid Address\r\n",
            key::TRUNCATED => "too many arguments, truncating: ",
            key::FAILED => "Free Pages Failed: ",
            _ => "\r\n",
        },
        Lang::Ja => match key {
            key::USAGE => "FreePages: __PhysAddr__ __PgCnt__\r\n",
            key::USAGE_ADDR => "__PhysAddr__   0... ",
            key::USAGE_PAGES => "__PgCnt__     [0..",
            key::USAGE_HEX => "数値はすべて 16 進数 (0x なし)\r\n",
            key::BAD_ARGC => "引数の数が不正です\r\n",
            key::BAD_PAGES => "PgCnt が不正です\r\n",
            key::BAD_ADDR => "アドレスが不正です\r\n",
            key::TRUNCATED => "引数が多すぎるため切り捨てます: ",
            key::FAILED => "FreePages 失敗: ",
            _ => "\r\n",
        },
        Lang::Zh => match key {
            key::USAGE => "FreePages: __PhysAddr__ __PgCnt__\r\n",
            key::USAGE_ADDR => "__PhysAddr__   0... ",
            key::USAGE_PAGES => "__PgCnt__     [0..",
            key::USAGE_HEX => "所有数字均为十六进制（无 0x 前缀）\r\n",
            key::BAD_ARGC => "参数数量无效\r\n",
            key::BAD_PAGES => "PgCnt 无效\r\n",
            key::BAD_ADDR => "地址无效\r\n",
            key::TRUNCATED => "参数过多，已截断: ",
            key::FAILED => "FreePages 失败: ",
            _ => "\r\n",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 9] = [
        key::USAGE,
        key::USAGE_ADDR,
        key::USAGE_PAGES,
        key::USAGE_HEX,
        key::BAD_ARGC,
        key::BAD_PAGES,
        key::BAD_ADDR,
        key::TRUNCATED,
        key::FAILED,
    ];

    #[test]
    fn every_key_resolves_in_every_language() {
        for lang in [Lang::En, Lang::Ja, Lang::Zh] {
            for k in KEYS {
                assert_ne!(t(lang, k), "\r\n", "{:?} {}", lang, k);
            }
        }
    }

    #[test]
    fn unknown_key_is_blank_line() {
        assert_eq!(t(Lang::En, "nope"), "\r\n");
    }
}

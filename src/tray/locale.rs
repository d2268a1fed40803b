//! 托盘菜单语言表
//!
//! 按语言代码查找菜单文本。查找顺序：完整代码 -> 主语言子标签 -> en-US

use tracing::warn;

/// 一种语言的托盘菜单文本
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleTable {
    pub code: &'static str,
    pub open: &'static str,
    pub settings: &'static str,
    pub exit: &'static str,
}

static TABLES: [LocaleTable; 6] = [
    LocaleTable {
        code: "en-US",
        open: "Open",
        settings: "Settings",
        exit: "Exit",
    },
    LocaleTable {
        code: "fr-FR",
        open: "Ouvrir",
        settings: "Paramètres",
        exit: "Quitter",
    },
    LocaleTable {
        code: "de-DE",
        open: "Öffnen",
        settings: "Einstellungen",
        exit: "Beenden",
    },
    LocaleTable {
        code: "es-ES",
        open: "Abrir",
        settings: "Configuración",
        exit: "Salir",
    },
    LocaleTable {
        code: "fa-IR",
        open: "باز کردن",
        settings: "تنظیمات",
        exit: "خروج",
    },
    LocaleTable {
        code: "zh-CN",
        open: "打开",
        settings: "设置",
        exit: "退出",
    },
];

/// 支持的语言代码
pub fn supported_languages() -> Vec<&'static str> {
    TABLES.iter().map(|t| t.code).collect()
}

/// 查找语言表
pub fn resolve(language_code: &str) -> &'static LocaleTable {
    let code = language_code.trim().replace('_', "-");

    if let Some(table) = TABLES.iter().find(|t| t.code.eq_ignore_ascii_case(&code)) {
        return table;
    }

    let primary = code.split('-').next().unwrap_or_default();
    if !primary.is_empty() {
        if let Some(table) = TABLES.iter().find(|t| {
            t.code
                .split('-')
                .next()
                .is_some_and(|p| p.eq_ignore_ascii_case(primary))
        }) {
            return table;
        }
    }

    let fallback = &TABLES[0];
    warn!("[托盘] 不支持的语言 {language_code}，使用 {}", fallback.code);
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact() {
        assert_eq!(resolve("fr-FR").settings, "Paramètres");
        assert_eq!(resolve("zh-CN").exit, "退出");
    }

    #[test]
    fn test_resolve_case_and_separator() {
        assert_eq!(resolve("de_de").code, "de-DE");
        assert_eq!(resolve(" EN-us ").code, "en-US");
    }

    #[test]
    fn test_resolve_primary_subtag() {
        assert_eq!(resolve("fr-CA").code, "fr-FR");
        assert_eq!(resolve("es").code, "es-ES");
    }

    #[test]
    fn test_resolve_fallback() {
        assert_eq!(resolve("xx-YY").code, "en-US");
        assert_eq!(resolve("").code, "en-US");
    }

    #[test]
    fn test_supported_languages_unique() {
        let mut codes = supported_languages();
        let len = codes.len();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), len);
        assert!(codes.contains(&"en-US"));
    }
}

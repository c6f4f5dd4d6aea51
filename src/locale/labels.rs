//! Bilingual UI labels
//!
//! One static table per locale. Catalog data is never translated here; only
//! the fixed strings of the interface are.

use super::Locale;

/// Fixed interface strings for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub app_title: &'static str,
    pub nav_plugins: &'static str,
    pub nav_scripts: &'static str,
    pub nav_install: &'static str,
    pub nav_info: &'static str,
    pub plugins_subtitle: &'static str,
    pub scripts_subtitle: &'static str,
    pub install_subtitle: &'static str,
    pub info_subtitle: &'static str,
    pub search_placeholder: &'static str,
    pub detail: &'static str,
    pub download: &'static str,
    pub no_description: &'static str,
    pub no_items: &'static str,
    pub reload: &'static str,
    pub no_info_title: &'static str,
    pub no_info_text: &'static str,
    pub close: &'static str,
    pub tag_filter: &'static str,
    pub error_title: &'static str,
    pub error_prefix: &'static str,
    pub info_form_text: &'static str,
    pub info_form_button: &'static str,
    pub guide_unavailable: &'static str,
    pub loading: &'static str,
    pub author: &'static str,
    pub selected: &'static str,
}

const JA: Labels = Labels {
    app_title: "AviUtl2 Hub",
    nav_plugins: "プラグイン",
    nav_scripts: "スクリプト",
    nav_install: "導入方法",
    nav_info: "情報提供",
    plugins_subtitle: "最新のプラグインを見つけよう",
    scripts_subtitle: "便利なスクリプトを探そう",
    install_subtitle: "プラグインとスクリプトの基本的な導入手順",
    info_subtitle: "新しいプラグインやスクリプトの情報を教えてください",
    search_placeholder: "検索...",
    detail: "詳細",
    download: "Download",
    no_description: "説明がありません。",
    no_items: "アイテムが見つかりませんでした。",
    reload: "データを再読み込み",
    no_info_title: "情報がありません",
    no_info_text: "詳細情報が提供されていません。\n作者のサイトなどを別途ご確認ください。",
    close: "閉じる",
    tag_filter: "タグフィルタ",
    error_title: "エラーが発生しました",
    error_prefix: "詳細: ",
    info_form_text: "このサイトに掲載されていないプラグインやスクリプト、または情報に誤りがある場合など、お気軽に下記のフォームから情報をお寄せください。",
    info_form_button: "情報提供フォームへ",
    guide_unavailable: "導入方法のコンテンツが読み込めませんでした。",
    loading: "読み込み中...",
    author: "作者",
    selected: "選択中",
};

const EN: Labels = Labels {
    app_title: "AviUtl2 Hub",
    nav_plugins: "Plugins",
    nav_scripts: "Scripts",
    nav_install: "How to Install",
    nav_info: "Submit Info",
    plugins_subtitle: "Discover the latest plugins",
    scripts_subtitle: "Find useful scripts",
    install_subtitle: "Basic installation steps for plugins and scripts",
    info_subtitle: "Tell us about new plugins and scripts",
    search_placeholder: "Search...",
    detail: "Details",
    download: "Download",
    no_description: "No description available.",
    no_items: "No items found.",
    reload: "Reload Data",
    no_info_title: "No Information Available",
    no_info_text: "No detailed information provided.\nPlease check the author's site separately.",
    close: "Close",
    tag_filter: "Tag Filter",
    error_title: "An Error Occurred",
    error_prefix: "Detail: ",
    info_form_text: "If you find a plugin or script not listed on this site, or if there are any errors in the information, please feel free to submit information using the form below.",
    info_form_button: "Go to Submission Form",
    guide_unavailable: "The installation guide could not be loaded.",
    loading: "Loading...",
    author: "Author",
    selected: "selected",
};

impl Labels {
    /// Label table for a locale
    #[must_use]
    pub const fn for_locale(locale: Locale) -> &'static Self {
        match locale {
            Locale::Ja => &JA,
            Locale::En => &EN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_differ_per_locale() {
        let ja = Labels::for_locale(Locale::Ja);
        let en = Labels::for_locale(Locale::En);
        assert_eq!(ja.nav_plugins, "プラグイン");
        assert_eq!(en.nav_plugins, "Plugins");
        assert_ne!(ja.no_items, en.no_items);
    }

    #[test]
    fn test_labels_via_locale() {
        assert_eq!(Locale::En.labels().tag_filter, "Tag Filter");
    }
}

//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, FormTexts, HelpActionTexts, HelpTexts, HintTexts, KeyNames,
    ResultTexts, StatusBarTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "QR Studio",
        tagline: "Turn a link into a QR code",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
        },
        actions: ActionTexts {
            next_field: "Next field",
            generate: "Generate",
            choose: "Choose",
            apply: "Apply",
            download: "Download",
            share: "Share",
            help: "Help",
            quit: "Quit",
        },
    },

    // ========================================================================
    // 面板
    // ========================================================================
    form: FormTexts {
        title: "Create",
        url_label: "Link",
        url_placeholder: "https://example.com",
        prompt_label: "Prompt",
        prompt_placeholder: "Describe the style of your QR code",
        suggestions_label: "Suggestions",
        generate: "Generate",
        generating: "Generating...",
    },

    result: ResultTexts {
        title: "Result",
        idle_hint: "Fill in the form and press Enter to generate a QR code.",
        loading: "Generating your QR code",
        failed_title: "Generation failed",
        retry_hint: "Adjust the form or press Enter to retry.",
        id: "ID",
        target: "Link",
        image_url: "Image",
        latency: "Latency",
        created_at: "Created",
        share_link: "Share link",
        size: "Size",
        preview_unavailable: "Preview unavailable",
        preview_too_small: "Enlarge the terminal to see the preview",
    },

    status_bar: StatusBarTexts {
        language: "Language",
        theme: "Theme",
        theme_dark: "Dark",
        theme_light: "Light",
    },

    status: StatusTexts {
        config_fallback: "Config file could not be read, using defaults",
        config_save_failed: "Could not save settings",
        busy: "A QR code is already being generated",
        fix_errors: "Please fix the highlighted fields",
        nothing_to_download: "Generate a QR code first",
        nothing_to_share: "Generate a QR code first",
        downloading: "Downloading...",
        sharing: "Copying link...",
        language_changed: "Language",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global",
        form_shortcuts: "Form",
        close_hint: "Press Esc or F1 to close",
        actions: HelpActionTexts {
            switch_focus: "Next / previous field",
            submit: "Generate QR code",
            download: "Download image",
            share: "Copy share link",
            language: "Switch language",
            theme: "Switch theme",
            help: "Show this help",
            back: "Close dialog / clear errors",
            quit: "Quit",
            pick_suggestion: "Pick a suggestion",
            edit_text: "Move cursor / edit",
        },
    },
};

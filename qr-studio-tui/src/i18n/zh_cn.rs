//! 简体中文翻译 (zh-CN)

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
        tagline: "把链接变成二维码",
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
            next_field: "下一项",
            generate: "生成",
            choose: "选择",
            apply: "应用",
            download: "下载",
            share: "分享",
            help: "帮助",
            quit: "退出",
        },
    },

    // ========================================================================
    // 面板
    // ========================================================================
    form: FormTexts {
        title: "创建",
        url_label: "链接",
        url_placeholder: "https://example.com",
        prompt_label: "提示词",
        prompt_placeholder: "描述二维码的风格",
        suggestions_label: "推荐",
        generate: "生成",
        generating: "生成中...",
    },

    result: ResultTexts {
        title: "结果",
        idle_hint: "填写表单后按 Enter 生成二维码。",
        loading: "正在生成二维码",
        failed_title: "生成失败",
        retry_hint: "修改表单或按 Enter 重试。",
        id: "编号",
        target: "链接",
        image_url: "图片",
        latency: "耗时",
        created_at: "创建时间",
        share_link: "分享链接",
        size: "尺寸",
        preview_unavailable: "无法生成预览",
        preview_too_small: "放大终端窗口以查看预览",
    },

    status_bar: StatusBarTexts {
        language: "语言",
        theme: "主题",
        theme_dark: "深色",
        theme_light: "浅色",
    },

    status: StatusTexts {
        config_fallback: "无法读取配置文件，已使用默认配置",
        config_save_failed: "无法保存设置",
        busy: "二维码正在生成中",
        fix_errors: "请修正标出的字段",
        nothing_to_download: "请先生成二维码",
        nothing_to_share: "请先生成二维码",
        downloading: "下载中...",
        sharing: "正在复制链接...",
        language_changed: "语言",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global_shortcuts: "全局",
        form_shortcuts: "表单",
        close_hint: "按 Esc 或 F1 关闭",
        actions: HelpActionTexts {
            switch_focus: "下一项 / 上一项",
            submit: "生成二维码",
            download: "下载图片",
            share: "复制分享链接",
            language: "切换语言",
            theme: "切换主题",
            help: "显示帮助",
            back: "关闭弹窗 / 清除错误",
            quit: "退出",
            pick_suggestion: "选择推荐提示词",
            edit_text: "移动光标 / 编辑",
        },
    },
};

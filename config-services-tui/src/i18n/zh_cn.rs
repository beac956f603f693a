//! 简体中文 (zh-CN)

use super::keys::{
    CommonTexts, GridTexts, HelpTexts, HintActions, HintTexts, KeyNames, ModalTexts, StatusTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "配置服务管理",
        loading: "加载中...",
        error: "错误",
    },

    grid: GridTexts {
        title: "编辑配置",
        action_header: "操作",
        no_records: "未找到记录",
        record_count: "记录数",
        tooltip_key: "配置键",
        debug_action: "调试操作",
        debug_selected: "已选择 configKey",
    },

    status: StatusTexts {
        refreshing: "正在刷新...",
        loaded: "已加载记录：",
        fetch_failed: "加载配置失败：",
        delete_unavailable: "删除功能尚未开放",
        save_local_only: "仅在本地保存，未提交到服务器",
        edit_cancelled: "已取消编辑",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            up_down: "↑↓",
            delete: "Del",
            alt_r: "Alt+r",
            alt_h: "Alt+h",
            alt_q: "Alt+q",
        },
        actions: HintActions {
            select: "选择",
            back: "返回",
            refresh: "刷新",
            help: "帮助",
            quit: "退出",
        },
    },

    modal: ModalTexts {
        close_hint: "按 Esc 关闭",
        fetch_error_title: "无法加载配置",
    },

    help: HelpTexts {
        title: "帮助",
        navigation: "导航",
        row_actions: "行操作",
        global: "全局",
        move_cursor: "移动光标",
        first_last: "首行 / 末行",
        left_button: "左侧按钮（编辑 / 保存）",
        right_button: "右侧按钮（删除 / 取消）",
        clear_selection: "关闭弹窗 / 清除选择",
        refresh: "重新加载配置",
        show_help: "显示帮助",
        quit: "退出",
    },
};

//! # Display Language
//!
//! Every user-visible string lives in a per-language [`Labels`] table so the
//! rest of the code renders from one component regardless of language. The
//! answer text itself comes from the backend verbatim; only chrome (status
//! words, hints, role names) is translated.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Lang {
    /// Chinese chrome (the backend's native language).
    #[serde(rename = "zh")]
    #[default]
    Zh,
    /// English chrome.
    #[serde(rename = "en")]
    En,
}

impl Lang {
    pub fn toggle(self) -> Lang {
        match self {
            Lang::Zh => Lang::En,
            Lang::En => Lang::Zh,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Lang::Zh => &ZH,
            Lang::En => &EN,
        }
    }
}

/// User-visible chrome strings for one language.
pub struct Labels {
    pub app_title: &'static str,
    pub status_idle: &'static str,
    pub status_loading: &'static str,
    pub status_done: &'static str,
    pub status_error: &'static str,
    pub you: &'static str,
    pub assistant: &'static str,
    pub input_title: &'static str,
    pub validation_empty: &'static str,
    pub landing_heading: &'static str,
    pub landing_intro: &'static str,
    pub quick_heading: &'static str,
    pub hints: &'static str,
}

static ZH: Labels = Labels {
    app_title: "茶问",
    status_idle: "就绪",
    status_loading: "思考中",
    status_done: "完成",
    status_error: "出错",
    you: "你",
    assistant: "茶问",
    input_title: "输入问题",
    validation_empty: "请输入问题",
    landing_heading: "欢迎使用茶问",
    landing_intro: "代茶饮知识问答：配方、功效与宜忌。输入问题，或按 Alt+数字 快速提问。",
    quick_heading: "快速提问",
    hints: "Enter 发送 · Esc 取消 · Ctrl+L 清空 · Ctrl+T 切换语言 · Ctrl+C 退出",
};

static EN: Labels = Labels {
    app_title: "Chawen",
    status_idle: "Ready",
    status_loading: "Thinking",
    status_done: "Done",
    status_error: "Error",
    you: "You",
    assistant: "Chawen",
    input_title: "Ask a question",
    validation_empty: "Please enter a question",
    landing_heading: "Welcome to Chawen",
    landing_intro: "Q&A on medicinal herbal teas: recipes, effects and cautions. Type a question, or press Alt+number for a quick one.",
    quick_heading: "Quick questions",
    hints: "Enter send · Esc cancel · Ctrl+L clear · Ctrl+T language · Ctrl+C quit",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Lang::Zh.toggle(), Lang::En);
        assert_eq!(Lang::Zh.toggle().toggle(), Lang::Zh);
    }

    #[test]
    fn test_labels_differ_per_language() {
        assert_eq!(Lang::Zh.labels().status_loading, "思考中");
        assert_eq!(Lang::En.labels().status_loading, "Thinking");
    }

    #[test]
    fn test_default_is_chinese() {
        assert_eq!(Lang::default(), Lang::Zh);
    }
}

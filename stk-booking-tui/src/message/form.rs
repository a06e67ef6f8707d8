//! 表单消息定义

/// 表单消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,

    /// 下一个服务（仅服务选择器）
    NextOption,
    /// 上一个服务
    PrevOption,

    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 清空当前字段
    ClearField,

    /// 重新生成验证码
    ReloadCaptcha,

    /// 确认（Enter）：焦点在重新生成按钮时重新生成验证码，否则提交
    Confirm,
}

//! 表单焦点定义

use stk_booking_core::Field;

/// 表单焦点：输入字段或按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    /// 输入字段（含服务选择器）
    Field(Field),
    /// “重新生成验证码” 按钮
    ReloadCaptcha,
    /// “提交” 按钮
    Submit,
}

impl Default for FormFocus {
    fn default() -> Self {
        Self::Field(Field::FullName)
    }
}

impl FormFocus {
    /// 按表单顺序排列的全部焦点
    pub const ORDER: [Self; 10] = [
        Self::Field(Field::FullName),
        Self::Field(Field::Phone),
        Self::Field(Field::Email),
        Self::Field(Field::Service),
        Self::Field(Field::Date),
        Self::Field(Field::Time),
        Self::Field(Field::Message),
        Self::Field(Field::CaptchaResult),
        Self::ReloadCaptcha,
        Self::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// 下一个焦点（循环）
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// 上一个焦点（循环）
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// 当前可输入文本的字段（服务选择器与按钮除外）
    pub fn text_field(self) -> Option<Field> {
        match self {
            Self::Field(Field::Service) | Self::ReloadCaptcha | Self::Submit => None,
            Self::Field(field) => Some(field),
        }
    }

    /// 是否是服务选择器
    pub fn is_service(self) -> bool {
        self == Self::Field(Field::Service)
    }
}

//! 页面子消息

/// 发给页面的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMessage {
    /// 鼠标左键按下（终端坐标）
    Click { column: u16, row: u16 },

    /// 点击菜单按钮
    ToggleMenu,

    /// 点击主题按钮
    ToggleTheme,

    /// 模拟设备旋转
    Rotate,

    /// 终端尺寸变化
    Resize { columns: u16, rows: u16 },

    /// 焦点移到下一个输入字段
    FocusNext,

    /// 取消输入焦点
    Blur,

    /// 在焦点字段输入字符
    Input(char),

    /// 删除焦点字段最后一个字符
    Backspace,

    /// 提交表单
    Submit,
}
